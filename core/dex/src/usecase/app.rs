//! dex のユースケース本体
//!
//! 取得層（EntityFetcher / PopulationLoader）は失敗を NotFound / 空データセットに畳み込む。
//! ここではそれをユーザー向けのエラーやメッセージに変換する。

use common::analysis::{
    attack_defense_points, average_stat_by_type, type_distribution, ScatterPoint, StatComparison,
    TypeAverage, TypeCount,
};
use common::domain::{FetchOutcome, Limit, Pokemon, PopulationDataset, StatKind};
use common::error::Error;
use common::usecase::{EntityFetcher, PopulationLoader};
use serde::Serialize;
use std::sync::Arc;

/// 2 体比較の結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub left: Pokemon,
    pub right: Pokemon,
    pub stats: StatComparison,
}

/// タイプ集計の結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeAnalysis {
    pub stat: StatKind,
    pub limit: usize,
    pub rows: usize,
    pub distribution: Vec<TypeCount>,
    pub averages: Vec<TypeAverage>,
    pub points: Vec<ScatterPoint>,
}

impl TypeAnalysis {
    fn from_dataset(dataset: &PopulationDataset, stat: StatKind, limit: usize) -> Self {
        Self {
            stat,
            limit,
            rows: dataset.len(),
            distribution: type_distribution(dataset),
            averages: average_stat_by_type(dataset, stat),
            points: attack_defense_points(dataset),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}

pub struct DexUseCase {
    fetcher: Arc<EntityFetcher>,
    loader: Arc<PopulationLoader>,
    default_limit: usize,
}

impl DexUseCase {
    pub fn new(fetcher: Arc<EntityFetcher>, loader: Arc<PopulationLoader>, default_limit: usize) -> Self {
        Self {
            fetcher,
            loader,
            default_limit,
        }
    }

    /// 1 体の図鑑カード用レコード
    pub fn lookup(&self, identifier: &str) -> Result<Pokemon, Error> {
        match self.fetcher.fetch(identifier) {
            FetchOutcome::Found(p) => Ok(p),
            FetchOutcome::NotFound => Err(Error::not_found(format!(
                "Pokémon '{}' not found",
                identifier.trim()
            ))),
        }
    }

    /// 2 体のステータス比較。どちらか一方でも見つからなければエラー
    pub fn compare(&self, left: &str, right: &str) -> Result<Comparison, Error> {
        let left = self.lookup(left)?;
        let right = self.lookup(right)?;
        let stats = StatComparison::between(&left, &right);
        Ok(Comparison { left, right, stats })
    }

    /// 先頭 limit 体（未指定なら設定値）の第 1 タイプ集計
    pub fn type_analysis(&self, stat: StatKind, limit: Option<usize>) -> TypeAnalysis {
        let limit = limit.unwrap_or(self.default_limit);
        let dataset = self.loader.load(Limit::new(limit));
        TypeAnalysis::from_dataset(&dataset, stat, limit)
    }
}
