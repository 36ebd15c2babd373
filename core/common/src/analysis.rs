//! データセットに対する集計（タイプ分布・タイプ別平均・攻撃/防御の散布・2 体比較）
//!
//! 描画は持たない。表示側はここで作った行をそのまま並べる。

use crate::domain::{Pokemon, PopulationDataset, StatKind};
use serde::Serialize;
use std::collections::BTreeMap;

/// 第 1 タイプごとの件数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    pub type_name: String,
    pub count: usize,
}

/// 第 1 タイプごとのステータス平均
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeAverage {
    pub type_name: String,
    pub mean: f64,
}

/// 攻撃/防御の散布図の 1 点
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScatterPoint {
    pub name: String,
    pub primary_type: String,
    pub attack: u32,
    pub defense: u32,
}

/// 第 1 タイプの件数（件数の降順、同数はタイプ名の昇順）
pub fn type_distribution(dataset: &PopulationDataset) -> Vec<TypeCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for row in dataset.rows() {
        *counts.entry(row.primary_type.as_str()).or_insert(0) += 1;
    }
    let mut out: Vec<TypeCount> = counts
        .into_iter()
        .map(|(t, count)| TypeCount {
            type_name: t.to_string(),
            count,
        })
        .collect();
    // BTreeMap 由来で名前順になっているので安定ソートで件数だけ見ればよい
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

/// 第 1 タイプごとの stat の平均（降順、同値はタイプ名の昇順）
pub fn average_stat_by_type(dataset: &PopulationDataset, stat: StatKind) -> Vec<TypeAverage> {
    let mut sums: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
    for row in dataset.rows() {
        let e = sums.entry(row.primary_type.as_str()).or_insert((0, 0));
        e.0 += u64::from(row.stat(stat));
        e.1 += 1;
    }
    let mut out: Vec<TypeAverage> = sums
        .into_iter()
        .map(|(t, (sum, n))| TypeAverage {
            type_name: t.to_string(),
            mean: sum as f64 / n as f64,
        })
        .collect();
    out.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    out
}

/// 攻撃/防御の散布点（データセットの行順）
pub fn attack_defense_points(dataset: &PopulationDataset) -> Vec<ScatterPoint> {
    dataset
        .rows()
        .iter()
        .map(|r| ScatterPoint {
            name: r.name.clone(),
            primary_type: r.primary_type.clone(),
            attack: r.attack,
            defense: r.defense,
        })
        .collect()
}

/// 2 体のステータス比較の 1 行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatComparisonRow {
    pub stat: StatKind,
    pub left: u32,
    pub right: u32,
}

impl StatComparisonRow {
    pub fn label(&self) -> &'static str {
        self.stat.label()
    }

    /// 右との差（左 - 右）
    pub fn diff(&self) -> i64 {
        i64::from(self.left) - i64::from(self.right)
    }
}

/// 2 体のステータス比較（正規順の 6 行）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatComparison {
    pub left_name: String,
    pub right_name: String,
    pub rows: Vec<StatComparisonRow>,
}

impl StatComparison {
    pub fn between(left: &Pokemon, right: &Pokemon) -> Self {
        let rows = StatKind::ALL
            .into_iter()
            .map(|stat| StatComparisonRow {
                stat,
                left: left.stats.get(stat),
                right: right.stats.get(stat),
            })
            .collect();
        Self {
            left_name: left.name.clone(),
            right_name: right.name.clone(),
            rows,
        }
    }

    /// 両者・全ステータスの中での最大値（比較バーの満タン）
    pub fn max_value(&self) -> u32 {
        self.rows
            .iter()
            .map(|r| r.left.max(r.right))
            .max()
            .unwrap_or(0)
    }
}
