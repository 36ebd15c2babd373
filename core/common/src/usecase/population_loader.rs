//! Population Loader: 先頭 N 体を一覧 API で列挙し、集計用の表にする
//!
//! 一覧 1 リクエスト + 各エントリにつき EntityFetcher 1 回（すべて逐次）。
//! 取得できなかったエントリは行を作らずに黙って飛ばす。件数や理由は返り値に含めない
//! （構造化ログには debug で残す）。一覧自体の失敗は空のデータセットになる。
//! 結果は limit をキーにメモ化する。

use crate::cache::MemoCache;
use crate::domain::{FetchOutcome, Limit, PopulationDataset, PopulationRow};
use crate::error::Error;
use crate::pokeapi::{ApiUrls, ListingPayload};
use crate::ports::outbound::{HttpClient, Log, LogLevel, LogRecord};
use crate::usecase::entity_fetcher::EntityFetcher;
use std::sync::Arc;

pub type PopulationCache = MemoCache<Limit, PopulationDataset>;

pub struct PopulationLoader {
    fetcher: Arc<EntityFetcher>,
    http: Arc<dyn HttpClient>,
    cache: Arc<PopulationCache>,
    log: Arc<dyn Log>,
    urls: ApiUrls,
}

impl PopulationLoader {
    pub fn new(
        fetcher: Arc<EntityFetcher>,
        http: Arc<dyn HttpClient>,
        cache: Arc<PopulationCache>,
        log: Arc<dyn Log>,
        urls: ApiUrls,
    ) -> Self {
        Self {
            fetcher,
            http,
            cache,
            log,
            urls,
        }
    }

    /// 先頭 limit 体を読み込む。失敗はすべて行の欠落か空のデータセットとして表れる
    pub fn load(&self, limit: impl Into<Limit>) -> PopulationDataset {
        let limit = limit.into();
        if limit.is_zero() {
            return PopulationDataset::empty();
        }
        self.cache
            .get_or_insert_with(limit, || self.load_uncached(limit))
    }

    fn load_uncached(&self, limit: Limit) -> PopulationDataset {
        let names = match self.list_names(limit) {
            Ok(names) => names,
            Err(e) => {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Warn, "population listing failed")
                        .layer("usecase")
                        .kind("population")
                        .field("limit", limit.get())
                        .field("error", e.to_string()),
                );
                return PopulationDataset::empty();
            }
        };

        let mut dataset = PopulationDataset::empty();
        let mut skipped = 0usize;
        for name in names.iter().take(limit.get()) {
            match self.fetcher.fetch(name.as_str()) {
                FetchOutcome::Found(p) => dataset.push(PopulationRow::from(&p)),
                FetchOutcome::NotFound => skipped += 1,
            }
        }

        let _ = self.log.log(
            &LogRecord::new(LogLevel::Debug, "population loaded")
                .layer("usecase")
                .kind("population")
                .field("limit", limit.get())
                .field("rows", dataset.len())
                .field("skipped", skipped),
        );
        dataset
    }

    fn list_names(&self, limit: Limit) -> Result<Vec<String>, Error> {
        let url = self.urls.listing(limit);
        let body = self.http.get(&url)?;
        let listing: ListingPayload = serde_json::from_str(&body)
            .map_err(|e| Error::json(format!("Failed to parse listing from {}: {}", url, e)))?;
        Ok(listing.results.into_iter().map(|r| r.name).collect())
    }
}
