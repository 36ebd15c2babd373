//! Entity Fetcher: 識別子 1 つからポケモン 1 体分のレコードを得る
//!
//! pokemon/{identifier} と、その species.url の 2 リクエストを 1 つの論理操作として扱う。
//! どちらかが失敗すれば全体が NotFound。部分的なレコードは返さない。
//! 結果（NotFound を含む）は正規化済み識別子をキーにメモ化し、2 回目以降は通信しない。

use crate::cache::MemoCache;
use crate::domain::{FetchOutcome, Identifier, Pokemon};
use crate::error::Error;
use crate::pokeapi::{normalize_pokemon, ApiUrls, DescriptionSettings, PokemonPayload, SpeciesPayload};
use crate::ports::outbound::{HttpClient, Log, LogLevel, LogRecord};
use serde::de::DeserializeOwned;
use std::sync::Arc;

pub type EntityCache = MemoCache<Identifier, FetchOutcome>;

pub struct EntityFetcher {
    http: Arc<dyn HttpClient>,
    cache: Arc<EntityCache>,
    log: Arc<dyn Log>,
    urls: ApiUrls,
    description: DescriptionSettings,
}

impl EntityFetcher {
    pub fn new(
        http: Arc<dyn HttpClient>,
        cache: Arc<EntityCache>,
        log: Arc<dyn Log>,
        urls: ApiUrls,
        description: DescriptionSettings,
    ) -> Self {
        Self {
            http,
            cache,
            log,
            urls,
            description,
        }
    }

    /// 1 体取得する。失敗は NotFound として返り、呼び出し側にエラーは伝播しない
    pub fn fetch(&self, identifier: impl Into<Identifier>) -> FetchOutcome {
        let identifier = identifier.into();
        if identifier.is_empty() {
            return FetchOutcome::NotFound;
        }

        if let Some(hit) = self.cache.get(&identifier) {
            let _ = self.log.log(
                &LogRecord::new(LogLevel::Debug, "entity cache hit")
                    .layer("usecase")
                    .kind("cache")
                    .field("identifier", identifier.to_string())
                    .field("found", hit.is_found()),
            );
            return hit;
        }

        let outcome = match self.fetch_uncached(&identifier) {
            Ok(pokemon) => {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Debug, "entity fetched")
                        .layer("usecase")
                        .kind("fetch")
                        .field("identifier", identifier.to_string())
                        .field("id", pokemon.id),
                );
                FetchOutcome::Found(pokemon)
            }
            Err(e) => {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Warn, "entity fetch failed")
                        .layer("usecase")
                        .kind("fetch")
                        .field("identifier", identifier.to_string())
                        .field("error", e.to_string()),
                );
                FetchOutcome::NotFound
            }
        };
        self.cache.insert(identifier, outcome.clone());
        outcome
    }

    fn fetch_uncached(&self, identifier: &Identifier) -> Result<Pokemon, Error> {
        let pokemon: PokemonPayload = self.get_json(&self.urls.pokemon(identifier))?;
        let species: SpeciesPayload = self.get_json(&pokemon.species.url)?;
        normalize_pokemon(&pokemon, &species, &self.description)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        let body = self.http.get(url)?;
        serde_json::from_str(&body)
            .map_err(|e| Error::json(format!("Failed to parse response from {}: {}", url, e)))
    }
}
