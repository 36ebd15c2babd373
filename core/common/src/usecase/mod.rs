//! データ取得層のユースケース（Entity Fetcher / Population Loader）

pub mod entity_fetcher;
pub mod population_loader;

#[cfg(test)]
pub(crate) mod fixtures;

pub use entity_fetcher::{EntityCache, EntityFetcher};
pub use population_loader::{PopulationCache, PopulationLoader};
