//! 配線: 標準アダプタで DexUseCase を組み立てる

use std::sync::Arc;

use common::adapter::{
    FileJsonLog, FileSystem, HttpClient, Log, NoopLog, ReqwestHttpClient, StderrLog,
    StdEnvResolver, StdFileSystem, TeeLog,
};
use common::config::DexConfig;
use common::error::Error;
use common::ports::outbound::{EnvResolver, LogLevel};
use common::usecase::{EntityCache, EntityFetcher, PopulationCache, PopulationLoader};

use crate::usecase::DexUseCase;

/// CLI から渡される設定の上書き
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub locale: Option<String>,
    pub verbose: bool,
}

/// 組み立て済みのアプリ
pub struct App {
    pub use_case: DexUseCase,
    pub logger: Arc<dyn Log>,
    pub config: DexConfig,
}

/// 上書きの優先順位: CLI フラグ > DEX_BASE_URL > config.json > 既定値
pub fn apply_overrides(
    mut config: DexConfig,
    overrides: &Overrides,
    env_base_url: Option<String>,
) -> DexConfig {
    if let Some(url) = overrides.base_url.clone().or(env_base_url) {
        config.base_url = url.trim_end_matches('/').to_string();
    }
    if let Some(locale) = &overrides.locale {
        config.locale = locale.clone();
    }
    config
}

/// 与えられた HTTP クライアントとロガーで App を組み立てる（キャッシュはここで 1 つずつ作る）
pub fn build_app(config: DexConfig, http: Arc<dyn HttpClient>, logger: Arc<dyn Log>) -> App {
    let fetcher = Arc::new(EntityFetcher::new(
        Arc::clone(&http),
        Arc::new(EntityCache::new()),
        Arc::clone(&logger),
        config.api_urls(),
        config.description_settings(),
    ));
    let loader = Arc::new(PopulationLoader::new(
        Arc::clone(&fetcher),
        http,
        Arc::new(PopulationCache::new()),
        Arc::clone(&logger),
        config.api_urls(),
    ));
    let use_case = DexUseCase::new(fetcher, loader, config.population_limit);
    App {
        use_case,
        logger,
        config,
    }
}

fn build_logger(fs: Arc<dyn FileSystem>, env: &dyn EnvResolver, verbose: bool) -> Arc<dyn Log> {
    // ディレクトリが解決できなくてもコマンド自体は動かす
    let file: Arc<dyn Log> = match env.resolve_dirs() {
        Ok(dirs) => Arc::new(FileJsonLog::new(fs, dirs.log_file())),
        Err(_) => Arc::new(NoopLog),
    };
    if verbose {
        let stderr: Arc<dyn Log> = Arc::new(StderrLog::new(LogLevel::Debug));
        Arc::new(TeeLog::new(vec![file, stderr]))
    } else {
        file
    }
}

fn load_config(fs: &dyn FileSystem, env: &dyn EnvResolver) -> Result<DexConfig, Error> {
    match env.resolve_dirs() {
        Ok(dirs) => DexConfig::load(fs, &dirs.config_file()),
        Err(_) => Ok(DexConfig::default()),
    }
}

/// 配線: 標準アダプタ（reqwest・std::fs・std::env）で App を組み立てる
pub fn wire_dex(overrides: &Overrides) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env = StdEnvResolver;
    let config = apply_overrides(
        load_config(fs.as_ref(), &env)?,
        overrides,
        env.base_url_override(),
    );
    let logger = build_logger(Arc::clone(&fs), &env, overrides.verbose);
    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new(
        config.timeout(),
        config.user_agent.as_deref(),
    )?);
    Ok(build_app(config, http, logger))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides_none() {
        let cfg = apply_overrides(DexConfig::default(), &Overrides::default(), None);
        assert_eq!(cfg, DexConfig::default());
    }

    #[test]
    fn test_env_base_url_overrides_config() {
        let cfg = apply_overrides(
            DexConfig::default(),
            &Overrides::default(),
            Some("http://localhost:8000/api/v2/".to_string()),
        );
        assert_eq!(cfg.base_url, "http://localhost:8000/api/v2");
    }

    #[test]
    fn test_flag_beats_env() {
        let overrides = Overrides {
            base_url: Some("http://flag/api".to_string()),
            locale: Some("en".to_string()),
            verbose: false,
        };
        let cfg = apply_overrides(
            DexConfig::default(),
            &overrides,
            Some("http://env/api".to_string()),
        );
        assert_eq!(cfg.base_url, "http://flag/api");
        assert_eq!(cfg.locale, "en");
        assert_eq!(cfg.population_limit, 151);
    }
}
