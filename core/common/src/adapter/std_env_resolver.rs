//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::Dirs;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "dex";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.is_empty())
}

/// 変数の引き方を差し替えられる解決ロジック本体
pub(crate) fn resolve_dirs_with(get: impl Fn(&str) -> Option<String>) -> Result<Dirs, Error> {
    if let Some(home) = get("DEX_HOME") {
        let home = PathBuf::from(home);
        return Ok(Dirs {
            config_dir: home.join("config"),
            state_dir: home.join("state"),
        });
    }

    let user_home = get("HOME").map(PathBuf::from);
    let config_base = get("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| user_home.as_ref().map(|h| h.join(".config")))
        .ok_or_else(|| Error::env("HOME is not set"))?;
    let state_base = get("XDG_STATE_HOME")
        .map(PathBuf::from)
        .or_else(|| user_home.as_ref().map(|h| h.join(".local").join("state")))
        .ok_or_else(|| Error::env("HOME is not set"))?;

    Ok(Dirs {
        config_dir: config_base.join(APP_DIR),
        state_dir: state_base.join(APP_DIR),
    })
}

impl EnvResolver for StdEnvResolver {
    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        resolve_dirs_with(non_empty_var)
    }

    fn base_url_override(&self) -> Option<String> {
        non_empty_var("DEX_BASE_URL")
    }
}
