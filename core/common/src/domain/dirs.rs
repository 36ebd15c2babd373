//! 実行時ディレクトリ（DEX_HOME / XDG 解決結果）
//!
//! EnvResolver::resolve_dirs() で取得し、設定ファイル・ログのパス計算に使う。

use std::path::PathBuf;

const CONFIG_FILENAME: &str = "config.json";
const LOG_FILENAME: &str = "dex.jsonl";

/// 解決済みの config / state ディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dirs {
    pub config_dir: PathBuf,
    pub state_dir: PathBuf,
}

impl Dirs {
    /// 設定ファイル（config/config.json）
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILENAME)
    }

    /// ログ格納ディレクトリ
    pub fn logs_dir(&self) -> PathBuf {
        self.state_dir.join("logs")
    }

    /// JSONL ログファイル
    pub fn log_file(&self) -> PathBuf {
        self.logs_dir().join(LOG_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let dirs = Dirs {
            config_dir: PathBuf::from("/h/config"),
            state_dir: PathBuf::from("/h/state"),
        };
        assert_eq!(dirs.config_file(), PathBuf::from("/h/config/config.json"));
        assert_eq!(dirs.log_file(), PathBuf::from("/h/state/logs/dex.jsonl"));
    }
}
