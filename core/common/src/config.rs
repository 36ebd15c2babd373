//! config.json 用の設定型
//!
//! API のベース URL・説明文の言語・一覧の上限件数などを保持する。
//! ファイルが無ければ既定値。CLI フラグでの上書きは呼び出し側で行う。

use crate::error::Error;
use crate::pokeapi::normalize::{DEFAULT_FALLBACK_DESCRIPTION, DEFAULT_LOCALE};
use crate::pokeapi::urls::DEFAULT_BASE_URL;
use crate::pokeapi::{ApiUrls, DescriptionSettings};
use crate::ports::outbound::FileSystem;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_POPULATION_LIMIT: usize = 151;

/// 設定
#[derive(Debug, Clone, PartialEq)]
pub struct DexConfig {
    /// API のベース URL（末尾の / は除去済み）
    pub base_url: String,
    /// 説明文を選ぶ言語タグ
    pub locale: String,
    /// 説明文が見つからないときの代替文
    pub fallback_description: String,
    /// 集計用に読み込む件数
    pub population_limit: usize,
    /// リクエストのタイムアウト（None なら HTTP クライアントの既定値）
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            fallback_description: DEFAULT_FALLBACK_DESCRIPTION.to_string(),
            population_limit: DEFAULT_POPULATION_LIMIT,
            timeout_secs: None,
            user_agent: None,
        }
    }
}

/// serde 用の内部構造（全フィールド省略可）
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DexConfigRaw {
    base_url: Option<String>,
    #[serde(alias = "language")]
    locale: Option<String>,
    fallback_description: Option<String>,
    #[serde(alias = "limit")]
    population_limit: Option<usize>,
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

impl From<DexConfigRaw> for DexConfig {
    fn from(r: DexConfigRaw) -> Self {
        let d = DexConfig::default();
        DexConfig {
            base_url: r
                .base_url
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(d.base_url),
            locale: r.locale.unwrap_or(d.locale),
            fallback_description: r.fallback_description.unwrap_or(d.fallback_description),
            population_limit: r.population_limit.unwrap_or(d.population_limit),
            timeout_secs: r.timeout_secs,
            user_agent: r.user_agent,
        }
    }
}

impl DexConfig {
    /// JSON 文字列からパース
    pub fn parse(json: &str) -> Result<Self, Error> {
        let raw: DexConfigRaw = serde_json::from_str(json)
            .map_err(|e| Error::config(format!("invalid config.json: {}", e)))?;
        Ok(raw.into())
    }

    /// ファイルから読み込む。存在しなければ既定値
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self, Error> {
        if !fs.exists(path) {
            return Ok(Self::default());
        }
        let content = fs.read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn api_urls(&self) -> ApiUrls {
        ApiUrls::new(self.base_url.clone())
    }

    pub fn description_settings(&self) -> DescriptionSettings {
        DescriptionSettings {
            locale: self.locale.clone(),
            fallback: self.fallback_description.clone(),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
