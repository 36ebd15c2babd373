//! ポケモン 1 体分の正規化済みレコード

use super::stat::BaseStats;
use serde::Serialize;

/// 正規化済みのポケモンレコード
///
/// `types` は 1〜2 件（先頭が第 1 タイプ）。正規化時に保証する。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pokemon {
    pub id: u32,
    /// 表示用に先頭大文字化した名前
    pub name: String,
    /// 公式アートワークの URL（無い場合は None）
    pub image_url: Option<String>,
    pub types: Vec<String>,
    pub stats: BaseStats,
    pub height_m: f64,
    pub weight_kg: f64,
    pub description: String,
}

impl Pokemon {
    pub fn primary_type(&self) -> &str {
        self.types.first().map(String::as_str).unwrap_or_default()
    }

    pub fn secondary_type(&self) -> Option<&str> {
        self.types.get(1).map(String::as_str)
    }
}

/// 取得結果
///
/// 通信失敗・非 2xx・壊れた JSON はすべて NotFound に畳み込まれる。
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Found(Pokemon),
    NotFound,
}

impl FetchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn into_option(self) -> Option<Pokemon> {
        match self {
            Self::Found(p) => Some(p),
            Self::NotFound => None,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_pikachu() -> Pokemon {
    Pokemon {
        id: 25,
        name: "Pikachu".to_string(),
        image_url: None,
        types: vec!["electric".to_string()],
        stats: BaseStats {
            hp: 35,
            attack: 55,
            defense: 40,
            special_attack: 50,
            special_defense: 50,
            speed: 90,
        },
        height_m: 0.4,
        weight_kg: 6.0,
        description: "desc".to_string(),
    }
}
