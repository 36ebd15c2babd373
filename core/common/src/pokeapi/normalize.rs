//! payload → ドメイン型への正規化

use super::payload::{FlavorTextEntry, PokemonPayload, SpeciesPayload};
use crate::domain::{BaseStats, Pokemon, StatKind};
use crate::error::Error;

pub const DEFAULT_LOCALE: &str = "es";
pub const DEFAULT_FALLBACK_DESCRIPTION: &str = "description unavailable";

/// 説明文の選び方（言語タグと、見つからないときの代替文）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionSettings {
    pub locale: String,
    pub fallback: String,
}

impl Default for DescriptionSettings {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            fallback: DEFAULT_FALLBACK_DESCRIPTION.to_string(),
        }
    }
}

/// 先頭を大文字、残りを小文字にする（"mr-mime" → "Mr-mime"）
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// 言語タグが一致し、本文が空白だけでない最初の flavor text を返す
///
/// 改行と改ページはそれぞれ空白 1 つに置き換える。該当が無ければ fallback。
pub fn select_description(entries: &[FlavorTextEntry], settings: &DescriptionSettings) -> String {
    entries
        .iter()
        .find(|e| e.language.name == settings.locale && !e.flavor_text.trim().is_empty())
        .map(|e| e.flavor_text.replace(['\n', '\u{c}'], " "))
        .unwrap_or_else(|| settings.fallback.clone())
}

fn base_stats(payload: &PokemonPayload) -> BaseStats {
    let mut stats = BaseStats::default();
    for entry in &payload.stats {
        if let Some(kind) = StatKind::from_api_name(&entry.stat.name) {
            stats.set(kind, entry.base_stat);
        }
    }
    stats
}

/// pokemon と species の 2 レスポンスから 1 体分のレコードを作る
///
/// タイプが 0 件または 3 件以上なら壊れたレスポンスとして Err。
pub fn normalize_pokemon(
    pokemon: &PokemonPayload,
    species: &SpeciesPayload,
    settings: &DescriptionSettings,
) -> Result<Pokemon, Error> {
    let types: Vec<String> = pokemon
        .types
        .iter()
        .map(|t| t.type_.name.clone())
        .collect();
    if types.is_empty() || types.len() > 2 {
        return Err(Error::json(format!(
            "pokemon '{}' has {} types (expected 1 or 2)",
            pokemon.name,
            types.len()
        )));
    }

    Ok(Pokemon {
        id: pokemon.id,
        name: capitalize(&pokemon.name),
        image_url: pokemon.artwork_url().map(str::to_string),
        types,
        stats: base_stats(pokemon),
        height_m: f64::from(pokemon.height) / 10.0,
        weight_kg: f64::from(pokemon.weight) / 10.0,
        description: select_description(&species.flavor_text_entries, settings),
    })
}
