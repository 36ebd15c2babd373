//! PokeAPI レスポンスの serde 型
//!
//! 必須フィールドが欠けていれば deserialize が失敗し、取得失敗として扱われる。
//! アートワークだけは欠落・null を許す。

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UrlRef {
    pub url: String,
}

/// GET pokemon/{identifier}
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonPayload {
    pub id: u32,
    pub name: String,
    pub species: UrlRef,
    #[serde(default)]
    pub sprites: Option<Sprites>,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatEntry>,
    /// デシメートル
    pub height: u32,
    /// ヘクトグラム
    pub weight: u32,
}

impl PokemonPayload {
    /// sprites.other["official-artwork"].front_default
    pub fn artwork_url(&self) -> Option<&str> {
        self.sprites
            .as_ref()?
            .other
            .as_ref()?
            .official_artwork
            .as_ref()?
            .front_default
            .as_deref()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_: NamedRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedRef,
}

/// GET species URL（pokemon.species.url）
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesPayload {
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedRef,
}

/// GET pokemon?limit=N
#[derive(Debug, Clone, Deserialize)]
pub struct ListingPayload {
    pub results: Vec<NamedRef>,
}
