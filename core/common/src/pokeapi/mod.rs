//! PokeAPI v2 のワイヤ形式と正規化
//!
//! payload: レスポンス JSON の serde 型（使うフィールドのみ）
//! normalize: payload → ドメイン型への変換
//! urls: エンドポイント URL の組み立て

pub mod normalize;
pub mod payload;
pub mod urls;

pub use normalize::{capitalize, normalize_pokemon, select_description, DescriptionSettings};
pub use payload::{ListingPayload, PokemonPayload, SpeciesPayload};
pub use urls::ApiUrls;
