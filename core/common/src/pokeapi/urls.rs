//! エンドポイント URL の組み立て

use crate::domain::{Identifier, Limit};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// ベース URL から各エンドポイントを組み立てる
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrls {
    base_url: String,
}

impl ApiUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// pokemon/{identifier}
    pub fn pokemon(&self, identifier: &Identifier) -> String {
        format!("{}/pokemon/{}", self.base_url, identifier)
    }

    /// pokemon?limit={limit}
    pub fn listing(&self, limit: Limit) -> String {
        format!("{}/pokemon?limit={}", self.base_url, limit)
    }
}

impl Default for ApiUrls {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let urls = ApiUrls::default();
        assert_eq!(
            urls.pokemon(&Identifier::new("Pikachu")),
            "https://pokeapi.co/api/v2/pokemon/pikachu"
        );
        assert_eq!(
            urls.listing(Limit::new(151)),
            "https://pokeapi.co/api/v2/pokemon?limit=151"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let urls = ApiUrls::new("http://localhost:8000/api/v2/");
        assert_eq!(
            urls.pokemon(&Identifier::from(25u32)),
            "http://localhost:8000/api/v2/pokemon/25"
        );
    }
}
