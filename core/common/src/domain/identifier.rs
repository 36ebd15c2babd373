//! 識別子のドメイン型
//!
//! 図鑑番号または名前。正規化（前後空白除去 + 小文字化）済みの文字列を保持し、
//! URL のパスセグメントとキャッシュキーの両方に使う。

/// 正規化済みの識別子
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<u32> for Identifier {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl std::ops::Deref for Identifier {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(Identifier::new("PiKaChU").as_ref(), "pikachu");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(Identifier::new("  SomeName ").as_ref(), "somename");
        assert_eq!(Identifier::new("  SomeName "), Identifier::new("somename"));
    }

    #[test]
    fn test_from_number() {
        assert_eq!(Identifier::from(25u32).as_ref(), "25");
        assert_eq!(Identifier::from(25u32), Identifier::from("25"));
    }

    #[test]
    fn test_empty() {
        assert!(Identifier::new("   ").is_empty());
        assert!(!Identifier::new("1").is_empty());
    }
}
