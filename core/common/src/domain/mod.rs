//! ドメイン型（Newtype と正規化済みレコード）
//!
//! String / PathBuf を直接運ばず、意味のある型に包んで境界を明確にする。

pub mod dirs;
pub mod identifier;
pub mod pokemon;
pub mod population;
pub mod stat;

pub use dirs::Dirs;
pub use identifier::Identifier;
pub use pokemon::{FetchOutcome, Pokemon};
pub use population::{PopulationDataset, PopulationRow};
pub use stat::{BaseStats, StatKind};

/// 一覧取得の上限件数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Limit(usize);

impl Limit {
    pub fn new(n: usize) -> Self {
        Self(n)
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<usize> for Limit {
    fn from(n: usize) -> Self {
        Self(n)
    }
}

impl std::fmt::Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
