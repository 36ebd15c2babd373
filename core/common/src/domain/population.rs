//! 集計用の表形式データセット

use super::pokemon::Pokemon;
use super::stat::{BaseStats, StatKind};
use serde::Serialize;

/// 1 行 = 取得に成功した 1 体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulationRow {
    pub id: u32,
    pub name: String,
    pub primary_type: String,
    pub secondary_type: Option<String>,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
    pub height_m: f64,
    pub weight_kg: f64,
}

impl PopulationRow {
    pub fn stat(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::SpecialAttack => self.special_attack,
            StatKind::SpecialDefense => self.special_defense,
            StatKind::Speed => self.speed,
        }
    }
}

impl From<&Pokemon> for PopulationRow {
    fn from(p: &Pokemon) -> Self {
        let stats: &BaseStats = &p.stats;
        Self {
            id: p.id,
            name: p.name.clone(),
            primary_type: p.primary_type().to_string(),
            secondary_type: p.secondary_type().map(str::to_string),
            hp: stats.get(StatKind::Hp),
            attack: stats.get(StatKind::Attack),
            defense: stats.get(StatKind::Defense),
            special_attack: stats.get(StatKind::SpecialAttack),
            special_defense: stats.get(StatKind::SpecialDefense),
            speed: stats.get(StatKind::Speed),
            height_m: p.height_m,
            weight_kg: p.weight_kg,
        }
    }
}

/// 行指向のデータセット。行順は一覧 API の返却順
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PopulationDataset {
    rows: Vec<PopulationRow>,
}

impl PopulationDataset {
    pub fn new(rows: Vec<PopulationRow>) -> Self {
        Self { rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[PopulationRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push(&mut self, row: PopulationRow) {
        self.rows.push(row);
    }
}

impl FromIterator<PopulationRow> for PopulationDataset {
    fn from_iter<T: IntoIterator<Item = PopulationRow>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
