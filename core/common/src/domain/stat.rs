//! 種族値（ベースステータス）のドメイン型

use serde::Serialize;

/// 6 種類の正規ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatKind {
    /// 表示・集計で使う正規順
    pub const ALL: [StatKind; 6] = [
        Self::Hp,
        Self::Attack,
        Self::Defense,
        Self::SpecialAttack,
        Self::SpecialDefense,
        Self::Speed,
    ];

    /// API 上の名前（stats[].stat.name）
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hp => "hp",
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::SpecialAttack => "special-attack",
            Self::SpecialDefense => "special-defense",
            Self::Speed => "speed",
        }
    }

    /// API 上の名前から解決。正規 6 種以外は None
    pub fn from_api_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }

    /// 表示用ラベル（"special-attack" → "Special attack"）
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hp => "Hp",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::SpecialAttack => "Special attack",
            Self::SpecialDefense => "Special defense",
            Self::Speed => "Speed",
        }
    }
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StatKind {
    type Err = String;

    /// "special-attack" / "special_attack" / "Special Attack" を受け付ける
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        Self::from_api_name(&normalized).ok_or_else(|| format!("unknown stat: {}", s))
    }
}

/// 正規 6 キーを常に持つステータス表
///
/// フィールドで持つので「キーが欠ける」状態は表現できない。未取得のキーは 0。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    #[serde(rename = "special-attack")]
    pub special_attack: u32,
    #[serde(rename = "special-defense")]
    pub special_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::SpecialAttack => self.special_attack,
            StatKind::SpecialDefense => self.special_defense,
            StatKind::Speed => self.speed,
        }
    }

    pub fn set(&mut self, kind: StatKind, value: u32) {
        let slot = match kind {
            StatKind::Hp => &mut self.hp,
            StatKind::Attack => &mut self.attack,
            StatKind::Defense => &mut self.defense,
            StatKind::SpecialAttack => &mut self.special_attack,
            StatKind::SpecialDefense => &mut self.special_defense,
            StatKind::Speed => &mut self.speed,
        };
        *slot = value;
    }

    /// 正規順で (種類, 値) を返す
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, u32)> + '_ {
        StatKind::ALL.into_iter().map(move |k| (k, self.get(k)))
    }

    pub fn total(&self) -> u32 {
        self.iter().map(|(_, v)| v).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_api_name() {
        assert_eq!(StatKind::from_api_name("special-defense"), Some(StatKind::SpecialDefense));
        assert_eq!(StatKind::from_api_name("accuracy"), None);
    }

    #[test]
    fn test_from_str_accepts_variants() {
        assert_eq!("Special Attack".parse::<StatKind>(), Ok(StatKind::SpecialAttack));
        assert_eq!("special_attack".parse::<StatKind>(), Ok(StatKind::SpecialAttack));
        assert_eq!(" SPEED ".parse::<StatKind>(), Ok(StatKind::Speed));
        assert!("luck".parse::<StatKind>().is_err());
    }

    #[test]
    fn test_default_has_all_keys_zero() {
        let stats = BaseStats::default();
        let keys: Vec<_> = stats.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, StatKind::ALL.to_vec());
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut stats = BaseStats::default();
        stats.set(StatKind::Speed, 90);
        stats.set(StatKind::Hp, 35);
        assert_eq!(stats.get(StatKind::Speed), 90);
        assert_eq!(stats.hp, 35);
        assert_eq!(stats.total(), 125);
    }

    #[test]
    fn test_serialize_uses_api_names() {
        let json = serde_json::to_value(BaseStats::default()).unwrap();
        assert!(json.get("special-attack").is_some());
        assert!(json.get("special-defense").is_some());
        assert_eq!(json.as_object().unwrap().len(), 6);
    }
}
