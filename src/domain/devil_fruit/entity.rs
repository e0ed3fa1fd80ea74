use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::rarity::Rarity;
use crate::domain::character::CharacterRef;
use crate::domain::serde_helpers::{blank_as_none, null_as_empty};

/// Devil fruit as listed by `/fruits/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevilFruitSummary {
    pub id: u64,

    pub name: String,

    /// Romanised Japanese name
    #[serde(default, deserialize_with = "blank_as_none")]
    pub romanji: Option<String>,

    #[serde(default)]
    pub fruit_type: FruitType,

    #[serde(default)]
    pub rarity: Rarity,
}

/// Devil fruit as served by `/fruits/{id}/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevilFruit {
    pub id: u64,

    pub name: String,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub romanji: Option<String>,

    #[serde(default)]
    pub fruit_type: FruitType,

    #[serde(default)]
    pub ability: String,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub weaknesses: Option<String>,

    #[serde(default)]
    pub rarity: Rarity,

    #[serde(default)]
    pub status: FruitStatus,

    #[serde(default)]
    pub first_appearance_arc: Option<ArcRef>,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,

    /// Holder history, current holder first
    #[serde(default, deserialize_with = "null_as_empty")]
    pub holders: Vec<FruitHolder>,
}

/// Id + name pointer to a fruit (character summaries' `current_fruits`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FruitRef {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArcRef {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FruitHolder {
    pub id: u64,
    pub character: CharacterRef,
    #[serde(default)]
    pub from_date: Option<NaiveDate>,
    #[serde(default)]
    pub to_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FruitType {
    #[default]
    Paramecia,
    Zoan,
    Logia,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FruitStatus {
    #[default]
    Active,
    Lost,
    #[serde(other)]
    Unknown,
}

impl DevilFruit {
    pub fn current_holder(&self) -> Option<&FruitHolder> {
        self.holders.iter().find(|h| h.is_current)
    }
}

impl std::fmt::Display for FruitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FruitType::Paramecia => write!(f, "Paramecia"),
            FruitType::Zoan => write!(f, "Zoan"),
            FruitType::Logia => write!(f, "Logia"),
            FruitType::Unknown => write!(f, "Inconnu"),
        }
    }
}

impl std::fmt::Display for FruitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FruitStatus::Active => write!(f, "Actif"),
            FruitStatus::Lost => write!(f, "Perdu"),
            FruitStatus::Unknown => write!(f, "Inconnu"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fruit_detail() {
        let fruit: DevilFruit = serde_json::from_value(json!({
            "id": 12,
            "name": "Mera Mera no Mi",
            "romanji": "Mera Mera no Mi",
            "fruit_type": "LOGIA",
            "ability": "Fire",
            "weaknesses": "Magma",
            "rarity": 5,
            "status": "ACTIVE",
            "first_appearance_arc": { "id": 4, "name": "Alabasta" },
            "description": "",
            "holders": [
                {
                    "id": 20,
                    "character": { "id": 9, "name": "Sabo" },
                    "from_date": "1524-05-01",
                    "to_date": null,
                    "is_current": true
                },
                {
                    "id": 9,
                    "character": { "id": 3, "name": "Portgas D. Ace" },
                    "from_date": null,
                    "to_date": "1522-01-01",
                    "is_current": false
                }
            ]
        }))
        .unwrap();

        assert_eq!(fruit.fruit_type, FruitType::Logia);
        assert_eq!(fruit.rarity.value(), 5);
        assert_eq!(fruit.first_appearance_arc.as_ref().unwrap().name, "Alabasta");
        assert_eq!(fruit.current_holder().unwrap().character.name, "Sabo");
        assert_eq!(fruit.holders[1].to_date, NaiveDate::from_ymd_opt(1522, 1, 1));
    }

    #[test]
    fn test_summary_defaults() {
        let fruit: DevilFruitSummary =
            serde_json::from_value(json!({ "id": 1, "name": "Gomu Gomu no Mi" })).unwrap();
        assert_eq!(fruit.fruit_type, FruitType::Paramecia);
        assert_eq!(fruit.rarity.value(), 3);
        assert!(fruit.romanji.is_none());
    }

    #[test]
    fn test_labels() {
        assert_eq!(FruitStatus::Lost.to_string(), "Perdu");
        assert_eq!(FruitType::Zoan.to_string(), "Zoan");
        let odd: FruitType = serde_json::from_value(json!("SMILE")).unwrap();
        assert_eq!(odd, FruitType::Unknown);
    }
}
