use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::bounty::Bounty;
use crate::domain::crew::{Crew, CrewSummary};
use crate::domain::devil_fruit::{FruitRef, FruitType};
use crate::domain::serde_helpers::{blank_as_none, null_as_empty};

/// Character as listed by `/characters/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSummary {
    pub id: u64,

    pub name: String,

    /// Nickname, e.g. "Straw Hat"
    #[serde(default, deserialize_with = "blank_as_none")]
    pub epithet: Option<String>,

    #[serde(default)]
    pub role: CharacterRole,

    #[serde(default)]
    pub bounty: Bounty,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub origin: Option<String>,

    #[serde(default)]
    pub status: CharacterStatus,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub crews: Vec<CrewSummary>,

    /// Fruits the character currently holds
    #[serde(default, deserialize_with = "null_as_empty")]
    pub current_fruits: Vec<FruitRef>,
}

/// Character as served by `/characters/{id}/`, relations expanded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u64,

    pub name: String,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub epithet: Option<String>,

    #[serde(default)]
    pub role: CharacterRole,

    #[serde(default)]
    pub bounty: Bounty,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub origin: Option<String>,

    #[serde(default)]
    pub status: CharacterStatus,

    #[serde(default)]
    pub first_appearance_episode: Option<FirstAppearance>,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub image_url: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub crews: Vec<Crew>,

    /// Every fruit the character ever held, current one first
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fruits_history: Vec<FruitHolding>,
}

/// Id + name pointer to a character, used by crews and fruit holders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRef {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstAppearance {
    pub number: u32,
    pub title: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub arc: Option<String>,
}

/// One entry of a character's fruit history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FruitHolding {
    pub id: u64,
    pub devil_fruit: HeldFruit,
    #[serde(default)]
    pub from_date: Option<NaiveDate>,
    #[serde(default)]
    pub to_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeldFruit {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub fruit_type: FruitType,
}

/// Allegiance of a character
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CharacterRole {
    Pirate,
    Marine,
    Revolutionary,
    Civilian,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CharacterStatus {
    #[default]
    Alive,
    Dead,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for CharacterRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharacterRole::Pirate => write!(f, "Pirate"),
            CharacterRole::Marine => write!(f, "Marine"),
            CharacterRole::Revolutionary => write!(f, "Révolutionnaire"),
            CharacterRole::Civilian => write!(f, "Civil"),
            CharacterRole::Other => write!(f, "Autre"),
        }
    }
}

impl std::fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharacterStatus::Alive => write!(f, "Vivant"),
            CharacterStatus::Dead => write!(f, "Mort"),
            CharacterStatus::Unknown => write!(f, "Inconnu"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_from_list_payload() {
        let summary: CharacterSummary = serde_json::from_value(json!({
            "id": 1,
            "name": "Monkey D. Luffy",
            "epithet": "Straw Hat",
            "role": "PIRATE",
            "bounty": 3000000000i64,
            "origin": "Foosha Village",
            "status": "ALIVE",
            "crews": [{ "id": 1, "name": "Straw Hat Pirates", "ship_name": "Thousand Sunny" }],
            "current_fruits": [{ "id": 4, "name": "Hito Hito no Mi, Model: Nika" }]
        }))
        .unwrap();

        assert_eq!(summary.role, CharacterRole::Pirate);
        assert_eq!(summary.bounty, Bounty(3_000_000_000));
        assert_eq!(summary.crews[0].name, "Straw Hat Pirates");
        assert_eq!(summary.current_fruits[0].id, 4);
    }

    #[test]
    fn test_minimal_summary() {
        let summary: CharacterSummary =
            serde_json::from_value(json!({ "id": 7, "name": "Koby", "epithet": "" })).unwrap();
        assert!(summary.epithet.is_none());
        assert_eq!(summary.role, CharacterRole::Other);
        assert_eq!(summary.status, CharacterStatus::Alive);
        assert!(!summary.bounty.is_set());
    }

    #[test]
    fn test_unknown_codes_do_not_fail() {
        let summary: CharacterSummary = serde_json::from_value(json!({
            "id": 2, "name": "Imu", "role": "CELESTIAL_DRAGON", "status": "SEALED"
        }))
        .unwrap();
        assert_eq!(summary.role, CharacterRole::Other);
        assert_eq!(summary.status, CharacterStatus::Unknown);
    }

    #[test]
    fn test_detail_payload() {
        let character: Character = serde_json::from_value(json!({
            "id": 3,
            "name": "Portgas D. Ace",
            "epithet": "Fire Fist",
            "role": "PIRATE",
            "bounty": 550000000,
            "origin": "Baterilla",
            "status": "DEAD",
            "first_appearance_episode": { "number": 91, "title": "Ace Arrives", "arc": "Drum Island" },
            "description": "",
            "image_url": "",
            "crews": [{
                "id": 5, "name": "Whitebeard Pirates", "ship_name": "Moby Dick",
                "base_location": "", "description": "", "captain": null, "members": []
            }],
            "fruits_history": [{
                "id": 9,
                "devil_fruit": { "id": 12, "name": "Mera Mera no Mi", "fruit_type": "LOGIA" },
                "from_date": "1520-03-01",
                "to_date": null,
                "is_current": false
            }]
        }))
        .unwrap();

        assert_eq!(character.status, CharacterStatus::Dead);
        assert!(character.description.is_none());
        assert_eq!(character.first_appearance_episode.as_ref().unwrap().number, 91);
        assert_eq!(character.crews[0].ship_name.as_deref(), Some("Moby Dick"));
        let holding = &character.fruits_history[0];
        assert_eq!(holding.devil_fruit.fruit_type, FruitType::Logia);
        assert_eq!(holding.from_date, NaiveDate::from_ymd_opt(1520, 3, 1));
        assert!(holding.to_date.is_none());
    }

    #[test]
    fn test_labels() {
        assert_eq!(CharacterRole::Revolutionary.to_string(), "Révolutionnaire");
        assert_eq!(CharacterRole::Civilian.to_string(), "Civil");
        assert_eq!(CharacterStatus::Unknown.to_string(), "Inconnu");
    }
}
