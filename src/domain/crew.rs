// src/domain/crew.rs
//
// Crew DTOs
//
// Crews are served in two shapes: a light summary in lists (and embedded
// in character summaries) and a detail shape carrying captain and members.

use serde::{Deserialize, Serialize};

use crate::domain::character::{Bounty, CharacterRef};
use crate::domain::serde_helpers::{blank_as_none, null_as_empty};

/// Crew as listed by `/crews/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewSummary {
    pub id: u64,

    pub name: String,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub ship_name: Option<String>,

    /// Not part of every list payload; shown on cards when present
    #[serde(default, deserialize_with = "blank_as_none")]
    pub base_location: Option<String>,
}

/// Crew as served by `/crews/{id}/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crew {
    pub id: u64,

    pub name: String,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub ship_name: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub base_location: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub captain: Option<CharacterRef>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub members: Vec<CrewMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub bounty: Bounty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_crew_detail() {
        let crew: Crew = serde_json::from_value(json!({
            "id": 1,
            "name": "Straw Hat Pirates",
            "ship_name": "Thousand Sunny",
            "base_location": "",
            "description": "Luffy's crew",
            "captain": { "id": 1, "name": "Monkey D. Luffy" },
            "members": [
                { "id": 1, "name": "Monkey D. Luffy", "bounty": 3000000000i64 },
                { "id": 2, "name": "Tony Tony Chopper", "bounty": 1000 }
            ]
        }))
        .unwrap();

        assert!(crew.base_location.is_none());
        assert_eq!(crew.captain.unwrap().name, "Monkey D. Luffy");
        assert_eq!(crew.members.len(), 2);
        assert_eq!(crew.members[1].bounty, Bounty(1000));
    }

    #[test]
    fn test_crew_without_captain() {
        let crew: Crew = serde_json::from_value(json!({
            "id": 8, "name": "Buggy's Delivery", "captain": null, "members": null
        }))
        .unwrap();
        assert!(crew.captain.is_none());
        assert!(crew.members.is_empty());
    }

    #[test]
    fn test_summary_without_ship() {
        let crew: CrewSummary =
            serde_json::from_value(json!({ "id": 3, "name": "Marines", "ship_name": "" })).unwrap();
        assert!(crew.ship_name.is_none());
        assert!(crew.base_location.is_none());
    }
}
