// src/domain/arc.rs
//
// Story arcs and their episodes

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::serde_helpers::{blank_as_none, null_as_empty};

/// Arc as listed by `/arcs/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcSummary {
    pub id: u64,

    pub name: String,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub saga: Option<String>,

    #[serde(default)]
    pub start_episode_number: u32,

    #[serde(default)]
    pub end_episode_number: u32,
}

/// Arc as served by `/arcs/{id}/`, with its episodes in airing order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub id: u64,

    pub name: String,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub saga: Option<String>,

    #[serde(default)]
    pub start_episode_number: u32,

    #[serde(default)]
    pub end_episode_number: u32,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub episodes: Vec<EpisodeSummary>,
}

/// Episode as listed by `/episodes/` and embedded in arcs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub id: u64,
    pub number: u32,
    pub title: String,
    #[serde(default)]
    pub air_date: Option<NaiveDate>,
}

/// Episode as served by `/episodes/{id}/`; `arc` is the arc's name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: u64,
    pub number: u32,
    pub title: String,
    #[serde(default)]
    pub air_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub arc: Option<String>,
}

impl ArcSummary {
    pub fn episode_span(&self) -> String {
        format!("#{} - #{}", self.start_episode_number, self.end_episode_number)
    }
}

impl Arc {
    pub fn episode_span(&self) -> String {
        format!("#{} - #{}", self.start_episode_number, self.end_episode_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_arc_detail() {
        let arc: Arc = serde_json::from_value(json!({
            "id": 2,
            "name": "Romance Dawn",
            "saga": "East Blue",
            "start_episode_number": 1,
            "end_episode_number": 3,
            "description": "",
            "episodes": [
                { "id": 1, "number": 1, "title": "I'm Luffy!", "air_date": "1999-10-20" },
                { "id": 2, "number": 2, "title": "Enter Zoro", "air_date": null }
            ]
        }))
        .unwrap();

        assert_eq!(arc.episode_span(), "#1 - #3");
        assert!(arc.description.is_none());
        assert_eq!(arc.episodes[0].air_date, NaiveDate::from_ymd_opt(1999, 10, 20));
        assert!(arc.episodes[1].air_date.is_none());
    }

    #[test]
    fn test_summary_without_saga() {
        let arc: ArcSummary = serde_json::from_value(json!({
            "id": 5, "name": "Loguetown", "saga": "", "start_episode_number": 48, "end_episode_number": 53
        }))
        .unwrap();
        assert!(arc.saga.is_none());
        assert_eq!(arc.episode_span(), "#48 - #53");
    }

    #[test]
    fn test_episode_detail() {
        let episode: Episode = serde_json::from_value(json!({
            "id": 1, "number": 1, "title": "I'm Luffy!", "air_date": "1999-10-20", "arc": "Romance Dawn"
        }))
        .unwrap();
        assert_eq!(episode.arc.as_deref(), Some("Romance Dawn"));
    }
}
