// src/domain/resource.rs
//
// Binds each collection endpoint to the DTOs it serves.
// Pages and services are generic over `Resource`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

use crate::domain::arc::{Arc, ArcSummary, Episode, EpisodeSummary};
use crate::domain::character::{Character, CharacterSummary};
use crate::domain::crew::{Crew, CrewSummary};
use crate::domain::devil_fruit::{DevilFruit, DevilFruitSummary};

/// The browsable collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Characters,
    Crews,
    DevilFruits,
    Arcs,
    Episodes,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Characters,
        ResourceKind::Crews,
        ResourceKind::DevilFruits,
        ResourceKind::Arcs,
        ResourceKind::Episodes,
    ];

    /// Path segment under the API root, also used by routes
    pub fn collection(&self) -> &'static str {
        match self {
            ResourceKind::Characters => "characters",
            ResourceKind::Crews => "crews",
            ResourceKind::DevilFruits => "fruits",
            ResourceKind::Arcs => "arcs",
            ResourceKind::Episodes => "episodes",
        }
    }

    pub fn from_collection(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.collection() == segment)
    }

    /// Navigation label
    pub fn title(&self) -> &'static str {
        match self {
            ResourceKind::Characters => Characters::TITLE,
            ResourceKind::Crews => Crews::TITLE,
            ResourceKind::DevilFruits => DevilFruits::TITLE,
            ResourceKind::Arcs => Arcs::TITLE,
            ResourceKind::Episodes => Episodes::TITLE,
        }
    }

    pub fn not_found(&self) -> &'static str {
        match self {
            ResourceKind::Characters => Characters::NOT_FOUND,
            ResourceKind::Crews => Crews::NOT_FOUND,
            ResourceKind::DevilFruits => DevilFruits::NOT_FOUND,
            ResourceKind::Arcs => Arcs::NOT_FOUND,
            ResourceKind::Episodes => Episodes::NOT_FOUND,
        }
    }
}

pub trait Resource: Send + Sync + 'static {
    type Summary: DeserializeOwned + Serialize + Clone + Debug + Send + Sync + 'static;
    type Detail: DeserializeOwned + Serialize + Clone + Debug + Send + Sync + 'static;

    const KIND: ResourceKind;
    const TITLE: &'static str;
    const SEARCH_PLACEHOLDER: &'static str;
    /// Shown when the item endpoint refuses the request
    const NOT_FOUND: &'static str;
}

pub struct Characters;
pub struct Crews;
pub struct DevilFruits;
pub struct Arcs;
pub struct Episodes;

impl Resource for Characters {
    type Summary = CharacterSummary;
    type Detail = Character;
    const KIND: ResourceKind = ResourceKind::Characters;
    const TITLE: &'static str = "Personnages";
    const SEARCH_PLACEHOLDER: &'static str = "Rechercher un personnage...";
    const NOT_FOUND: &'static str = "Personnage non trouvé";
}

impl Resource for Crews {
    type Summary = CrewSummary;
    type Detail = Crew;
    const KIND: ResourceKind = ResourceKind::Crews;
    const TITLE: &'static str = "Équipages";
    const SEARCH_PLACEHOLDER: &'static str = "Rechercher un équipage...";
    const NOT_FOUND: &'static str = "Équipage non trouvé";
}

impl Resource for DevilFruits {
    type Summary = DevilFruitSummary;
    type Detail = DevilFruit;
    const KIND: ResourceKind = ResourceKind::DevilFruits;
    const TITLE: &'static str = "Fruits du Démon";
    const SEARCH_PLACEHOLDER: &'static str = "Rechercher un fruit...";
    const NOT_FOUND: &'static str = "Fruit non trouvé";
}

impl Resource for Arcs {
    type Summary = ArcSummary;
    type Detail = Arc;
    const KIND: ResourceKind = ResourceKind::Arcs;
    const TITLE: &'static str = "Arcs";
    const SEARCH_PLACEHOLDER: &'static str = "Rechercher un arc...";
    const NOT_FOUND: &'static str = "Arc non trouvé";
}

impl Resource for Episodes {
    type Summary = EpisodeSummary;
    type Detail = Episode;
    const KIND: ResourceKind = ResourceKind::Episodes;
    const TITLE: &'static str = "Épisodes";
    const SEARCH_PLACEHOLDER: &'static str = "Rechercher un épisode...";
    const NOT_FOUND: &'static str = "Épisode non trouvé";
}
