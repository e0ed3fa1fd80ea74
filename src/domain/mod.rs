// src/domain/mod.rs
//
// Domain Root - read-only DTOs served by the encyclopedia API
//
// Nothing here is validated or mutated locally: the API owns the data,
// these types only describe its shape and how values are labelled.

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod arc;
pub mod character;
pub mod crew;
pub mod devil_fruit;
pub mod page;
pub mod resource;
pub mod serde_helpers;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Characters
pub use character::{
    group_digits, Bounty, Character, CharacterRef, CharacterRole, CharacterStatus,
    CharacterSummary, FirstAppearance, FruitHolding, HeldFruit,
};

// Crews
pub use crew::{Crew, CrewMember, CrewSummary};

// Devil fruits
pub use devil_fruit::{
    ArcRef, DevilFruit, DevilFruitSummary, FruitHolder, FruitRef, FruitStatus, FruitType, Rarity,
    RarityTier, MAX_RARITY,
};

// Arcs & episodes
pub use arc::{Arc, ArcSummary, Episode, EpisodeSummary};

// Pagination
pub use page::{page_count, Page};

// Collection bindings
pub use resource::{Arcs, Characters, Crews, DevilFruits, Episodes, Resource, ResourceKind};
