pub mod bounty;
pub mod entity;

pub use bounty::{group_digits, Bounty};
pub use entity::{
    Character, CharacterRef, CharacterRole, CharacterStatus, CharacterSummary, FirstAppearance,
    FruitHolding, HeldFruit,
};
