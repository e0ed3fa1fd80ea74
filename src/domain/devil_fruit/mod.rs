pub mod entity;
pub mod rarity;

pub use entity::{ArcRef, DevilFruit, DevilFruitSummary, FruitHolder, FruitRef, FruitStatus, FruitType};
pub use rarity::{Rarity, RarityTier, MAX_RARITY};
