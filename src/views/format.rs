// src/views/format.rs
use chrono::NaiveDate;

use crate::domain::{Bounty, Rarity, RarityTier};
use crate::views::document::Tone;

/// Dates are shown the way the API serves them (ISO 8601)
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Detail pages spell out a missing bounty
pub fn bounty_or_none(bounty: Bounty) -> String {
    if bounty.is_set() {
        bounty.to_string()
    } else {
        "Aucune".to_string()
    }
}

pub fn rarity_tone(rarity: Rarity) -> Tone {
    match rarity.tier() {
        RarityTier::Legendary => Tone::Gold,
        RarityTier::Epic => Tone::Orange,
        RarityTier::Rare => Tone::Yellow,
        RarityTier::Common => Tone::Blue,
    }
}
