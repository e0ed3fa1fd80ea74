use serde::{Deserialize, Serialize};

/// Fruit rarity on a 1..=5 scale. The API does not enforce the range,
/// values outside it are kept as-is and only affect the display tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rarity(pub i32);

pub const MAX_RARITY: i32 = 5;

impl Default for Rarity {
    fn default() -> Self {
        Rarity(3)
    }
}

impl Rarity {
    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn tier(&self) -> RarityTier {
        match self.0 {
            r if r >= 5 => RarityTier::Legendary,
            4 => RarityTier::Epic,
            3 => RarityTier::Rare,
            _ => RarityTier::Common,
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, MAX_RARITY)
    }
}

/// Display band of a rarity, picks the highlight colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RarityTier {
    Common,
    Rare,
    Epic,
    Legendary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers() {
        assert_eq!(Rarity(1).tier(), RarityTier::Common);
        assert_eq!(Rarity(2).tier(), RarityTier::Common);
        assert_eq!(Rarity(3).tier(), RarityTier::Rare);
        assert_eq!(Rarity(4).tier(), RarityTier::Epic);
        assert_eq!(Rarity(5).tier(), RarityTier::Legendary);
        assert_eq!(Rarity(9).tier(), RarityTier::Legendary);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rarity(4).to_string(), "4/5");
    }
}
