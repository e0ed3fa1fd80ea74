use serde::{Deserialize, Serialize};

/// A bounty in Berries, as served by the API (an integer, 0 when none)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bounty(pub i64);

impl Bounty {
    /// Only strictly positive bounties are shown
    pub fn is_set(&self) -> bool {
        self.0 > 0
    }
}

impl std::fmt::Display for Bounty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Berries", group_digits(self.0))
    }
}

/// en-US digit grouping: 3000000000 -> "3,000,000,000"
pub fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(30_000_000), "30,000,000");
        assert_eq!(group_digits(3_000_000_000), "3,000,000,000");
        assert_eq!(group_digits(-1500), "-1,500");
    }

    #[test]
    fn test_bounty_display() {
        assert_eq!(Bounty(3_000_000_000).to_string(), "3,000,000,000 Berries");
        assert!(Bounty(1).is_set());
        assert!(!Bounty(0).is_set());
        assert!(!Bounty(-5).is_set());
    }
}
