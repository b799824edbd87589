// Knobs for the single-dot heuristic in `sanitize`.
// A lone "." is the one case where the typed text alone cannot tell a decimal point
// from a thousands separator, so the guess is kept here instead of inside the rule.
use serde::{Deserialize, Serialize};

/// How a single dot followed by exactly three digits is read, once enough digits precede it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThreeDigitGroupRule {
    /// "12.345" -> "12345"
    Thousands,
    /// "12.345" -> "12,345"
    Decimal,
    /// Thousands only for round groups: "12.500" -> "12500", "12.345" -> "12,345"
    #[default]
    RoundThousands,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeparatorPolicy {
    /// With at least this many digits before a single dot, the dot is a thousands separator.
    pub long_integer_digits: usize,
    /// Minimum digits before the dot for a 3-digit tail to be considered a thousands group at all.
    pub min_group_leading_digits: usize,
    pub three_digit_group: ThreeDigitGroupRule,
}

impl Default for SeparatorPolicy {
    fn default() -> Self {
        SeparatorPolicy {
            long_integer_digits: 4,
            min_group_leading_digits: 2,
            three_digit_group: ThreeDigitGroupRule::RoundThousands,
        }
    }
}

impl SeparatorPolicy {
    /// Whether a single dot between `leading` and `trailing` digit runs groups thousands.
    pub fn dot_is_thousands(&self, leading: &str, trailing: &str) -> bool {
        if leading.len() >= self.long_integer_digits {
            return true;
        }
        if trailing.len() != 3 || leading.len() < self.min_group_leading_digits {
            return false;
        }
        match self.three_digit_group {
            ThreeDigitGroupRule::Thousands => true,
            ThreeDigitGroupRule::Decimal => false,
            ThreeDigitGroupRule::RoundThousands => trailing.ends_with("00"),
        }
    }
}
