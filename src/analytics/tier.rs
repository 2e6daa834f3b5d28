use std::fmt;

/// Values strictly above this are `High`.
pub const HIGH_THRESHOLD: f64 = 50.0;
/// Values strictly above this (and not `High`) are `Medium`.
pub const MEDIUM_THRESHOLD: f64 = 20.0;

/// Three-tier severity shared by the overall risk level and per-bar colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Tier {
    #[default]
    Low,
    Medium,
    High,
}

/// Overall risk derived from the disease ratio.
pub type RiskLevel = Tier;

impl Tier {
    /// Classify a value. Boundaries resolve to the lower tier.
    pub fn classify(value: f64) -> Self {
        if value > HIGH_THRESHOLD {
            Tier::High
        } else if value > MEDIUM_THRESHOLD {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    /// Classify a bar height.
    pub fn classify_count(count: usize) -> Self {
        Self::classify(count as f64)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Low => "Low",
            Tier::Medium => "Medium",
            Tier::High => "High",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0.0, Tier::Low)]
    #[case::medium_boundary(20.0, Tier::Low)]
    #[case::just_above_medium(20.01, Tier::Medium)]
    #[case::high_boundary(50.0, Tier::Medium)]
    #[case::just_above_high(50.01, Tier::High)]
    #[case::all_diseased(100.0, Tier::High)]
    fn classifies_with_strict_thresholds(#[case] value: f64, #[case] expected: Tier) {
        assert_eq!(Tier::classify(value), expected);
    }

    #[rstest]
    #[case(20, Tier::Low)]
    #[case(21, Tier::Medium)]
    #[case(50, Tier::Medium)]
    #[case(51, Tier::High)]
    fn counts_use_the_same_thresholds(#[case] count: usize, #[case] expected: Tier) {
        assert_eq!(Tier::classify_count(count), expected);
    }

    #[test]
    fn labels_and_default() {
        assert_eq!(Tier::High.to_string(), "High");
        assert_eq!(Tier::Medium.label(), "Medium");
        assert_eq!(Tier::default(), Tier::Low);
    }
}
