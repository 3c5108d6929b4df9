//! Game-over flavor text
//!
//! The dialog asks a [`MessageSource`] for a line once a run ends. The
//! built-in source is local and instant; the UI shows the fallback line
//! until a source answers.

use crate::sim::GameMode;

/// Score tier a message is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Low,
    Mid,
    High,
}

impl Tier {
    /// Bucket a final score using the mode's thresholds
    pub fn for_score(mode: GameMode, score: u64) -> Self {
        let (low, high) = match mode {
            GameMode::Bounce => (10, 50),
            GameMode::Shooter => (100, 500),
            GameMode::Catch => (200, 1000),
        };
        if score < low {
            Tier::Low
        } else if score > high {
            Tier::High
        } else {
            Tier::Mid
        }
    }
}

/// Produces the game-over line for a final score
pub trait MessageSource {
    fn message(&self, mode: GameMode, score: u64) -> String;
}

/// Shown while a message is pending or when a source has nothing to say
pub fn fallback_message(score: u64) -> String {
    format!("Great job! You scored {score} points!")
}

/// Fixed corporate one-liners per mode and tier
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedMessages;

impl MessageSource for CannedMessages {
    fn message(&self, mode: GameMode, score: u64) -> String {
        let shown = mode.format_score(score);
        match (mode, Tier::for_score(mode, score)) {
            (GameMode::Bounce, Tier::Low) => {
                format!("{shown} touchpoints. Let's circle back after more coffee and a performance review.")
            }
            (GameMode::Bounce, Tier::Mid) => {
                format!("{shown} touchpoints of pure synergy. Solid Q4 alignment.")
            }
            (GameMode::Bounce, Tier::High) => {
                format!("{shown} touchpoints! Promotion approved, overtime mandatory.")
            }
            (GameMode::Shooter, Tier::Low) => {
                format!("Only {shown} captured. Budget cuts are on the agenda.")
            }
            (GameMode::Shooter, Tier::Mid) => {
                format!("{shown} in new revenue streams. The board is cautiously optimistic.")
            }
            (GameMode::Shooter, Tier::High) => {
                format!("{shown} in liquidity! Time to file for the IPO.")
            }
            (GameMode::Catch, Tier::Low) => {
                format!("{shown} collected. Projections missed, no holiday bonus this year.")
            }
            (GameMode::Catch, Tier::Mid) => {
                format!("{shown} banked. Fiscal year targets met, barely.")
            }
            (GameMode::Catch, Tier::High) => {
                format!("{shown} collected! The golden parachute has a yacht attached.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds_are_exclusive() {
        assert_eq!(Tier::for_score(GameMode::Bounce, 9), Tier::Low);
        assert_eq!(Tier::for_score(GameMode::Bounce, 10), Tier::Mid);
        assert_eq!(Tier::for_score(GameMode::Bounce, 50), Tier::Mid);
        assert_eq!(Tier::for_score(GameMode::Bounce, 51), Tier::High);
        assert_eq!(Tier::for_score(GameMode::Shooter, 99), Tier::Low);
        assert_eq!(Tier::for_score(GameMode::Shooter, 501), Tier::High);
        assert_eq!(Tier::for_score(GameMode::Catch, 1000), Tier::Mid);
        assert_eq!(Tier::for_score(GameMode::Catch, 1001), Tier::High);
    }

    #[test]
    fn test_canned_message_mentions_score() {
        let msg = CannedMessages.message(GameMode::Catch, 1500);
        assert!(msg.contains("$1500"));
        let msg = CannedMessages.message(GameMode::Bounce, 3);
        assert!(msg.starts_with("3 "));
    }

    #[test]
    fn test_fallback() {
        assert_eq!(fallback_message(42), "Great job! You scored 42 points!");
    }
}
