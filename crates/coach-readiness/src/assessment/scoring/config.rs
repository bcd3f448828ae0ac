use serde::{Deserialize, Serialize};

/// Overall-score bands that drive the recommendation tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub yes_threshold: u8,
    pub maybe_threshold: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            yes_threshold: 80,
            maybe_threshold: 60,
        }
    }
}
