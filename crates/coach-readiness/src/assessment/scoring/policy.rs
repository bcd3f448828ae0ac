use super::config::ScoringConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-tier fit recommendation derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::Maybe => "maybe",
            Self::No => "no",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn recommend(overall: u8, config: &ScoringConfig) -> Recommendation {
    if overall >= config.yes_threshold {
        Recommendation::Yes
    } else if overall >= config.maybe_threshold {
        Recommendation::Maybe
    } else {
        Recommendation::No
    }
}
