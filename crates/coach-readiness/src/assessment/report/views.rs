use super::super::domain::Category;
use super::super::scoring::Recommendation;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Moderate,
    Developing,
}

impl ConfidenceLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Developing => "Developing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLevel {
    Excellent,
    Good,
    Developing,
}

impl MatchLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Match",
            Self::Good => "Good Match",
            Self::Developing => "Developing Match",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub recommendation: Recommendation,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryScoreEntry {
    pub category: Category,
    pub label: &'static str,
    pub score: u8,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleMatchEntry {
    pub role: &'static str,
    pub level: MatchLevel,
    pub level_label: &'static str,
}
