use super::super::domain::Category;
use super::super::scoring::ScoreBreakdown;
use super::insights::{
    confidence_level, growth_opportunities, learning_path, recommendation_view, role_matches,
    strengths,
};
use super::views::{CategoryScoreEntry, ConfidenceLevel, RecommendationView, RoleMatchEntry};
use chrono::NaiveDate;
use serde::Serialize;

/// Read-only results page assembled from a score breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub assessed_on: NaiveDate,
    pub breakdown: ScoreBreakdown,
    pub recommendation: RecommendationView,
    pub confidence: ConfidenceLevel,
    pub confidence_label: &'static str,
    pub categories: Vec<CategoryScoreEntry>,
    pub role_matches: Vec<RoleMatchEntry>,
    pub learning_path: Vec<&'static str>,
    pub strengths: Vec<&'static str>,
    pub growth_opportunities: Vec<&'static str>,
}

impl AssessmentReport {
    pub fn new(breakdown: &ScoreBreakdown, assessed_on: NaiveDate) -> Self {
        let categories = Category::ordered()
            .into_iter()
            .map(|category| CategoryScoreEntry {
                category,
                label: category.label(),
                score: breakdown.category(category),
                description: category.description(),
            })
            .collect();
        let confidence = confidence_level(breakdown.overall);

        Self {
            assessed_on,
            breakdown: *breakdown,
            recommendation: recommendation_view(breakdown.recommendation),
            confidence,
            confidence_label: confidence.label(),
            categories,
            role_matches: role_matches(breakdown),
            learning_path: learning_path(breakdown.recommendation),
            strengths: strengths(breakdown),
            growth_opportunities: growth_opportunities(breakdown),
        }
    }

    pub fn role_match(&self, role: &str) -> Option<&RoleMatchEntry> {
        self.role_matches.iter().find(|entry| entry.role == role)
    }
}
