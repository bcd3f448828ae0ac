mod config;
mod policy;
mod rules;


pub use config::ScoringConfig;
pub use policy::Recommendation;

use super::answers::AnswerSet;
use super::catalog::QuestionCatalog;
use super::domain::{Category, Subcategory};
use policy::recommend;
use rules::rounded_mean;
use serde::{Deserialize, Serialize};

/// Stateless scorer that turns an answer set into category scores and a recommendation.
///
/// Nothing is cached: every call recomputes the breakdown from the answers it is given.
/// Partial answer sets are scored as-is; a category without answers scores 0 and still
/// counts towards the overall mean.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, catalog: &QuestionCatalog, answers: &AnswerSet) -> ScoreBreakdown {
        self.evaluate(catalog, answers).breakdown
    }

    pub fn evaluate(&self, catalog: &QuestionCatalog, answers: &AnswerSet) -> ScoreCard {
        let (components, tallies) = rules::score_answers(catalog, answers);
        let category_score = |category: Category| {
            tallies
                .get(&category)
                .map(|tally| tally.score())
                .unwrap_or(0)
        };

        let psychometric = category_score(Category::Psychometric);
        let technical = category_score(Category::Technical);
        let wiscar = category_score(Category::Wiscar);
        let overall = rounded_mean(
            u32::from(psychometric) + u32::from(technical) + u32::from(wiscar),
            3,
        );

        ScoreCard {
            breakdown: ScoreBreakdown {
                psychometric,
                technical,
                wiscar,
                overall,
                recommendation: recommend(overall, &self.config),
            },
            components,
        }
    }
}

/// Category scores (0-100), their unweighted mean, and the derived recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub psychometric: u8,
    pub technical: u8,
    pub wiscar: u8,
    pub overall: u8,
    pub recommendation: Recommendation,
}

impl ScoreBreakdown {
    pub fn category(&self, category: Category) -> u8 {
        match category {
            Category::Psychometric => self.psychometric,
            Category::Technical => self.technical,
            Category::Wiscar => self.wiscar,
        }
    }
}

/// Points contributed by one answer, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub question_id: &'static str,
    pub category: Category,
    pub subcategory: Subcategory,
    pub points: u8,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreCard {
    pub breakdown: ScoreBreakdown,
    pub components: Vec<ScoreComponent>,
}
