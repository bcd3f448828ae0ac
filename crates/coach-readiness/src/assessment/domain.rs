use serde::{Deserialize, Serialize};
use std::fmt;

/// Points awarded per step on a 1-5 Likert scale.
pub const LIKERT_WEIGHT: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Psychometric,
    Technical,
    Wiscar,
}

impl Category {
    pub const fn ordered() -> [Self; 3] {
        [Self::Psychometric, Self::Technical, Self::Wiscar]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Psychometric => "psychometric",
            Self::Technical => "technical",
            Self::Wiscar => "wiscar",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Psychometric => "Psychometric Fit",
            Self::Technical => "Technical Readiness",
            Self::Wiscar => "WISCAR Framework",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Psychometric => "Interest, personality compatibility, and motivation assessment",
            Self::Technical => "Aptitude and prerequisite knowledge evaluation",
            Self::Wiscar => "Will, skills, cognitive readiness, and learning ability",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subcategory {
    InterestScale,
    PersonalityCompatibility,
    GeneralAptitude,
    PrerequisiteKnowledge,
    Will,
    Skill,
    CognitiveReadiness,
    AbilityToLearn,
}

impl Subcategory {
    pub const fn category(self) -> Category {
        match self {
            Self::InterestScale | Self::PersonalityCompatibility => Category::Psychometric,
            Self::GeneralAptitude | Self::PrerequisiteKnowledge => Category::Technical,
            Self::Will | Self::Skill | Self::CognitiveReadiness | Self::AbilityToLearn => {
                Category::Wiscar
            }
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InterestScale => "Interest Scale",
            Self::PersonalityCompatibility => "Personality Compatibility",
            Self::GeneralAptitude => "General Aptitude",
            Self::PrerequisiteKnowledge => "Prerequisite Knowledge",
            Self::Will => "Will",
            Self::Skill => "Skill",
            Self::CognitiveReadiness => "Cognitive Readiness",
            Self::AbilityToLearn => "Ability to Learn",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    Single,
    Likert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// How a single answer turns into category points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringRule {
    /// Integer value times [`LIKERT_WEIGHT`].
    Likert,
    PreferredChoice {
        preferred: &'static [&'static str],
        matched: u8,
        missed: u8,
    },
    CorrectAnswer {
        correct: &'static str,
        matched: u8,
        missed: u8,
    },
    Lookup {
        table: &'static [(&'static str, u8)],
        fallback: u8,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub category: Category,
    pub subcategory: Subcategory,
    pub prompt: &'static str,
    pub kind: AnswerKind,
    pub options: Vec<AnswerOption>,
    #[serde(skip)]
    pub rule: ScoringRule,
}

impl Question {
    pub fn option(&self, value: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.value == value)
    }

    pub fn accepts(&self, value: &str) -> bool {
        self.option(value).is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("question with id {0} not found")]
    UnknownQuestion(String),
    #[error("'{value}' is not a valid option for question {question_id}")]
    InvalidOption { question_id: String, value: String },
    #[error("question id {0} appears more than once in the catalog")]
    DuplicateQuestion(String),
}
