//! Team Leadership Coaching readiness assessment: question catalog, flow controller,
//! scoring engine, and the results report built on top of it.

mod answers;
mod catalog;
pub mod domain;
mod flow;
mod intro;
pub mod report;
pub mod scoring;

pub use answers::AnswerSet;
pub use catalog::QuestionCatalog;
pub use domain::{
    AnswerKind, AnswerOption, AssessmentError, Category, Question, ScoringRule, Subcategory,
};
pub use flow::{AssessmentFlow, FlowAction, FlowError, FlowEvent, FlowState, FlowView};
pub use intro::AssessmentIntro;
pub use report::AssessmentReport;
pub use scoring::{
    Recommendation, ScoreBreakdown, ScoreCard, ScoreComponent, ScoringConfig, ScoringEngine,
};
