use super::answers::AnswerSet;
use super::catalog::QuestionCatalog;
use super::domain::{AssessmentError, Question};
use super::scoring::{ScoreBreakdown, ScoringConfig, ScoringEngine};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    Intro,
    Questions,
    Results,
}

impl FlowState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Questions => "questions",
            Self::Results => "results",
        }
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete events raised by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FlowAction {
    Start,
    Select { question_id: String, value: String },
    Advance,
    Retreat,
    Restart,
}

impl FlowAction {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Select { .. } => "select",
            Self::Advance => "advance",
            Self::Retreat => "retreat",
            Self::Restart => "restart",
        }
    }
}

/// Outcome of an accepted action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    Started,
    Answered {
        question_id: String,
        previous: Option<String>,
    },
    Moved {
        index: usize,
    },
    ReturnedToIntro,
    Completed(ScoreBreakdown),
    Restarted,
}

/// A rejected action. The flow is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("{action} is not permitted in the {state} state")]
    NotPermitted {
        action: &'static str,
        state: FlowState,
    },
    #[error("question {question_id} must be answered before advancing")]
    Unanswered { question_id: &'static str },
    #[error("the question catalog is empty")]
    EmptyCatalog,
    #[error(transparent)]
    Answer(#[from] AssessmentError),
}

/// Snapshot handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct FlowView<'a> {
    pub state: FlowState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<&'a Question>,
    pub index: usize,
    pub total: usize,
    pub progress: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<&'a str>,
    pub can_advance: bool,
    pub completes_on_advance: bool,
}

/// Linear intro -> questions -> results controller.
///
/// The flow exclusively owns its [`AnswerSet`]; all mutation goes through
/// [`AssessmentFlow::apply`], one action at a time, so no synchronisation is involved.
/// While in the questions state the index always addresses a catalog question.
#[derive(Debug, Clone)]
pub struct AssessmentFlow {
    catalog: QuestionCatalog,
    engine: ScoringEngine,
    state: FlowState,
    index: usize,
    answers: AnswerSet,
}

impl AssessmentFlow {
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self::with_config(catalog, ScoringConfig::default())
    }

    pub fn with_config(catalog: QuestionCatalog, config: ScoringConfig) -> Self {
        Self {
            catalog,
            engine: ScoringEngine::new(config),
            state: FlowState::Intro,
            index: 0,
            answers: AnswerSet::new(),
        }
    }

    pub fn standard() -> Self {
        Self::new(QuestionCatalog::standard())
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            FlowState::Questions => self.catalog.question_at(self.index),
            FlowState::Intro | FlowState::Results => None,
        }
    }

    pub fn can_advance(&self) -> bool {
        self.current_question()
            .is_some_and(|question| self.answers.contains(question.id))
    }

    /// Fraction of the catalog reached, `(index + 1) / total` while answering.
    pub fn progress(&self) -> f32 {
        match self.state {
            FlowState::Intro => 0.0,
            FlowState::Questions if self.catalog.is_empty() => 0.0,
            FlowState::Questions => (self.index + 1) as f32 / self.catalog.len() as f32,
            FlowState::Results => 1.0,
        }
    }

    /// Recomputed from the current answers whenever the flow is showing results.
    pub fn results(&self) -> Option<ScoreBreakdown> {
        match self.state {
            FlowState::Results => Some(self.engine.score(&self.catalog, &self.answers)),
            FlowState::Intro | FlowState::Questions => None,
        }
    }

    pub fn view(&self) -> FlowView<'_> {
        let question = self.current_question();
        FlowView {
            state: self.state,
            question,
            index: self.index,
            total: self.catalog.len(),
            progress: self.progress(),
            selected: question.and_then(|question| self.answers.get(question.id)),
            can_advance: self.can_advance(),
            completes_on_advance: question.is_some() && self.index + 1 == self.catalog.len(),
        }
    }

    pub fn start(&mut self) -> Result<FlowEvent, FlowError> {
        self.apply(FlowAction::Start)
    }

    pub fn select(&mut self, question_id: &str, value: &str) -> Result<FlowEvent, FlowError> {
        self.apply(FlowAction::Select {
            question_id: question_id.to_owned(),
            value: value.to_owned(),
        })
    }

    pub fn advance(&mut self) -> Result<FlowEvent, FlowError> {
        self.apply(FlowAction::Advance)
    }

    pub fn retreat(&mut self) -> Result<FlowEvent, FlowError> {
        self.apply(FlowAction::Retreat)
    }

    pub fn restart(&mut self) -> Result<FlowEvent, FlowError> {
        self.apply(FlowAction::Restart)
    }

    /// Applies one action. Every (state, action) pair either transitions or is rejected
    /// without side effects.
    pub fn apply(&mut self, action: FlowAction) -> Result<FlowEvent, FlowError> {
        let name = action.name();
        let state = self.state;

        let outcome = match action {
            FlowAction::Start => self.handle_start(),
            FlowAction::Select { question_id, value } => self.handle_select(question_id, value),
            FlowAction::Advance => self.handle_advance(),
            FlowAction::Retreat => self.handle_retreat(),
            FlowAction::Restart => self.handle_restart(),
        };

        match &outcome {
            Ok(event) => debug!(
                action = name,
                from = %state,
                to = %self.state,
                ?event,
                "flow transition"
            ),
            Err(err) => warn!(action = name, state = %state, %err, "flow action rejected"),
        }

        outcome
    }

    fn require(&self, expected: FlowState, action: &'static str) -> Result<(), FlowError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(FlowError::NotPermitted {
                action,
                state: self.state,
            })
        }
    }

    fn handle_start(&mut self) -> Result<FlowEvent, FlowError> {
        self.require(FlowState::Intro, "start")?;
        if self.catalog.is_empty() {
            return Err(FlowError::EmptyCatalog);
        }

        self.state = FlowState::Questions;
        self.index = 0;
        info!(
            questions = self.catalog.len(),
            answered = self.answers.len(),
            "assessment started"
        );
        Ok(FlowEvent::Started)
    }

    fn handle_select(
        &mut self,
        question_id: String,
        value: String,
    ) -> Result<FlowEvent, FlowError> {
        self.require(FlowState::Questions, "select")?;
        let previous = self.answers.record(&self.catalog, &question_id, &value)?;
        Ok(FlowEvent::Answered {
            question_id,
            previous,
        })
    }

    fn handle_advance(&mut self) -> Result<FlowEvent, FlowError> {
        self.require(FlowState::Questions, "advance")?;
        let question_id = self
            .catalog
            .question_at(self.index)
            .map(|question| question.id)
            .ok_or(FlowError::EmptyCatalog)?;

        if !self.answers.contains(question_id) {
            return Err(FlowError::Unanswered { question_id });
        }

        if self.index + 1 < self.catalog.len() {
            self.index += 1;
            return Ok(FlowEvent::Moved { index: self.index });
        }

        self.state = FlowState::Results;
        let breakdown = self.engine.score(&self.catalog, &self.answers);
        info!(
            overall = breakdown.overall,
            recommendation = %breakdown.recommendation,
            "assessment completed"
        );
        Ok(FlowEvent::Completed(breakdown))
    }

    fn handle_retreat(&mut self) -> Result<FlowEvent, FlowError> {
        self.require(FlowState::Questions, "retreat")?;
        if self.index == 0 {
            self.answers.clear();
            self.state = FlowState::Intro;
            info!("returned to intro, answers discarded");
            return Ok(FlowEvent::ReturnedToIntro);
        }

        self.index -= 1;
        Ok(FlowEvent::Moved { index: self.index })
    }

    fn handle_restart(&mut self) -> Result<FlowEvent, FlowError> {
        self.require(FlowState::Results, "restart")?;
        self.answers.clear();
        self.index = 0;
        self.state = FlowState::Intro;
        info!("assessment restarted");
        Ok(FlowEvent::Restarted)
    }
}

impl Default for AssessmentFlow {
    fn default() -> Self {
        Self::standard()
    }
}
