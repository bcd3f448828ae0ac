use super::super::answers::AnswerSet;
use super::super::catalog::QuestionCatalog;
use super::super::domain::{Category, ScoringRule, LIKERT_WEIGHT};
use super::ScoreComponent;
use std::collections::HashMap;

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct CategoryTally {
    pub total: u32,
    pub count: u32,
}

impl CategoryTally {
    fn add(&mut self, points: u8) {
        self.total += u32::from(points);
        self.count += 1;
    }

    /// Rounded average, or 0 when nothing in the category was answered.
    pub fn score(&self) -> u8 {
        rounded_mean(self.total, self.count)
    }
}

pub(crate) fn score_answers(
    catalog: &QuestionCatalog,
    answers: &AnswerSet,
) -> (Vec<ScoreComponent>, HashMap<Category, CategoryTally>) {
    let mut components = Vec::new();
    let mut tallies: HashMap<Category, CategoryTally> = HashMap::new();

    for question in catalog.questions() {
        let Some(value) = answers.get(question.id) else {
            continue;
        };
        let Some(points) = rule_points(&question.rule, value) else {
            continue;
        };

        tallies.entry(question.category).or_default().add(points);
        components.push(ScoreComponent {
            question_id: question.id,
            category: question.category,
            subcategory: question.subcategory,
            points,
            notes: describe(&question.rule, value, points),
        });
    }

    (components, tallies)
}

pub(crate) fn rule_points(rule: &ScoringRule, value: &str) -> Option<u8> {
    match rule {
        ScoringRule::Likert => value
            .trim()
            .parse::<u8>()
            .ok()
            .map(|step| step.saturating_mul(LIKERT_WEIGHT)),
        ScoringRule::PreferredChoice {
            preferred,
            matched,
            missed,
        } => Some(if preferred.iter().any(|candidate| *candidate == value) {
            *matched
        } else {
            *missed
        }),
        ScoringRule::CorrectAnswer {
            correct,
            matched,
            missed,
        } => Some(if *correct == value { *matched } else { *missed }),
        ScoringRule::Lookup { table, fallback } => Some(
            table
                .iter()
                .find(|(candidate, _)| *candidate == value)
                .map(|(_, points)| *points)
                .unwrap_or(*fallback),
        ),
    }
}

fn describe(rule: &ScoringRule, value: &str, points: u8) -> String {
    match rule {
        ScoringRule::Likert => format!("rated {value} on a 1-5 scale"),
        ScoringRule::PreferredChoice { preferred, .. }
            if preferred.iter().any(|candidate| *candidate == value) =>
        {
            format!("preferred response '{value}'")
        }
        ScoringRule::PreferredChoice { .. } => format!("response '{value}' outside preferred set"),
        ScoringRule::CorrectAnswer { correct, .. } if *correct == value => {
            "correct answer".to_string()
        }
        ScoringRule::CorrectAnswer { .. } => format!("incorrect answer '{value}'"),
        ScoringRule::Lookup { table, .. } if table.iter().any(|(key, _)| *key == value) => {
            format!("'{value}' rated {points}")
        }
        ScoringRule::Lookup { .. } => format!("unrecognised response '{value}', default {points}"),
    }
}

/// Integer mean rounded half up; non-negative inputs only.
pub(crate) fn rounded_mean(total: u32, count: u32) -> u8 {
    if count == 0 {
        return 0;
    }
    let rounded = (2 * total + count) / (2 * count);
    u8::try_from(rounded).unwrap_or(u8::MAX)
}
