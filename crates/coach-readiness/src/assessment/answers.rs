use super::catalog::QuestionCatalog;
use super::domain::AssessmentError;
use serde::Serialize;
use std::collections::BTreeMap;

/// Selected option value per question id.
///
/// Entries can only be added through [`AnswerSet::record`], which validates both the
/// question id and the option value against a catalog, so every stored pair refers to
/// a real question and one of its declared options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet {
    entries: BTreeMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a validated set from external input. The first invalid pair aborts.
    pub fn from_pairs<I, K, V>(catalog: &QuestionCatalog, pairs: I) -> Result<Self, AssessmentError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut answers = Self::new();
        for (question_id, value) in pairs {
            answers.record(catalog, question_id.as_ref(), value.as_ref())?;
        }
        Ok(answers)
    }

    /// Stores the answer, replacing any earlier one, and returns the replaced value.
    pub fn record(
        &mut self,
        catalog: &QuestionCatalog,
        question_id: &str,
        value: &str,
    ) -> Result<Option<String>, AssessmentError> {
        let question = catalog.validate(question_id, value)?;
        Ok(self
            .entries
            .insert(question.id.to_owned(), value.to_owned()))
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.entries.get(question_id).map(String::as_str)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.entries.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, value)| (id.as_str(), value.as_str()))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
