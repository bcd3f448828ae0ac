use chrono::NaiveDate;
use coach_readiness::error::AppError;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Parses `question_id=value`.
pub(crate) fn parse_answer_pair(raw: &str) -> Result<(String, String), String> {
    let (question_id, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION_ID=VALUE, found '{raw}'"))?;
    let question_id = question_id.trim();
    let value = value.trim();

    if question_id.is_empty() || value.is_empty() {
        return Err(format!("expected QUESTION_ID=VALUE, found '{raw}'"));
    }

    Ok((question_id.to_string(), value.to_string()))
}

/// Reads a flat JSON object of question id to option value.
pub(crate) fn read_answers_file(path: &Path) -> Result<BTreeMap<String, String>, AppError> {
    let raw = fs::read_to_string(path)?;
    let answers = serde_json::from_str(&raw)?;
    Ok(answers)
}

/// Starts from the answers file, if any; `--answer` flags replace file entries.
pub(crate) fn collect_answer_pairs(
    answers_file: Option<&Path>,
    overrides: Vec<(String, String)>,
) -> Result<BTreeMap<String, String>, AppError> {
    let mut pairs = match answers_file {
        Some(path) => read_answers_file(path)?,
        None => BTreeMap::new(),
    };
    pairs.extend(overrides);
    Ok(pairs)
}
