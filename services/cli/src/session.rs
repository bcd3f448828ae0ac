use crate::render::{render_intro, render_question, render_report};
use chrono::NaiveDate;
use coach_readiness::assessment::{
    AssessmentFlow, AssessmentIntro, AssessmentReport, FlowAction, FlowEvent, FlowState, Question,
};
use coach_readiness::config::OutputFormat;
use coach_readiness::error::AppError;
use std::io::{BufRead, Write};
use tracing::debug;

/// Line-oriented terminal front end for an [`AssessmentFlow`].
pub(crate) struct Session {
    flow: AssessmentFlow,
    intro: AssessmentIntro,
    format: OutputFormat,
    assessed_on: NaiveDate,
}

impl Session {
    pub(crate) fn new(flow: AssessmentFlow, format: OutputFormat, assessed_on: NaiveDate) -> Self {
        Self {
            flow,
            intro: AssessmentIntro::standard(),
            format,
            assessed_on,
        }
    }

    #[cfg(test)]
    pub(crate) fn flow(&self) -> &AssessmentFlow {
        &self.flow
    }

    /// Runs until the user quits or input is exhausted.
    pub(crate) fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
    ) -> Result<(), AppError> {
        let mut line = String::new();
        loop {
            self.render(out)?;
            write!(out, "> ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(());
            }

            let command = line.trim();
            if command.eq_ignore_ascii_case("q") || command.eq_ignore_ascii_case("quit") {
                return Ok(());
            }

            let Some(action) =
                parse_command(self.flow.state(), self.flow.current_question(), command)
            else {
                writeln!(out, "Unrecognised command '{command}'\n")?;
                continue;
            };

            match self.flow.apply(action) {
                Ok(FlowEvent::Completed(breakdown)) => {
                    debug!(overall = breakdown.overall, "questionnaire finished");
                    writeln!(out)?;
                }
                Ok(_) => writeln!(out)?,
                Err(err) => writeln!(out, "Action rejected: {err}\n")?,
            }
        }
    }

    fn render<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        match self.flow.state() {
            FlowState::Intro => render_intro(out, &self.intro),
            FlowState::Questions => render_question(out, &self.flow.view()),
            FlowState::Results => {
                if let Some(breakdown) = self.flow.results() {
                    let report = AssessmentReport::new(&breakdown, self.assessed_on);
                    render_report(out, &report, self.format)?;
                }
                writeln!(out, "\n[r] Retake assessment  [q] Quit")?;
                Ok(())
            }
        }
    }
}

fn parse_command(
    state: FlowState,
    question: Option<&Question>,
    command: &str,
) -> Option<FlowAction> {
    let command = command.to_ascii_lowercase();
    match (state, command.as_str()) {
        (FlowState::Intro, "s" | "start") => Some(FlowAction::Start),
        (FlowState::Questions, "n" | "next") => Some(FlowAction::Advance),
        (FlowState::Questions, "b" | "back") => Some(FlowAction::Retreat),
        (FlowState::Questions, raw) => {
            let question = question?;
            let position = raw.parse::<usize>().ok()?.checked_sub(1)?;
            let option = question.options.get(position)?;
            Some(FlowAction::Select {
                question_id: question.id.to_string(),
                value: option.value.to_string(),
            })
        }
        (FlowState::Results, "r" | "restart") => Some(FlowAction::Restart),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session() -> Session {
        Session::new(
            AssessmentFlow::standard(),
            OutputFormat::Text,
            NaiveDate::from_ymd_opt(2025, 10, 6).expect("valid date"),
        )
    }

    fn drive(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        session
            .run(Cursor::new(script.as_bytes()), &mut out)
            .expect("session runs");
        String::from_utf8(out).expect("utf8 output")
    }

    #[test]
    fn completes_questionnaire_and_renders_report() {
        let mut session = session();
        let mut script = String::from("s\n");
        for _ in 0..12 {
            script.push_str("4\nn\n");
        }
        script.push_str("q\n");

        let output = drive(&mut session, &script);

        assert_eq!(session.flow().state(), FlowState::Results);
        assert!(output.contains("Your Assessment Results (2025-10-06)"));
        assert!(output.contains("Overall Score:"));
        assert!(output.contains("Question 12 of 12 (100% complete)"));
    }

    #[test]
    fn next_without_answer_is_rejected() {
        let mut session = session();

        let output = drive(&mut session, "s\nn\nq\n");

        assert!(output.contains("Action rejected: question interest_1 must be answered"));
        assert_eq!(session.flow().index(), 0);
    }

    #[test]
    fn back_from_first_question_returns_to_intro() {
        let mut session = session();

        let output = drive(&mut session, "s\nb\n");

        assert_eq!(session.flow().state(), FlowState::Intro);
        assert_eq!(output.matches("[s] Start assessment").count(), 2);
    }

    #[test]
    fn unknown_commands_are_reported() {
        let mut session = session();

        let output = drive(&mut session, "s\n9\nx\nq\n");

        assert!(output.contains("Unrecognised command '9'"));
        assert!(output.contains("Unrecognised command 'x'"));
        assert!(session.flow().answers().is_empty());
    }

    #[test]
    fn retake_clears_answers() {
        let mut session = session();
        let mut script = String::from("s\n");
        for _ in 0..12 {
            script.push_str("1\nn\n");
        }
        script.push_str("r\n");

        drive(&mut session, &script);

        assert_eq!(session.flow().state(), FlowState::Intro);
        assert!(session.flow().answers().is_empty());
    }
}
