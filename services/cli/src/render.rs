use coach_readiness::assessment::{
    AnswerKind, AssessmentIntro, AssessmentReport, Category, FlowView, QuestionCatalog,
};
use coach_readiness::config::OutputFormat;
use coach_readiness::error::AppError;
use std::io::Write;

pub(crate) fn render_intro<W: Write>(out: &mut W, intro: &AssessmentIntro) -> Result<(), AppError> {
    writeln!(out, "{}", intro.title)?;
    writeln!(out)?;
    writeln!(out, "Assessment purpose")?;
    for item in &intro.purpose {
        writeln!(out, "- {item}")?;
    }
    writeln!(out)?;
    writeln!(out, "About Team Leadership Coaching")?;
    writeln!(out, "{}", intro.discipline)?;
    writeln!(out)?;
    writeln!(out, "Typical career paths: {}", intro.typical_careers.join(", "))?;
    writeln!(out, "Success traits")?;
    for trait_name in &intro.success_traits {
        writeln!(out, "- {trait_name}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", intro.summary)?;
    writeln!(out, "Estimated time: {}", intro.estimated_duration)?;
    writeln!(out)?;
    writeln!(out, "[s] Start assessment  [q] Quit")?;
    Ok(())
}

pub(crate) fn render_question<W: Write>(out: &mut W, view: &FlowView<'_>) -> Result<(), AppError> {
    let Some(question) = view.question else {
        return Ok(());
    };

    writeln!(
        out,
        "{} / {}    Question {} of {} ({:.0}% complete)",
        question.category.label(),
        question.subcategory.label(),
        view.index + 1,
        view.total,
        view.progress * 100.0
    )?;
    writeln!(out)?;
    writeln!(out, "{}", question.prompt)?;
    if question.kind == AnswerKind::Likert {
        writeln!(out, "Please rate your response on the scale below")?;
    }
    for (position, option) in question.options.iter().enumerate() {
        let marker = if view.selected == Some(option.value) {
            "*"
        } else {
            " "
        };
        writeln!(out, " {marker} {}) {}", position + 1, option.label)?;
    }
    writeln!(out)?;

    let back = if view.index == 0 {
        "Back to intro"
    } else {
        "Previous"
    };
    let next = match (view.can_advance, view.completes_on_advance) {
        (false, _) => "answer to continue",
        (true, true) => "Complete assessment",
        (true, false) => "Next question",
    };
    writeln!(
        out,
        "[1-{}] Select  [n] {next}  [b] {back}  [q] Quit",
        question.options.len()
    )?;
    Ok(())
}

pub(crate) fn render_report<W: Write>(
    out: &mut W,
    report: &AssessmentReport,
    format: OutputFormat,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report)?;
            writeln!(out, "{json}")?;
            Ok(())
        }
        OutputFormat::Text => render_report_text(out, report),
    }
}

fn render_report_text<W: Write>(out: &mut W, report: &AssessmentReport) -> Result<(), AppError> {
    writeln!(out, "Your Assessment Results ({})", report.assessed_on)?;
    writeln!(out)?;
    writeln!(out, "{}", report.recommendation.title)?;
    writeln!(out, "{}", report.recommendation.description)?;
    writeln!(
        out,
        "Overall Score: {}/100 | Confidence Level: {}",
        report.breakdown.overall, report.confidence_label
    )?;

    writeln!(out, "\nScore breakdown")?;
    for entry in &report.categories {
        writeln!(
            out,
            "- {}: {}/100 ({})",
            entry.label, entry.score, entry.description
        )?;
    }

    writeln!(out, "\nTop job role matches")?;
    for entry in &report.role_matches {
        writeln!(out, "- {}: {}", entry.role, entry.level_label)?;
    }

    writeln!(out, "\nRecommended learning path")?;
    for (step, item) in report.learning_path.iter().enumerate() {
        writeln!(out, "{}. {}", step + 1, item)?;
    }

    if report.strengths.is_empty() {
        writeln!(out, "\nStrengths identified: none yet")?;
    } else {
        writeln!(out, "\nStrengths identified")?;
        for item in &report.strengths {
            writeln!(out, "- {item}")?;
        }
    }

    writeln!(out, "\nGrowth opportunities")?;
    for item in &report.growth_opportunities {
        writeln!(out, "- {item}")?;
    }
    Ok(())
}

pub(crate) fn render_catalog<W: Write>(
    out: &mut W,
    catalog: &QuestionCatalog,
    category: Option<Category>,
) -> Result<(), AppError> {
    for question in catalog
        .questions()
        .iter()
        .filter(|question| category.map_or(true, |wanted| question.category == wanted))
    {
        writeln!(
            out,
            "{} [{} / {}]",
            question.id,
            question.category.label(),
            question.subcategory.label()
        )?;
        writeln!(out, "  {}", question.prompt)?;
        for option in &question.options {
            writeln!(out, "    {} = {}", option.value, option.label)?;
        }
    }
    Ok(())
}
