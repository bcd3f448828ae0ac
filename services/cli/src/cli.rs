use crate::infra::{collect_answer_pairs, parse_answer_pair, parse_date};
use crate::render::{render_catalog, render_report};
use crate::session::Session;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use coach_readiness::assessment::{
    AnswerSet, AssessmentFlow, AssessmentReport, Category, QuestionCatalog, ScoringEngine,
};
use coach_readiness::config::{AppConfig, OutputFormat};
use coach_readiness::error::AppError;
use coach_readiness::telemetry;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "coach-readiness",
    about = "Readiness & fit assessment for Team Leadership Coaching",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Take the assessment interactively (default command)
    Take(TakeArgs),
    /// Score a set of answers without the interactive flow
    Score(ScoreArgs),
    /// List the questions and their option values
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Default)]
struct TakeArgs {
    /// Output format for the results screen
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
    /// Date printed on the results (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Answer as QUESTION_ID=VALUE; repeat for each question
    #[arg(long = "answer", value_parser = parse_answer_pair)]
    answers: Vec<(String, String)>,
    /// JSON object mapping question ids to option values
    #[arg(long)]
    answers_file: Option<PathBuf>,
    /// Output format for the report
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
    /// Date printed on the report (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Only list questions from this category
    #[arg(long, value_enum)]
    category: Option<CategoryArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryArg {
    Psychometric,
    Technical,
    Wiscar,
}

impl From<CategoryArg> for Category {
    fn from(value: CategoryArg) -> Self {
        match value {
            CategoryArg::Psychometric => Category::Psychometric,
            CategoryArg::Technical => Category::Technical,
            CategoryArg::Wiscar => Category::Wiscar,
        }
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "coach readiness assessment");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Take(TakeArgs::default()));

    match command {
        Command::Take(args) => run_take(args, &config),
        Command::Score(args) => run_score(args, &config),
        Command::Catalog(args) => run_catalog(args),
    }
}

fn run_take(args: TakeArgs, config: &AppConfig) -> Result<(), AppError> {
    let format = args.format.map(OutputFormat::from).unwrap_or(config.output);
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let flow = AssessmentFlow::with_config(QuestionCatalog::standard(), config.scoring);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    Session::new(flow, format, today).run(stdin.lock(), &mut stdout)
}

fn run_score(args: ScoreArgs, config: &AppConfig) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        answers_file,
        format,
        today,
    } = args;

    let pairs = collect_answer_pairs(answers_file.as_deref(), answers)?;

    let catalog = QuestionCatalog::standard();
    let answers = AnswerSet::from_pairs(&catalog, &pairs)?;
    let engine = ScoringEngine::new(config.scoring);
    let breakdown = engine.score(&catalog, &answers);
    info!(
        answered = answers.len(),
        overall = breakdown.overall,
        "scored answers"
    );

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let report = AssessmentReport::new(&breakdown, today);
    let format = format.map(OutputFormat::from).unwrap_or(config.output);

    let mut stdout = io::stdout().lock();
    render_report(&mut stdout, &report, format)?;
    stdout.flush()?;
    Ok(())
}

fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = QuestionCatalog::standard();
    let mut stdout = io::stdout().lock();
    render_catalog(&mut stdout, &catalog, args.category.map(Category::from))?;
    stdout.flush()?;
    Ok(())
}
