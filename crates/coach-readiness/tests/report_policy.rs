use chrono::NaiveDate;
use coach_readiness::assessment::report::{ConfidenceLevel, MatchLevel};
use coach_readiness::assessment::{
    AnswerSet, AssessmentIntro, AssessmentReport, Category, QuestionCatalog, Recommendation,
    ScoreBreakdown, ScoringConfig, ScoringEngine,
};

fn assessed_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 6).expect("valid date")
}

fn breakdown(psychometric: u8, technical: u8, wiscar: u8, overall: u8) -> ScoreBreakdown {
    let recommendation = if overall >= 80 {
        Recommendation::Yes
    } else if overall >= 60 {
        Recommendation::Maybe
    } else {
        Recommendation::No
    };
    ScoreBreakdown {
        psychometric,
        technical,
        wiscar,
        overall,
        recommendation,
    }
}

#[test]
fn strong_profile_reads_as_excellent_fit() {
    let report = AssessmentReport::new(&breakdown(93, 88, 90, 90), assessed_on());

    assert_eq!(
        report.recommendation.title,
        "Excellent Fit for Team Leadership Coaching"
    );
    assert_eq!(report.confidence, ConfidenceLevel::High);
    assert_eq!(report.confidence_label, "High");
    assert!(report
        .role_matches
        .iter()
        .all(|entry| entry.level == MatchLevel::Excellent));
    assert_eq!(report.learning_path[0], "Advanced Leadership Techniques");
    assert_eq!(report.strengths.len(), 4);
    assert_eq!(
        report.growth_opportunities,
        vec!["Practice facilitating team discussions and meetings"]
    );
}

#[test]
fn confidence_ignores_custom_recommendation_thresholds() {
    let catalog = QuestionCatalog::standard();
    let answers = AnswerSet::from_pairs(
        &catalog,
        [("interest_1", "5"), ("aptitude_1", "4"), ("wiscar_learn", "embrace")],
    )
    .expect("valid answers");
    let engine = ScoringEngine::new(ScoringConfig {
        yes_threshold: 95,
        maybe_threshold: 90,
    });

    let breakdown = engine.score(&catalog, &answers);
    let report = AssessmentReport::new(&breakdown, assessed_on());

    assert_eq!(breakdown.overall, 92);
    assert_eq!(breakdown.recommendation, Recommendation::Maybe);
    assert_eq!(report.recommendation.title, "Good Potential with Development");
    assert_eq!(report.confidence, ConfidenceLevel::High);

    let boundary = |overall| AssessmentReport::new(&breakdown_with(overall), assessed_on());
    assert_eq!(boundary(79).confidence, ConfidenceLevel::Moderate);
    assert_eq!(boundary(60).confidence, ConfidenceLevel::Moderate);
    assert_eq!(boundary(59).confidence, ConfidenceLevel::Developing);
}

fn breakdown_with(overall: u8) -> ScoreBreakdown {
    ScoreBreakdown {
        recommendation: Recommendation::Yes,
        ..breakdown(overall, overall, overall, overall)
    }
}

#[test]
fn role_bands_use_their_own_score_basis() {
    let report = AssessmentReport::new(&breakdown(65, 55, 59, 60), assessed_on());

    let level = |role: &str| report.role_match(role).map(|entry| entry.level);
    assert_eq!(level("Team Leader"), Some(MatchLevel::Good));
    assert_eq!(level("Leadership Coach"), Some(MatchLevel::Good));
    assert_eq!(level("HR Business Partner"), Some(MatchLevel::Developing));
    assert_eq!(level("Project Manager"), Some(MatchLevel::Good));
    assert_eq!(level("Organizational Consultant"), Some(MatchLevel::Developing));
    assert_eq!(report.confidence, ConfidenceLevel::Moderate);
    assert_eq!(report.recommendation.title, "Good Potential with Development");
}

#[test]
fn weak_profile_lists_growth_opportunities() {
    let report = AssessmentReport::new(&breakdown(40, 50, 45, 45), assessed_on());

    assert_eq!(report.recommendation.title, "Consider Alternative Paths");
    assert!(report.strengths.is_empty());
    assert_eq!(report.growth_opportunities.len(), 4);
    assert_eq!(
        report.learning_path,
        vec![
            "Self-Leadership Development",
            "Basic Management Principles",
            "Interpersonal Skills Training",
        ]
    );
}

#[test]
fn categories_follow_display_order() {
    let catalog = QuestionCatalog::standard();
    let answers = AnswerSet::from_pairs(
        &catalog,
        [("aptitude_1", "4"), ("aptitude_2", "sustainability")],
    )
    .expect("valid answers");
    let scored = ScoringEngine::default().score(&catalog, &answers);

    let report = AssessmentReport::new(&scored, assessed_on());

    let order: Vec<Category> = report.categories.iter().map(|entry| entry.category).collect();
    assert_eq!(order, Category::ordered().to_vec());
    assert_eq!(report.categories[1].score, 90);
    assert_eq!(report.categories[1].label, "Technical Readiness");

    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["assessed_on"], "2025-10-06");
    assert_eq!(json["breakdown"]["recommendation"], "no");
    assert_eq!(json["role_matches"][3]["level"], "excellent");
}

#[test]
fn intro_lists_careers_and_traits() {
    let intro = AssessmentIntro::standard();

    assert_eq!(intro.typical_careers.len(), 5);
    assert_eq!(intro.success_traits.len(), 5);
    assert!(intro.title.contains("Team Leadership Coaching"));
    assert_eq!(intro.estimated_duration, "20-30 minutes");
}
