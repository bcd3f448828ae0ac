use coach_readiness::assessment::{
    AssessmentFlow, Category, FlowAction, FlowError, FlowEvent, FlowState, QuestionCatalog,
    Recommendation,
};

fn answer_all(flow: &mut AssessmentFlow, pick: impl Fn(usize) -> usize) -> FlowEvent {
    flow.start().expect("start from intro");
    let total = flow.catalog().len();
    let mut last = None;

    for position in 0..total {
        let question = flow.current_question().expect("question visible").clone();
        let option = &question.options[pick(position).min(question.options.len() - 1)];
        flow.select(question.id, option.value).expect("valid option");
        last = Some(flow.advance().expect("answered question advances"));
    }

    last.expect("catalog is not empty")
}

#[test]
fn full_walkthrough_hands_answers_to_scoring() {
    let mut flow = AssessmentFlow::standard();

    let event = answer_all(&mut flow, |_| 0);

    let breakdown = match event {
        FlowEvent::Completed(breakdown) => breakdown,
        other => panic!("expected completion, got {other:?}"),
    };
    // interest 20/20, personality avoid/overwhelmed 65/65
    assert_eq!(breakdown.psychometric, 43);
    // aptitude 3/growth 60/60, knowledge directing/tasks 55/55
    assert_eq!(breakdown.technical, 58);
    // will/skill 20/20, quick 65, defensive 40
    assert_eq!(breakdown.wiscar, 36);
    assert_eq!(breakdown.overall, 46);
    assert_eq!(breakdown.recommendation, Recommendation::No);
    assert_eq!(flow.results(), Some(breakdown));
    assert_eq!(flow.answers().len(), flow.catalog().len());
}

#[test]
fn overall_is_rounded_mean_of_categories() {
    let mut flow = AssessmentFlow::standard();
    answer_all(&mut flow, |position| position % 4);

    let breakdown = flow.results().expect("results available");
    let sum = u32::from(breakdown.psychometric)
        + u32::from(breakdown.technical)
        + u32::from(breakdown.wiscar);
    let expected = (f64::from(sum) / 3.0).round() as u8;

    assert_eq!(breakdown.overall, expected);
    for category in Category::ordered() {
        assert!(breakdown.category(category) <= 100);
    }
}

#[test]
fn restart_is_idempotent_regardless_of_history() {
    for pick in [0usize, 1, 2, 3] {
        let mut flow = AssessmentFlow::standard();
        answer_all(&mut flow, |_| pick);
        assert_eq!(flow.state(), FlowState::Results);

        flow.apply(FlowAction::Restart).expect("restart from results");
        assert_eq!(flow.state(), FlowState::Intro);
        assert!(flow.answers().is_empty());

        let again = flow.apply(FlowAction::Restart);
        assert!(matches!(again, Err(FlowError::NotPermitted { .. })));
        assert_eq!(flow.state(), FlowState::Intro);
        assert!(flow.answers().is_empty());
    }
}

#[test]
fn returning_to_intro_discards_answers_and_restarts_at_first_question() {
    let mut flow = AssessmentFlow::standard();
    flow.start().expect("start");
    flow.select("interest_1", "3").expect("answer");
    flow.advance().expect("advance");
    flow.select("interest_2", "4").expect("answer");

    flow.retreat().expect("back to first question");
    flow.retreat().expect("back to intro");
    assert_eq!(flow.state(), FlowState::Intro);
    assert!(flow.answers().is_empty());

    flow.start().expect("start again");
    assert_eq!(flow.index(), 0);
    assert!(flow.answers().is_empty());
    assert!(!flow.can_advance());
    assert!(flow.advance().is_err());
}

#[test]
fn presentation_actions_drive_the_flow_from_json() {
    let mut flow = AssessmentFlow::new(QuestionCatalog::standard());
    let script = r#"[
        { "action": "start" },
        { "action": "advance" },
        { "action": "select", "question_id": "interest_1", "value": "5" },
        { "action": "advance" },
        { "action": "retreat" }
    ]"#;
    let actions: Vec<FlowAction> = serde_json::from_str(script).expect("valid script");

    let outcomes: Vec<bool> = actions
        .into_iter()
        .map(|action| flow.apply(action).is_ok())
        .collect();

    assert_eq!(outcomes, vec![true, false, true, true, true]);
    assert_eq!(flow.state(), FlowState::Questions);
    assert_eq!(flow.index(), 0);
    assert_eq!(flow.view().selected, Some("5"));
}
