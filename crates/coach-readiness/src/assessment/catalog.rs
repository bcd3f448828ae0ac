use super::domain::{
    AnswerKind, AnswerOption, AssessmentError, Category, Question, ScoringRule, Subcategory,
};
use std::collections::HashSet;

/// Ordered, immutable set of questions presented by the assessment flow.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// The Team Leadership Coaching instrument.
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn new(questions: Vec<Question>) -> Result<Self, AssessmentError> {
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(AssessmentError::DuplicateQuestion(question.id.to_owned()));
            }
        }

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, question_id: &str) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.id == question_id)
    }

    pub fn position(&self, question_id: &str) -> Option<usize> {
        self.questions
            .iter()
            .position(|question| question.id == question_id)
    }

    pub fn question_at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions_for_category(&self, category: Category) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.category == category)
            .collect()
    }

    /// Resolves the question and checks that `value` is one of its declared options.
    pub fn validate(&self, question_id: &str, value: &str) -> Result<&Question, AssessmentError> {
        let question = self
            .get(question_id)
            .ok_or_else(|| AssessmentError::UnknownQuestion(question_id.to_owned()))?;

        if !question.accepts(value) {
            return Err(AssessmentError::InvalidOption {
                question_id: question_id.to_owned(),
                value: value.to_owned(),
            });
        }

        Ok(question)
    }

    pub fn accepts(&self, question_id: &str, value: &str) -> bool {
        self.validate(question_id, value).is_ok()
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn options(pairs: &[(&'static str, &'static str)]) -> Vec<AnswerOption> {
    pairs
        .iter()
        .map(|&(value, label)| AnswerOption { value, label })
        .collect()
}

fn standard_questions() -> Vec<Question> {
    vec![
        Question {
            id: "interest_1",
            category: Category::Psychometric,
            subcategory: Subcategory::InterestScale,
            prompt: "How interested are you in helping others develop their leadership skills?",
            kind: AnswerKind::Likert,
            options: options(&[
                ("1", "Not interested at all"),
                ("2", "Slightly interested"),
                ("3", "Moderately interested"),
                ("4", "Very interested"),
                ("5", "Extremely interested"),
            ]),
            rule: ScoringRule::Likert,
        },
        Question {
            id: "interest_2",
            category: Category::Psychometric,
            subcategory: Subcategory::InterestScale,
            prompt: "How much do you enjoy facilitating team discussions and meetings?",
            kind: AnswerKind::Likert,
            options: options(&[
                ("1", "Strongly dislike"),
                ("2", "Dislike"),
                ("3", "Neutral"),
                ("4", "Enjoy"),
                ("5", "Love it"),
            ]),
            rule: ScoringRule::Likert,
        },
        Question {
            id: "personality_1",
            category: Category::Psychometric,
            subcategory: Subcategory::PersonalityCompatibility,
            prompt: "When faced with team conflict, what is your natural tendency?",
            kind: AnswerKind::Single,
            options: options(&[
                ("avoid", "Avoid the conflict and hope it resolves itself"),
                ("direct", "Address it directly and immediately"),
                ("mediate", "Listen to all sides and help find common ground"),
                ("escalate", "Escalate to higher management"),
            ]),
            rule: PERSONALITY_RULE,
        },
        Question {
            id: "personality_2",
            category: Category::Psychometric,
            subcategory: Subcategory::PersonalityCompatibility,
            prompt: "How do you typically handle stress in leadership situations?",
            kind: AnswerKind::Single,
            options: options(&[
                ("overwhelmed", "I often feel overwhelmed and struggle to cope"),
                (
                    "compartmentalize",
                    "I compartmentalize and focus on one issue at a time",
                ),
                ("calm", "I remain calm and use stress as motivation"),
                ("delegate", "I delegate tasks to reduce my stress load"),
            ]),
            rule: PERSONALITY_RULE,
        },
        Question {
            id: "aptitude_1",
            category: Category::Technical,
            subcategory: Subcategory::GeneralAptitude,
            prompt: "A team of 8 people needs to complete a project in 12 days. If 2 people leave, how many additional days will the remaining team need?",
            kind: AnswerKind::Single,
            options: options(&[
                ("3", "3 additional days"),
                ("4", "4 additional days"),
                ("6", "6 additional days"),
                ("8", "8 additional days"),
            ]),
            rule: ScoringRule::CorrectAnswer {
                correct: "4",
                matched: 90,
                missed: 60,
            },
        },
        Question {
            id: "aptitude_2",
            category: Category::Technical,
            subcategory: Subcategory::GeneralAptitude,
            prompt: "What is the next pattern in this sequence: Team → Performance → Success → ?",
            kind: AnswerKind::Single,
            options: options(&[
                ("growth", "Growth"),
                ("reward", "Reward"),
                ("innovation", "Innovation"),
                ("sustainability", "Sustainability"),
            ]),
            rule: ScoringRule::CorrectAnswer {
                correct: "sustainability",
                matched: 90,
                missed: 60,
            },
        },
        Question {
            id: "knowledge_1",
            category: Category::Technical,
            subcategory: Subcategory::PrerequisiteKnowledge,
            prompt: "Which leadership style involves high relationship behavior and low task behavior?",
            kind: AnswerKind::Single,
            options: options(&[
                ("directing", "Directing"),
                ("coaching", "Coaching"),
                ("supporting", "Supporting"),
                ("delegating", "Delegating"),
            ]),
            rule: ScoringRule::CorrectAnswer {
                correct: "supporting",
                matched: 85,
                missed: 55,
            },
        },
        Question {
            id: "knowledge_2",
            category: Category::Technical,
            subcategory: Subcategory::PrerequisiteKnowledge,
            prompt: "What is the primary focus of transformational leadership?",
            kind: AnswerKind::Single,
            options: options(&[
                ("tasks", "Completing tasks efficiently"),
                ("rules", "Following rules and procedures"),
                ("vision", "Inspiring and motivating through vision"),
                ("control", "Maintaining control and order"),
            ]),
            rule: ScoringRule::CorrectAnswer {
                correct: "vision",
                matched: 85,
                missed: 55,
            },
        },
        Question {
            id: "wiscar_will",
            category: Category::Wiscar,
            subcategory: Subcategory::Will,
            prompt: "How persistent are you when facing leadership challenges?",
            kind: AnswerKind::Likert,
            options: options(&[
                ("1", "Give up easily"),
                ("2", "Sometimes give up"),
                ("3", "Moderately persistent"),
                ("4", "Very persistent"),
                ("5", "Never give up"),
            ]),
            rule: ScoringRule::Likert,
        },
        Question {
            id: "wiscar_skill",
            category: Category::Wiscar,
            subcategory: Subcategory::Skill,
            prompt: "How would you rate your current communication skills?",
            kind: AnswerKind::Likert,
            options: options(&[
                ("1", "Poor"),
                ("2", "Below average"),
                ("3", "Average"),
                ("4", "Above average"),
                ("5", "Excellent"),
            ]),
            rule: ScoringRule::Likert,
        },
        Question {
            id: "wiscar_cognitive",
            category: Category::Wiscar,
            subcategory: Subcategory::CognitiveReadiness,
            prompt: "When solving complex team problems, you prefer to:",
            kind: AnswerKind::Single,
            options: options(&[
                ("quick", "Make quick decisions based on intuition"),
                ("analyze", "Thoroughly analyze all available data"),
                ("collaborate", "Collaborate with team members for input"),
                ("research", "Research best practices and proven methods"),
            ]),
            rule: ScoringRule::PreferredChoice {
                preferred: &["collaborate", "research"],
                matched: 85,
                missed: 65,
            },
        },
        Question {
            id: "wiscar_learn",
            category: Category::Wiscar,
            subcategory: Subcategory::AbilityToLearn,
            prompt: "How do you typically respond to feedback about your leadership style?",
            kind: AnswerKind::Single,
            options: options(&[
                ("defensive", "I become defensive and justify my actions"),
                ("consider", "I consider it but don't always act on it"),
                ("embrace", "I embrace it and actively work to improve"),
                ("seek", "I actively seek out feedback to grow"),
            ]),
            rule: ScoringRule::Lookup {
                table: &[
                    ("defensive", 40),
                    ("consider", 65),
                    ("embrace", 85),
                    ("seek", 95),
                ],
                fallback: 60,
            },
        },
    ]
}

const PERSONALITY_RULE: ScoringRule = ScoringRule::PreferredChoice {
    preferred: &["mediate", "calm"],
    matched: 85,
    missed: 65,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_preserves_instrument_order() {
        let catalog = QuestionCatalog::standard();
        let ids: Vec<&str> = catalog.questions().iter().map(|q| q.id).collect();

        assert_eq!(
            ids,
            vec![
                "interest_1",
                "interest_2",
                "personality_1",
                "personality_2",
                "aptitude_1",
                "aptitude_2",
                "knowledge_1",
                "knowledge_2",
                "wiscar_will",
                "wiscar_skill",
                "wiscar_cognitive",
                "wiscar_learn",
            ]
        );
    }

    #[test]
    fn subcategory_tags_agree_with_categories() {
        let catalog = QuestionCatalog::standard();
        for question in catalog.questions() {
            assert_eq!(
                question.subcategory.category(),
                question.category,
                "{} is tagged inconsistently",
                question.id
            );
        }
    }

    #[test]
    fn likert_questions_offer_five_point_scale() {
        let catalog = QuestionCatalog::standard();
        for question in catalog
            .questions()
            .iter()
            .filter(|q| q.kind == AnswerKind::Likert)
        {
            let values: Vec<&str> = question.options.iter().map(|o| o.value).collect();
            assert_eq!(values, vec!["1", "2", "3", "4", "5"], "{}", question.id);
            assert_eq!(question.rule, ScoringRule::Likert);
        }
    }

    #[test]
    fn validate_rejects_unknown_ids_and_values() {
        let catalog = QuestionCatalog::standard();

        assert!(catalog.validate("wiscar_learn", "seek").is_ok());
        assert_eq!(
            catalog.validate("wiscar_mood", "seek").unwrap_err(),
            AssessmentError::UnknownQuestion("wiscar_mood".to_string())
        );
        assert_eq!(
            catalog.validate("interest_1", "6").unwrap_err(),
            AssessmentError::InvalidOption {
                question_id: "interest_1".to_string(),
                value: "6".to_string(),
            }
        );
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let mut questions = standard_questions();
        let first = questions[0].clone();
        questions.push(first);

        let err = QuestionCatalog::new(questions).expect_err("duplicate id rejected");
        assert_eq!(err, AssessmentError::DuplicateQuestion("interest_1".to_string()));
    }

    #[test]
    fn category_filter_returns_four_questions_each() {
        let catalog = QuestionCatalog::standard();
        for category in Category::ordered() {
            assert_eq!(catalog.questions_for_category(category).len(), 4);
        }
        assert_eq!(catalog.position("wiscar_will"), Some(8));
    }
}
