use serde::Serialize;

/// Static content shown before the first question.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentIntro {
    pub title: &'static str,
    pub summary: &'static str,
    pub purpose: Vec<&'static str>,
    pub discipline: &'static str,
    pub typical_careers: Vec<&'static str>,
    pub success_traits: Vec<&'static str>,
    pub estimated_duration: &'static str,
}

impl AssessmentIntro {
    pub fn standard() -> Self {
        Self {
            title: "Comprehensive Readiness & Fit Assessment for Team Leadership Coaching",
            summary: "Our comprehensive assessment combines psychometric evaluation, technical aptitude, and the WISCAR framework to provide personalized insights and career guidance.",
            purpose: vec![
                "Evaluate your suitability and readiness for Team Leadership Coaching",
                "Identify gaps and personalized growth paths",
            ],
            discipline: "Facilitating, mentoring, and guiding teams towards effective collaboration and achievement of goals through organizational development, people management, conflict resolution, motivation, and performance optimization.",
            typical_careers: vec![
                "Team Leader",
                "Leadership Coach",
                "HR Business Partner",
                "Organizational Development Consultant",
                "Project Manager",
            ],
            success_traits: vec![
                "Empathy & Emotional Intelligence",
                "Communication & Conflict Resolution",
                "Strategic Thinking & Problem Solving",
                "Patience & Adaptability",
                "Motivation & Influencing Skills",
            ],
            estimated_duration: "20-30 minutes",
        }
    }
}
