use super::super::domain::Category;
use super::super::scoring::{Recommendation, ScoreBreakdown};
use super::views::{ConfidenceLevel, MatchLevel, RecommendationView, RoleMatchEntry};

#[derive(Debug, Clone, Copy)]
enum ScoreBasis {
    Overall,
    Category(Category),
}

#[derive(Debug, Clone, Copy)]
struct RoleBand {
    role: &'static str,
    basis: ScoreBasis,
    excellent: u8,
    good: u8,
}

const ROLE_BANDS: [RoleBand; 5] = [
    RoleBand {
        role: "Team Leader",
        basis: ScoreBasis::Overall,
        excellent: 75,
        good: 60,
    },
    RoleBand {
        role: "Leadership Coach",
        basis: ScoreBasis::Category(Category::Psychometric),
        excellent: 80,
        good: 65,
    },
    RoleBand {
        role: "HR Business Partner",
        basis: ScoreBasis::Category(Category::Wiscar),
        excellent: 75,
        good: 60,
    },
    RoleBand {
        role: "Project Manager",
        basis: ScoreBasis::Category(Category::Technical),
        excellent: 70,
        good: 55,
    },
    RoleBand {
        role: "Organizational Consultant",
        basis: ScoreBasis::Overall,
        excellent: 80,
        good: 65,
    },
];

pub(crate) fn recommendation_view(recommendation: Recommendation) -> RecommendationView {
    let (title, description) = match recommendation {
        Recommendation::Yes => (
            "Excellent Fit for Team Leadership Coaching",
            "Your assessment results indicate strong potential for success in team leadership coaching roles.",
        ),
        Recommendation::Maybe => (
            "Good Potential with Development",
            "You show promising qualities for team leadership coaching with targeted skill development.",
        ),
        Recommendation::No => (
            "Consider Alternative Paths",
            "Your current profile suggests exploring other leadership or coaching specializations first.",
        ),
    };

    RecommendationView {
        recommendation,
        title,
        description,
    }
}

const HIGH_CONFIDENCE: u8 = 80;
const MODERATE_CONFIDENCE: u8 = 60;

/// Fixed bands on the overall score; unaffected by the configured recommendation thresholds.
pub(crate) fn confidence_level(overall: u8) -> ConfidenceLevel {
    if overall >= HIGH_CONFIDENCE {
        ConfidenceLevel::High
    } else if overall >= MODERATE_CONFIDENCE {
        ConfidenceLevel::Moderate
    } else {
        ConfidenceLevel::Developing
    }
}

pub(crate) fn role_matches(breakdown: &ScoreBreakdown) -> Vec<RoleMatchEntry> {
    ROLE_BANDS
        .iter()
        .map(|band| {
            let score = match band.basis {
                ScoreBasis::Overall => breakdown.overall,
                ScoreBasis::Category(category) => breakdown.category(category),
            };
            let level = if score >= band.excellent {
                MatchLevel::Excellent
            } else if score >= band.good {
                MatchLevel::Good
            } else {
                MatchLevel::Developing
            };

            RoleMatchEntry {
                role: band.role,
                level,
                level_label: level.label(),
            }
        })
        .collect()
}

pub(crate) fn learning_path(recommendation: Recommendation) -> Vec<&'static str> {
    match recommendation {
        Recommendation::Yes => vec![
            "Advanced Leadership Techniques",
            "Coaching Certification Programs",
            "Executive Coaching Skills",
        ],
        Recommendation::Maybe => vec![
            "Foundational Leadership Skills",
            "Communication & Conflict Resolution",
            "Team Dynamics Fundamentals",
        ],
        Recommendation::No => vec![
            "Self-Leadership Development",
            "Basic Management Principles",
            "Interpersonal Skills Training",
        ],
    }
}

pub(crate) fn strengths(breakdown: &ScoreBreakdown) -> Vec<&'static str> {
    let mut strengths = Vec::new();
    if breakdown.psychometric >= 75 {
        strengths.push("Strong interpersonal and motivational qualities");
    }
    if breakdown.technical >= 70 {
        strengths.push("Solid foundational knowledge of leadership principles");
    }
    if breakdown.wiscar >= 75 {
        strengths.push("High learning potential and adaptability");
    }
    if breakdown.overall >= 60 {
        strengths.push("Good problem-solving and analytical skills");
    }
    strengths
}

pub(crate) fn growth_opportunities(breakdown: &ScoreBreakdown) -> Vec<&'static str> {
    let mut opportunities = Vec::new();
    if breakdown.psychometric < 70 {
        opportunities.push("Develop emotional intelligence and empathy skills");
    }
    if breakdown.technical < 65 {
        opportunities.push("Strengthen knowledge of leadership frameworks");
    }
    if breakdown.wiscar < 70 {
        opportunities.push("Focus on communication and conflict resolution");
    }
    opportunities.push("Practice facilitating team discussions and meetings");
    opportunities
}
