//! Static career-discovery quiz configuration.
//!
//! Roles are referenced by [`RoleKey`], a stable enumerated identifier whose
//! serialized form doubles as the `roles.slug` column value. Display titles
//! can change freely without breaking scoring or database resolution.

use serde::{Deserialize, Serialize};

/// Stable identifier for a role the quiz can recommend. Declaration order is
/// the documented tie-break order for equal scores.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RoleKey {
    MobileDeveloper,
    IosDeveloper,
    AndroidDeveloper,
    UiUxDesigner,
    ProductDesigner,
    FrontendDeveloper,
    FullStackDeveloper,
    WebDeveloper,
    DataAnalyst,
    DataScientist,
    BusinessIntelligenceAnalyst,
    BackendDeveloper,
    DevopsEngineer,
    SystemAdministrator,
    CybersecuritySpecialist,
    PenetrationTester,
    SecurityAnalyst,
    QaEngineer,
    TestAutomationEngineer,
    QaAnalyst,
    MachineLearningEngineer,
    AiSpecialist,
    ProductManager,
}

impl RoleKey {
    /// Matches the serde snake_case form; also the `roles.slug` value.
    pub fn slug(&self) -> &'static str {
        match self {
            RoleKey::MobileDeveloper => "mobile_developer",
            RoleKey::IosDeveloper => "ios_developer",
            RoleKey::AndroidDeveloper => "android_developer",
            RoleKey::UiUxDesigner => "ui_ux_designer",
            RoleKey::ProductDesigner => "product_designer",
            RoleKey::FrontendDeveloper => "frontend_developer",
            RoleKey::FullStackDeveloper => "full_stack_developer",
            RoleKey::WebDeveloper => "web_developer",
            RoleKey::DataAnalyst => "data_analyst",
            RoleKey::DataScientist => "data_scientist",
            RoleKey::BusinessIntelligenceAnalyst => "business_intelligence_analyst",
            RoleKey::BackendDeveloper => "backend_developer",
            RoleKey::DevopsEngineer => "devops_engineer",
            RoleKey::SystemAdministrator => "system_administrator",
            RoleKey::CybersecuritySpecialist => "cybersecurity_specialist",
            RoleKey::PenetrationTester => "penetration_tester",
            RoleKey::SecurityAnalyst => "security_analyst",
            RoleKey::QaEngineer => "qa_engineer",
            RoleKey::TestAutomationEngineer => "test_automation_engineer",
            RoleKey::QaAnalyst => "qa_analyst",
            RoleKey::MachineLearningEngineer => "machine_learning_engineer",
            RoleKey::AiSpecialist => "ai_specialist",
            RoleKey::ProductManager => "product_manager",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RoleKey::MobileDeveloper => "Mobile Developer",
            RoleKey::IosDeveloper => "iOS Developer",
            RoleKey::AndroidDeveloper => "Android Developer",
            RoleKey::UiUxDesigner => "UI/UX Designer",
            RoleKey::ProductDesigner => "Product Designer",
            RoleKey::FrontendDeveloper => "Frontend Developer",
            RoleKey::FullStackDeveloper => "Full Stack Developer",
            RoleKey::WebDeveloper => "Web Developer",
            RoleKey::DataAnalyst => "Data Analyst",
            RoleKey::DataScientist => "Data Scientist",
            RoleKey::BusinessIntelligenceAnalyst => "Business Intelligence Analyst",
            RoleKey::BackendDeveloper => "Backend Developer",
            RoleKey::DevopsEngineer => "DevOps Engineer",
            RoleKey::SystemAdministrator => "System Administrator",
            RoleKey::CybersecuritySpecialist => "Cybersecurity Specialist",
            RoleKey::PenetrationTester => "Penetration Tester",
            RoleKey::SecurityAnalyst => "Security Analyst",
            RoleKey::QaEngineer => "QA Engineer",
            RoleKey::TestAutomationEngineer => "Test Automation Engineer",
            RoleKey::QaAnalyst => "QA Analyst",
            RoleKey::MachineLearningEngineer => "Machine Learning Engineer",
            RoleKey::AiSpecialist => "AI Specialist",
            RoleKey::ProductManager => "Product Manager",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizOption {
    pub value: &'static str,
    pub label: &'static str,
    /// Roles receiving the question's full weight (primary_interest only).
    pub related_roles: &'static [RoleKey],
    /// Roles receiving half the question's weight.
    pub boosts: &'static [RoleKey],
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub step: u32,
    pub question: &'static str,
    pub options: &'static [QuizOption],
}

const fn option(
    value: &'static str,
    label: &'static str,
    related_roles: &'static [RoleKey],
    boosts: &'static [RoleKey],
) -> QuizOption {
    QuizOption {
        value,
        label,
        related_roles,
        boosts,
    }
}

pub const QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        id: "knowledge_check",
        step: 0,
        question: "How would you describe your IT knowledge?",
        options: &[
            option("complete_beginner", "Complete Beginner - I know nothing about IT", &[], &[]),
            option("some_knowledge", "Some Knowledge - I know a bit about IT", &[], &[]),
            option("experienced", "Experienced - I have IT skills", &[], &[]),
        ],
    },
    QuizQuestion {
        id: "primary_interest",
        step: 1,
        question: "What interests you most in the tech world?",
        options: &[
            option(
                "create_mobile_apps",
                "Create apps for mobile phones (iOS, Android)",
                &[RoleKey::MobileDeveloper, RoleKey::IosDeveloper, RoleKey::AndroidDeveloper],
                &[],
            ),
            option(
                "design_interfaces",
                "Design beautiful and user-friendly interfaces",
                &[RoleKey::UiUxDesigner, RoleKey::ProductDesigner, RoleKey::FrontendDeveloper],
                &[],
            ),
            option(
                "build_websites",
                "Build websites and web applications",
                &[RoleKey::FrontendDeveloper, RoleKey::FullStackDeveloper, RoleKey::WebDeveloper],
                &[],
            ),
            option(
                "work_with_data",
                "Analyze data and find patterns",
                &[RoleKey::DataAnalyst, RoleKey::DataScientist, RoleKey::BusinessIntelligenceAnalyst],
                &[],
            ),
            option(
                "backend_systems",
                "Build server-side systems and APIs",
                &[RoleKey::BackendDeveloper, RoleKey::DevopsEngineer, RoleKey::SystemAdministrator],
                &[],
            ),
            option(
                "secure_systems",
                "Protect systems and ensure cybersecurity",
                &[RoleKey::CybersecuritySpecialist, RoleKey::PenetrationTester, RoleKey::SecurityAnalyst],
                &[],
            ),
            option(
                "test_quality",
                "Test software and ensure quality",
                &[RoleKey::QaEngineer, RoleKey::TestAutomationEngineer, RoleKey::QaAnalyst],
                &[],
            ),
            option(
                "ai_ml",
                "Work with Artificial Intelligence and Machine Learning",
                &[RoleKey::MachineLearningEngineer, RoleKey::AiSpecialist, RoleKey::DataScientist],
                &[],
            ),
        ],
    },
    QuizQuestion {
        id: "work_style",
        step: 2,
        question: "How do you prefer to work?",
        options: &[
            option(
                "alone",
                "Alone - I prefer independent work",
                &[],
                &[RoleKey::BackendDeveloper, RoleKey::DevopsEngineer, RoleKey::DataScientist],
            ),
            option(
                "team",
                "In a Team - I enjoy collaboration",
                &[],
                &[RoleKey::FrontendDeveloper, RoleKey::FullStackDeveloper, RoleKey::ProductManager],
            ),
            option("both", "Both - I can adapt to any environment", &[], &[]),
        ],
    },
    QuizQuestion {
        id: "problem_solving",
        step: 3,
        question: "What type of problem-solving do you enjoy?",
        options: &[
            option(
                "logical_structured",
                "Logical and structured (like math puzzles)",
                &[],
                &[RoleKey::BackendDeveloper, RoleKey::DataScientist, RoleKey::DevopsEngineer],
            ),
            option(
                "creative_visual",
                "Creative and visual (like design)",
                &[],
                &[RoleKey::UiUxDesigner, RoleKey::FrontendDeveloper, RoleKey::MobileDeveloper],
            ),
            option(
                "investigative",
                "Investigative and analytical (finding issues)",
                &[],
                &[RoleKey::QaEngineer, RoleKey::CybersecuritySpecialist, RoleKey::DataAnalyst],
            ),
        ],
    },
    QuizQuestion {
        id: "math_comfort",
        step: 4,
        question: "How comfortable are you with mathematics?",
        options: &[
            option(
                "love_math",
                "I love math and statistics",
                &[],
                &[RoleKey::DataScientist, RoleKey::MachineLearningEngineer, RoleKey::BackendDeveloper],
            ),
            option("okay_math", "Math is okay, I can handle it", &[], &[]),
            option(
                "avoid_math",
                "I prefer to avoid heavy math",
                &[],
                &[RoleKey::UiUxDesigner, RoleKey::FrontendDeveloper, RoleKey::QaEngineer],
            ),
        ],
    },
    QuizQuestion {
        id: "learning_style",
        step: 5,
        question: "How do you learn best?",
        options: &[
            option("hands_on", "Hands-on practice and building projects", &[], &[]),
            option("theory_first", "Understanding theory before practicing", &[], &[]),
            option("visual", "Watching videos and visual examples", &[], &[]),
            option("mixed", "Mix of all approaches", &[], &[]),
        ],
    },
    QuizQuestion {
        id: "work_environment",
        step: 6,
        question: "What work environment appeals to you?",
        options: &[
            option(
                "startup",
                "Fast-paced startup environment",
                &[],
                &[RoleKey::FullStackDeveloper, RoleKey::MobileDeveloper, RoleKey::DevopsEngineer],
            ),
            option(
                "corporate",
                "Stable corporate environment",
                &[],
                &[RoleKey::BackendDeveloper, RoleKey::DataAnalyst, RoleKey::QaEngineer],
            ),
            option(
                "freelance",
                "Freelance/Remote work",
                &[],
                &[RoleKey::FrontendDeveloper, RoleKey::UiUxDesigner, RoleKey::MobileDeveloper],
            ),
            option("any", "I'm open to any environment", &[], &[]),
        ],
    },
    QuizQuestion {
        id: "patience_detail",
        step: 7,
        question: "How would you describe yourself?",
        options: &[
            option(
                "patient_detail",
                "Patient and detail-oriented",
                &[],
                &[RoleKey::QaEngineer, RoleKey::BackendDeveloper, RoleKey::DataAnalyst],
            ),
            option(
                "fast_results",
                "Fast-paced, I like seeing quick results",
                &[],
                &[RoleKey::FrontendDeveloper, RoleKey::MobileDeveloper, RoleKey::UiUxDesigner],
            ),
            option(
                "balanced",
                "Balanced between both",
                &[],
                &[RoleKey::FullStackDeveloper, RoleKey::DevopsEngineer],
            ),
        ],
    },
];

/// Per-question scoring weight; primary interest dominates.
pub fn question_weight(question_id: &str) -> f64 {
    match question_id {
        "primary_interest" => 50.0,
        "problem_solving" => 20.0,
        "work_style" => 10.0,
        "math_comfort" => 10.0,
        "learning_style" => 5.0,
        "work_environment" => 3.0,
        "patience_detail" => 2.0,
        _ => 1.0,
    }
}

pub fn question_by_id(question_id: &str) -> Option<&'static QuizQuestion> {
    QUESTIONS.iter().find(|q| q.id == question_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_questions() {
        assert_eq!(QUESTIONS.len(), 8);
    }

    #[test]
    fn test_only_primary_interest_uses_related_roles() {
        for q in QUESTIONS {
            for opt in q.options {
                if q.id == "primary_interest" {
                    assert!(opt.boosts.is_empty());
                } else {
                    assert!(opt.related_roles.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_slug_matches_serde_form() {
        let json = serde_json::to_string(&RoleKey::UiUxDesigner).unwrap();
        assert_eq!(json, format!("\"{}\"", RoleKey::UiUxDesigner.slug()));
    }

    #[test]
    fn test_question_weights() {
        assert_eq!(question_weight("primary_interest"), 50.0);
        assert_eq!(question_weight("patience_detail"), 2.0);
        assert_eq!(question_weight("unknown_question"), 1.0);
    }

    #[test]
    fn test_question_lookup() {
        assert!(question_by_id("work_style").is_some());
        assert!(question_by_id("nope").is_none());
    }
}
