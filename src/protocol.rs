//! Public request/response structs for the HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{
    ChatMessage, LearningGoal, LearningStyle, QuizQuestion, SkillMetric, StyleQuestion, Topic,
    UserProfile,
};
use crate::tutor::ReplyMetadata;

//
// Chat
//

#[derive(Debug, Deserialize)]
pub struct ChatIn {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatOut {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ReplyMetadata>,
}

/// The single generic failure payload; both malformed input and upstream
/// failures collapse into this.
#[derive(Debug, Serialize)]
pub struct ErrorOut {
    pub error: String,
}

pub fn generic_error() -> ErrorOut {
    ErrorOut { error: "Something went wrong. Please try again.".into() }
}

//
// Quiz
//

#[derive(Debug, Deserialize)]
pub struct QuizQuery {
    pub topic: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuizOut {
    pub topic: Topic,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct QuizResultIn {
    pub topic: Option<String>,
    pub difficulty: Option<String>,
    /// Selected option index per question, in served order.
    pub answers: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub struct QuizResultOut {
    pub topic: Topic,
    pub score: u32,
    #[serde(rename = "questionsCorrect")]
    pub questions_correct: u32,
    #[serde(rename = "totalQuestions")]
    pub total_questions: u32,
    pub feedback: String,
}

//
// Learning style
//

#[derive(Debug, Serialize)]
pub struct StyleQuestionsOut {
    pub questions: Vec<StyleQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct StyleAnswersIn {
    /// Selected answer index per question, in questionnaire order.
    pub answers: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub struct StyleResultOut {
    pub style: LearningStyle,
    pub description: String,
    pub tips: Vec<String>,
    pub scores: StyleScores,
}

#[derive(Debug, Default, Serialize)]
pub struct StyleScores {
    pub visual: u32,
    pub auditory: u32,
    pub reading: u32,
    pub kinesthetic: u32,
}

//
// Progress / profile
//

#[derive(Debug, Serialize)]
pub struct ProgressOut {
    pub profile: UserProfile,
    pub skills: Vec<SkillMetric>,
    pub goals: Vec<LearningGoal>,
    #[serde(rename = "weeklyActivity")]
    pub weekly_activity: Vec<DayActivity>,
}

#[derive(Debug, Serialize)]
pub struct DayActivity {
    pub day: &'static str,
    pub hours: f32,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
