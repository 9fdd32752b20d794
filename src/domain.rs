//! Domain models used by the backend: topics, proficiency levels, chat
//! messages, quiz questions, and the client-profile structures.
//!
//! Persisted structs carry `#[serde(default)]` on every field so a blob
//! written by an older version (or a partially-filled one) still reads back;
//! missing keys become defaults instead of parse errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subject-matter category used to select canned content.
/// `General` is the explicit no-keyword-matched fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Photosynthesis,
    Math,
    Python,
    General,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Photosynthesis => "photosynthesis",
            Topic::Math => "math",
            Topic::Python => "python",
            Topic::General => "general",
        }
    }
}

/// Coarse beginner/intermediate/advanced bucket derived solely from turn count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

/// One chat turn as carried in the request body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Multiple-choice quiz question. `correct_answer` is an index into `options`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub topic: Topic,
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: usize,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Reading,
    Kinesthetic,
    Unknown,
}

impl Default for LearningStyle {
    fn default() -> Self {
        LearningStyle::Unknown
    }
}

impl LearningStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Auditory => "auditory",
            LearningStyle::Reading => "reading",
            LearningStyle::Kinesthetic => "kinesthetic",
            LearningStyle::Unknown => "unknown",
        }
    }
}

/// One question of the learning-style questionnaire. Each answer awards one
/// point to the style it is tagged with.
#[derive(Clone, Debug, Serialize)]
pub struct StyleQuestion {
    pub id: &'static str,
    pub question: &'static str,
    pub answers: Vec<StyleAnswer>,
}

#[derive(Clone, Debug, Serialize)]
pub struct StyleAnswer {
    pub text: &'static str,
    pub style: LearningStyle,
}

/// Per-topic learning counters (mastery 0-100, streaks, accuracy).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMetric {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub mastery_level: u8,
    #[serde(default)]
    pub questions_asked: u32,
    #[serde(default)]
    pub questions_correct: u32,
    #[serde(default)]
    pub last_practiced: Option<DateTime<Utc>>,
    #[serde(default)]
    pub streak_days: u32,
    #[serde(default)]
    pub time_spent_minutes: u32,
    #[serde(default)]
    pub validations_passed: u32,
    #[serde(default)]
    pub validations_failed: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Active,
    Completed,
    Abandoned,
}

impl Default for GoalStatus {
    fn default() -> Self {
        GoalStatus::Active
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningGoal {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub target_mastery: u8,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub status: GoalStatus,
}

/// The single-user profile blob.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default = "default_user_name")]
    pub name: String,
    #[serde(default)]
    pub joined_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_learning_minutes: u32,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default)]
    pub learning_style: LearningStyle,
    #[serde(default)]
    pub total_topics_learned: u32,
    #[serde(default)]
    pub average_mastery: u8,
}

fn default_user_name() -> String {
    "Student".into()
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: default_user_name(),
            joined_date: None,
            total_learning_minutes: 0,
            current_streak: 0,
            longest_streak: 0,
            learning_style: LearningStyle::Unknown,
            total_topics_learned: 0,
            average_mastery: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_profile_blob_fills_defaults() {
        let p: UserProfile = serde_json::from_str(r#"{"currentStreak": 4}"#).unwrap();
        assert_eq!(p.current_streak, 4);
        assert_eq!(p.name, "Student");
        assert_eq!(p.learning_style, LearningStyle::Unknown);
        assert_eq!(p.average_mastery, 0);
    }

    #[test]
    fn skill_blob_tolerates_missing_keys() {
        let s: SkillMetric = serde_json::from_str(r#"{"topic": "math"}"#).unwrap();
        assert_eq!(s.topic, "math");
        assert_eq!(s.mastery_level, 0);
        assert!(s.last_practiced.is_none());
    }
}
