//! Loading tutor configuration (prompts, reply delay, optional extra quiz
//! bank) from TOML.

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::{Difficulty, QuizQuestion, Topic};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct TutorConfig {
    #[serde(default)]
    pub prompts: Prompts,
    #[serde(default)]
    pub quiz: Vec<QuizCfg>,
}

/// Quiz entry accepted in TOML configuration. Entries with out-of-range
/// answers or too few options are skipped at load time.
#[derive(Clone, Debug, Deserialize)]
pub struct QuizCfg {
    #[serde(default)]
    pub id: Option<String>,
    pub topic: Topic,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl QuizCfg {
    pub fn into_question(self) -> Option<QuizQuestion> {
        if self.options.len() < 2 || self.correct_answer >= self.options.len() {
            return None;
        }
        Some(QuizQuestion {
            id: self.id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            topic: self.topic,
            question: self.question,
            options: self.options,
            correct_answer: self.correct_answer,
            difficulty: self.difficulty,
            explanation: self.explanation.unwrap_or_default(),
        })
    }
}

/// Prompt/behavior knobs. The default system instruction is what the hosted
/// provider sends; override it in TOML to tune tone.
#[derive(Clone, Debug, Deserialize)]
pub struct Prompts {
    pub tutor_system: String,
    /// Cosmetic delay before the canned-script reply, in milliseconds.
    pub reply_delay_ms: u64,
}

impl Default for Prompts {
    fn default() -> Self {
        Self {
            tutor_system: "You are EduBuddy, a friendly and encouraging AI tutor. \
Adapt your explanations to the student's level, teach step by step, and end \
each reply with one short comprehension-check question. Keep answers focused \
on the student's subject."
                .into(),
            reply_delay_ms: 1200,
        }
    }
}

/// Attempt to load `TutorConfig` from TUTOR_CONFIG_PATH. On any parsing/IO
/// error, returns None and the caller falls back to defaults.
pub fn load_tutor_config_from_env() -> Option<TutorConfig> {
    let path = std::env::var("TUTOR_CONFIG_PATH").ok()?;
    match std::fs::read_to_string(&path) {
        Ok(s) => match toml::from_str::<TutorConfig>(&s) {
            Ok(cfg) => {
                info!(target: "edubuddy_backend", %path, "Loaded tutor config (TOML)");
                Some(cfg)
            }
            Err(e) => {
                error!(target: "edubuddy_backend", %path, error = %e, "Failed to parse TOML config");
                None
            }
        },
        Err(e) => {
            error!(target: "edubuddy_backend", %path, error = %e, "Failed to read TOML config file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_cfg_rejects_out_of_range_answer() {
        let cfg = QuizCfg {
            id: None,
            topic: Topic::Math,
            question: "q".into(),
            options: vec!["a".into(), "b".into()],
            correct_answer: 2,
            difficulty: Difficulty::Easy,
            explanation: None,
        };
        assert!(cfg.into_question().is_none());
    }

    #[test]
    fn quiz_toml_round_trips() {
        let cfg: TutorConfig = toml::from_str(
            r#"
            [prompts]
            tutor_system = "be brief"
            reply_delay_ms = 0

            [[quiz]]
            topic = "math"
            question = "1 + 1?"
            options = ["1", "2"]
            correct_answer = 1
            difficulty = "easy"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.prompts.reply_delay_ms, 0);
        let q = cfg.quiz.into_iter().next().unwrap().into_question().unwrap();
        assert_eq!(q.topic, Topic::Math);
        assert_eq!(q.correct_answer, 1);
    }
}
