//! Application state: the chosen response provider, quiz bank, prompts, and
//! the keyed blob store.
//!
//! Provider policy: if OPENAI_API_KEY is present the hosted completion
//! strategy answers every tutoring turn; otherwise the canned-script selector
//! does. Both sit behind the same `ResponseProvider` trait, so the request
//! boundary is identical either way.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::config::load_tutor_config_from_env;
use crate::content::quiz_bank;
use crate::domain::QuizQuestion;
use crate::openai::OpenAI;
use crate::provider::{HostedTutor, ResponseProvider, ScriptedTutor};
use crate::store::BlobStore;

pub struct AppState {
    pub provider: Arc<dyn ResponseProvider>,
    pub store: BlobStore,
    pub quiz_bank: Vec<QuizQuestion>,
}

impl AppState {
    /// Build state from env: load config, assemble the quiz bank, pick the
    /// provider, open the blob store.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let cfg = load_tutor_config_from_env();
        let prompts = cfg.as_ref().map(|c| c.prompts.clone()).unwrap_or_default();

        // Built-in bank first, then config entries; bad entries are skipped.
        let mut bank = quiz_bank();
        if let Some(cfg) = &cfg {
            for qc in cfg.quiz.clone() {
                let topic = qc.topic;
                match qc.into_question() {
                    Some(q) => bank.push(q),
                    None => {
                        error!(target: "tutor", topic = topic.as_str(), "Skipping bank item: bad options/answer index.");
                    }
                }
            }
        }

        // Startup inventory by topic/difficulty.
        let mut counts: HashMap<&'static str, usize> = HashMap::new();
        for q in &bank {
            *counts.entry(q.topic.as_str()).or_default() += 1;
        }
        for (topic, n) in counts {
            info!(target: "tutor", %topic, questions = n, "Startup quiz inventory");
        }

        let provider: Arc<dyn ResponseProvider> = match OpenAI::from_env() {
            Some(oa) => {
                info!(target: "edubuddy_backend", base_url = %oa.base_url, model = %oa.model, "OpenAI enabled; tutoring via hosted completions.");
                Arc::new(HostedTutor::new(oa, &prompts))
            }
            None => {
                info!(target: "edubuddy_backend", delay_ms = prompts.reply_delay_ms, "OpenAI disabled (no OPENAI_API_KEY). Tutoring via canned scripts.");
                Arc::new(ScriptedTutor::new(prompts.reply_delay_ms))
            }
        };

        Self { provider, store: BlobStore::open_from_env(), quiz_bank: bank }
    }

    /// Scripted provider with no delay and an in-memory store; env-independent.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            provider: Arc::new(ScriptedTutor::new(0)),
            store: BlobStore::in_memory(),
            quiz_bank: quiz_bank(),
        }
    }
}
