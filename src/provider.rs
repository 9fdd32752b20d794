//! Interchangeable response backends behind one capability.
//!
//! `ScriptedTutor` answers from the canned selector; `HostedTutor` forwards
//! the conversation to an external completion provider. The request handler
//! only sees the trait, so the strategies swap without touching the boundary.

use std::time::Duration;

use async_trait::async_trait;
use tracing::instrument;

use crate::config::Prompts;
use crate::domain::ChatMessage;
use crate::openai::OpenAI;
use crate::tutor::{select_response, TutorReply};

#[async_trait]
pub trait ResponseProvider: Send + Sync {
    /// Produce one assistant reply for the full conversation so far.
    /// The history is guaranteed non-empty by the request boundary.
    async fn respond(&self, history: &[ChatMessage]) -> Result<TutorReply, String>;

    /// Short name for startup and per-request logs.
    fn name(&self) -> &'static str;
}

/// Canned-script strategy: pure selection plus a cosmetic reply delay.
pub struct ScriptedTutor {
    reply_delay: Duration,
}

impl ScriptedTutor {
    pub fn new(reply_delay_ms: u64) -> Self {
        Self { reply_delay: Duration::from_millis(reply_delay_ms) }
    }
}

#[async_trait]
impl ResponseProvider for ScriptedTutor {
    #[instrument(level = "debug", skip(self, history), fields(turns = history.len()))]
    async fn respond(&self, history: &[ChatMessage]) -> Result<TutorReply, String> {
        let last = history.last().ok_or_else(|| "empty message history".to_string())?;
        if !self.reply_delay.is_zero() {
            tokio::time::sleep(self.reply_delay).await;
        }
        Ok(select_response(&last.content, history.len()))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// Hosted-completion strategy: fixed system instruction, fixed sampling
/// constants, no selector metadata in the reply.
pub struct HostedTutor {
    openai: OpenAI,
    system: String,
}

impl HostedTutor {
    pub fn new(openai: OpenAI, prompts: &Prompts) -> Self {
        Self { openai, system: prompts.tutor_system.clone() }
    }
}

#[async_trait]
impl ResponseProvider for HostedTutor {
    #[instrument(level = "debug", skip(self, history), fields(turns = history.len()))]
    async fn respond(&self, history: &[ChatMessage]) -> Result<TutorReply, String> {
        if history.is_empty() {
            return Err("empty message history".into());
        }
        let message = self.openai.tutor_reply(&self.system, history).await?;
        Ok(TutorReply { message, metadata: None })
    }

    fn name(&self) -> &'static str {
        "hosted"
    }
}
