//! HTTP endpoint handlers. Thin wrappers that forward to core logic.
//! Each handler is instrumented and logs parameters and basic result info.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::{error, info, instrument, warn};

use crate::logic::*;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse {
    Json(HealthOut { ok: true })
}

/// The single tutoring route. Malformed bodies and provider failures both
/// collapse into one generic 500 payload; nothing else is surfaced.
#[instrument(level = "info", skip(state, body))]
pub async fn http_post_chat(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ChatIn>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => {
            warn!(target: "tutor", error = %e, "Rejecting malformed chat request");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(generic_error())).into_response();
        }
    };

    match handle_chat(&state, &body.messages).await {
        Ok(out) => {
            info!(target: "tutor", turns = body.messages.len(), reply_len = out.message.len(), "Chat turn served");
            (StatusCode::OK, Json(out)).into_response()
        }
        Err(e) => {
            error!(target: "tutor", error = %e, "Chat turn failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(generic_error())).into_response()
        }
    }
}

#[instrument(level = "info", skip(state), fields(topic = q.topic.as_deref().unwrap_or("-"), difficulty = q.difficulty.as_deref().unwrap_or("-")))]
pub async fn http_get_quiz(
    State(state): State<Arc<AppState>>,
    Query(q): Query<QuizQuery>,
) -> impl IntoResponse {
    let (topic, questions) = select_quiz(&state, q.topic.as_deref(), q.difficulty.as_deref());
    info!(target: "tutor", topic = topic.as_str(), served = questions.len(), "Quiz served");
    Json(QuizOut { topic, questions })
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_post_quiz_result(
    State(state): State<Arc<AppState>>,
    Json(body): Json<QuizResultIn>,
) -> impl IntoResponse {
    Json(grade_quiz(&state, &body).await)
}

#[instrument(level = "info")]
pub async fn http_get_style_questions() -> impl IntoResponse {
    Json(StyleQuestionsOut { questions: crate::content::style_questions() })
}

#[instrument(level = "info", skip(state, body), fields(answers = body.answers.len()))]
pub async fn http_post_style_result(
    State(state): State<Arc<AppState>>,
    Json(body): Json<StyleAnswersIn>,
) -> impl IntoResponse {
    Json(score_learning_style(&state, &body.answers).await)
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_profile(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let profile: crate::domain::UserProfile = state.store.read(crate::store::KEY_PROFILE).await;
    Json(profile)
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_progress(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(progress_overview(&state).await)
}
