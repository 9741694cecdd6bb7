use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use interview_insights::analysis::{
    AnalysisEngine, AnalysisPayload, AnalysisReport, ConversationAnalysisView, ConversationInput,
    TrainingInput, TrainingSection,
};
use interview_insights::error::AppError;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

pub(crate) fn analysis_router(engine: Arc<AnalysisEngine>) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/analysis/report", post(report_endpoint))
        .route("/api/v1/analysis/conversation", post(conversation_endpoint))
        .route("/api/v1/analysis/training", post(training_endpoint))
        .layer(Extension(engine))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

// Bodies are parsed here rather than through `Json` so malformed payloads
// share the crate's error envelope.
pub(crate) async fn report_endpoint(
    Extension(engine): Extension<Arc<AnalysisEngine>>,
    body: String,
) -> Result<Json<AnalysisReport>, AppError> {
    let payload = AnalysisPayload::from_json(&body)?;
    debug!(
        items = payload.conversation.qa_analysis.len(),
        recommendations = payload.training.training_recommendations.len(),
        "assembling analysis report"
    );
    Ok(Json(engine.report(&payload)))
}

pub(crate) async fn conversation_endpoint(
    Extension(engine): Extension<Arc<AnalysisEngine>>,
    body: String,
) -> Result<Json<ConversationAnalysisView>, AppError> {
    let input = ConversationInput::from_json(&body)?;
    Ok(Json(engine.conversation(&input.qa_analysis, &input.insights)))
}

pub(crate) async fn training_endpoint(
    Extension(engine): Extension<Arc<AnalysisEngine>>,
    body: String,
) -> Result<Json<TrainingSection>, AppError> {
    let input = TrainingInput::from_json(&body)?;
    Ok(Json(engine.training(&input)))
}
