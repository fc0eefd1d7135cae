use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::warn;

use crate::api::AppState;
use crate::api::models::{ScoreRequest, ScoreResponse};
use crate::errors::PlagError;

pub async fn score_texts(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResponse>, PlagError> {
    let Json(req) = payload.map_err(|e| PlagError::InvalidRequest(e.body_text()))?;
    let scorer = *state.comparer.scorer();

    let breakdown =
        tokio::task::spawn_blocking(move || scorer.breakdown(&req.reference, &req.candidate))
            .await
            .map_err(|e| PlagError::Internal(format!("Scoring task failed: {}", e)))?;

    if breakdown.approximate {
        warn!(score = breakdown.score, "Diff deadline expired, score may be under-counted");
    }

    Ok(Json(ScoreResponse {
        plagiarism: breakdown.score,
        equal_chars: breakdown.equal_chars,
        total_chars: breakdown.total_chars,
        identical: breakdown.identical,
        approximate: breakdown.approximate,
    }))
}
