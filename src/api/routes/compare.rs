use std::path::Path;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use crate::api::AppState;
use crate::api::models::ComparisonRequest;
use crate::compare::ComparisonResult;
use crate::errors::PlagError;

pub async fn compare(
    State(state): State<AppState>,
    payload: Result<Json<ComparisonRequest>, JsonRejection>,
) -> Result<Json<Vec<ComparisonResult>>, PlagError> {
    let Json(req) = payload.map_err(|e| PlagError::InvalidRequest(e.body_text()))?;
    req.validate()?;

    let results = state
        .comparer
        .compare(Path::new(&req.file_path), Path::new(&req.folder_path))
        .await?;

    Ok(Json(results))
}
