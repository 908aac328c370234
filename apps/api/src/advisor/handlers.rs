//! Axum route handlers for the advisor API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::advisor::recommender::get_recommendation;
use crate::advisor::scanner::scan_profile;
use crate::errors::AppError;
use crate::models::profile::{Profile, Recommendation};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub profile: Profile,
    pub recommendation: Recommendation,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub profile: Profile,
    /// Fields the document gave no evidence for; the caller fills them in by hand.
    pub missing_fields: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommendations
///
/// One provider call per request. Identical profiles are not short-circuited.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let missing = profile.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "profile fields cannot be empty: {}",
            missing.join(", ")
        )));
    }

    let recommendation = get_recommendation(&profile, state.provider.as_ref()).await?;

    Ok(Json(RecommendationResponse {
        profile,
        recommendation,
    }))
}

/// POST /api/v1/profile/scan
///
/// Multipart upload with a `file` field. The part's content type is the
/// document's media type unless an explicit `mediaType` text field is sent.
pub async fn handle_scan(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScanResponse>, AppError> {
    let mut file: Option<(bytes::Bytes, Option<String>)> = None;
    let mut media_type_override: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read file: {e}")))?;
                file = Some((data, content_type));
            }
            Some("mediaType") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read mediaType: {e}")))?;
                media_type_override = Some(text);
            }
            _ => {}
        }
    }

    let (data, content_type) =
        file.ok_or_else(|| AppError::Validation("missing 'file' field".to_string()))?;
    let media_type = media_type_override.or(content_type).unwrap_or_default();

    info!("Scanning uploaded document ({} bytes)", data.len());
    let profile = scan_profile(&data, &media_type, state.provider.as_ref()).await?;
    let missing_fields = profile
        .missing_fields()
        .into_iter()
        .map(String::from)
        .collect();

    Ok(Json(ScanResponse {
        profile,
        missing_fields,
    }))
}
