//! Recommendation — turns a `Profile` into a structured `Recommendation` with one
//! provider call. All-or-nothing: any provider or parse failure is a single
//! `GenerationFailed`, nothing is retried and nothing is cached.

use tracing::{info, warn};

use crate::advisor::prompts::{recommendation_schema, render_recommend_prompt, RECOMMEND_ROLE};
use crate::errors::AppError;
use crate::llm_client::prompts::system_prompt;
use crate::llm_client::{strip_json_fences, GenerationProvider};
use crate::models::profile::{Profile, Recommendation};

/// Asks the provider for career guidance for `profile`.
///
/// Does not check that the profile fields are filled in; callers that need a
/// meaningful answer validate first.
pub async fn get_recommendation(
    profile: &Profile,
    provider: &dyn GenerationProvider,
) -> Result<Recommendation, AppError> {
    let prompt = render_recommend_prompt(&profile.education, &profile.skills, &profile.interests);
    let system = system_prompt(RECOMMEND_ROLE);

    let raw = provider
        .generate_structured(&system, &prompt, &recommendation_schema())
        .await
        .map_err(|e| AppError::GenerationFailed(format!("{} call failed: {e}", provider.name())))?;

    let recommendation = parse_recommendation(&raw)?;
    info!(
        "Recommendation generated: {} career paths, {} internship roles, {} skills",
        recommendation.career_paths.len(),
        recommendation.internship_roles.len(),
        recommendation.skills_to_learn.len()
    );
    Ok(recommendation)
}

fn parse_recommendation(raw: &str) -> Result<Recommendation, AppError> {
    serde_json::from_str(strip_json_fences(raw)).map_err(|e| {
        warn!("Recommendation payload did not match schema: {e}");
        AppError::GenerationFailed(format!("malformed recommendation payload: {e}"))
    })
}
