//! Resume scan — hands a document to the provider and reads back a candidate
//! `Profile`. No local text extraction; the provider reads the document.

use std::fmt;

use tracing::{info, warn};

use crate::advisor::prompts::{profile_schema, SCAN_PROMPT, SCAN_ROLE};
use crate::errors::AppError;
use crate::llm_client::prompts::system_prompt;
use crate::llm_client::{strip_json_fences, Document, GenerationProvider};
use crate::models::profile::Profile;

/// Declared media type of an uploaded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    PlainText,
    /// Anything else is forwarded as-is; the provider decides.
    Other(String),
}

impl MediaType {
    /// Parses a `Content-Type` style value, dropping parameters such as `charset`.
    /// Returns `None` for an empty value.
    pub fn parse(raw: &str) -> Option<Self> {
        let essence = raw.split(';').next().unwrap_or_default().trim().to_lowercase();
        match essence.as_str() {
            "" => None,
            "application/pdf" => Some(MediaType::Pdf),
            "text/plain" => Some(MediaType::PlainText),
            _ => Some(MediaType::Other(essence)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Pdf => "application/pdf",
            MediaType::PlainText => "text/plain",
            MediaType::Other(s) => s,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, MediaType::Other(_))
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extracts education / skills / interests from a document.
///
/// Empty bytes or an empty media type are rejected before the provider is
/// contacted. Every other failure is `ScanFailed`.
pub async fn scan_profile(
    bytes: &[u8],
    media_type: &str,
    provider: &dyn GenerationProvider,
) -> Result<Profile, AppError> {
    if bytes.is_empty() {
        return Err(AppError::Validation("uploaded file is empty".to_string()));
    }
    let media_type = MediaType::parse(media_type)
        .ok_or_else(|| AppError::Validation("media type is required".to_string()))?;

    if !media_type.is_supported() {
        warn!("Scanning document with unusual media type {media_type}");
    }

    let system = system_prompt(SCAN_ROLE);
    let document = Document {
        bytes,
        media_type: media_type.as_str(),
    };

    let raw = provider
        .extract_structured(&system, SCAN_PROMPT, document, &profile_schema())
        .await
        .map_err(|e| AppError::ScanFailed(format!("{} call failed: {e}", provider.name())))?;

    let profile: Profile = serde_json::from_str(strip_json_fences(&raw)).map_err(|e| {
        warn!("Scan payload did not match schema: {e}");
        AppError::ScanFailed(format!("malformed profile payload: {e}"))
    })?;

    info!(
        "Scanned {} byte {} document; missing fields: {:?}",
        bytes.len(),
        media_type,
        profile.missing_fields()
    );
    Ok(profile)
}
