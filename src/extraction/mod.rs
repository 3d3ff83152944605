//! Business-info extraction boundary.
//!
//! An external collaborator turns a website URL into structured business
//! data after a bounded delay. The app only depends on the trait; the
//! bundled implementation is a deterministic mock.

pub mod mock;

pub use mock::MockExtractor;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result shape at the extraction-service boundary. Field names follow the
/// service's wire contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub business_name: String,
    pub business_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub business_category: String,
    pub naics_code: String,
    pub business_description: String,
    pub operating_hours: String,
    pub social_media: SocialMedia,
    pub additional_contacts: AdditionalContacts,
    /// Range string such as "5-25".
    pub estimated_employees: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalContacts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug)]
pub enum ExtractError {
    /// The URL has no usable host.
    InvalidUrl,
    /// The service itself failed; retriable.
    Unavailable(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::InvalidUrl => write!(f, "URL has no usable host"),
            ExtractError::Unavailable(msg) => write!(f, "Extraction service error: {msg}"),
        }
    }
}

impl std::error::Error for ExtractError {}

/// The extraction collaborator: opaque, possibly slow, possibly failing.
#[async_trait]
pub trait BusinessExtractor: Send + Sync {
    async fn extract(&self, website: &str) -> Result<ExtractionResult, ExtractError>;
}
