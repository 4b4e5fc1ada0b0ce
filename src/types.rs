//! Core types exchanged with the SemanticPen API
//!
//! Request and response shapes use wire-exact field names (the API speaks
//! camelCase for requests and a mix of camelCase and snake_case for article
//! snapshots). Every optional field is omitted from the wire when absent, so
//! "not provided" and "provided but empty" never blur together.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Generation lifecycle status of an article
///
/// The API's status vocabulary is not exhaustively known to the client;
/// unrecognized strings are preserved in [`ArticleStatus::Other`] and
/// treated as non-terminal by the polling orchestrator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ArticleStatus {
    /// Queued server-side, generation not started
    Pending,
    /// Generation in progress
    Processing,
    /// Generation completed successfully (terminal)
    Finished,
    /// Generation failed (terminal)
    Failed,
    /// Any status string the client does not recognize
    Other(String),
}

impl ArticleStatus {
    /// The wire representation of this status
    pub fn as_str(&self) -> &str {
        match self {
            ArticleStatus::Pending => "pending",
            ArticleStatus::Processing => "processing",
            ArticleStatus::Finished => "finished",
            ArticleStatus::Failed => "failed",
            ArticleStatus::Other(s) => s,
        }
    }

    /// Whether polling should stop at this status
    pub fn is_terminal(&self) -> bool {
        matches!(self, ArticleStatus::Finished | ArticleStatus::Failed)
    }
}

impl From<String> for ArticleStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" => ArticleStatus::Pending,
            "processing" => ArticleStatus::Processing,
            "finished" => ArticleStatus::Finished,
            "failed" => ArticleStatus::Failed,
            _ => ArticleStatus::Other(s),
        }
    }
}

impl From<&str> for ArticleStatus {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<ArticleStatus> for String {
    fn from(status: ArticleStatus) -> Self {
        match status {
            ArticleStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request payload for article generation
///
/// The target keyword is the only required input; the nested option groups
/// are independently optional and omitted from the wire when `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateArticleRequest {
    /// Keyword the article is generated around (required, non-empty)
    pub target_keyword: String,

    /// Generation metadata (project, language, audience targeting)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<GenerationOptions>,

    /// SEO metadata to embed in the generated article
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoOptions>,

    /// Writing style controls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writing: Option<WritingOptions>,

    /// Open-ended advanced options, passed through opaquely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced: Option<HashMap<String, serde_json::Value>>,
}

/// Generation metadata options
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    /// Project the article is filed under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    /// Output language code (e.g., "en")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Target country code (e.g., "US")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Narrative perspective (e.g., "third-person")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perspective: Option<String>,

    /// Purpose of the article (e.g., "informative")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// How clickbaity the title should be (0 = none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clickbait_level: Option<u8>,
}

/// SEO metadata options
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoOptions {
    /// SEO title override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Meta description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Keywords to target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    /// Whether to embed schema.org structured data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_schema: Option<bool>,
}

/// Writing style options
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingOptions {
    /// Writing style (e.g., "professional")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// Tone of voice (e.g., "informative")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,

    /// Target length (e.g., "long")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,

    /// Whether to generate images alongside the text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_images: Option<bool>,

    /// Style for generated images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_style: Option<String>,
}

/// Acknowledgement returned immediately after submitting a generation request
///
/// Contains identifiers only; the article content is retrieved separately
/// once generation completes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateArticleResponse {
    /// Identifier of the queued article
    #[serde(default)]
    pub article_id: String,

    /// Identifier of the project the article belongs to
    #[serde(default)]
    pub project_id: String,

    /// Human-readable submission message
    #[serde(default)]
    pub message: String,
}

/// An article snapshot as observed via retrieval
///
/// Created server-side on submission and mutated server-side as generation
/// progresses; the client only ever observes snapshots. Once the status is
/// `finished` or `failed` the snapshot no longer changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Article identifier
    pub id: String,

    /// Project the article belongs to
    #[serde(rename = "projectId", default)]
    pub project_id: String,

    /// Current generation status
    pub status: ArticleStatus,

    /// Generation progress, 0–100 (server-reported, not strictly validated)
    #[serde(default)]
    pub progress: u32,

    /// Article title, once generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Rendered article content as HTML
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_html: Option<String>,

    /// Structured article content fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_json: Option<HashMap<String, serde_json::Value>>,

    /// SEO payload attached to the article
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_data: Option<SeoData>,

    /// Error message, populated only when status is `failed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// When the article was created server-side
    #[serde(default)]
    pub created_at: DateTime<Utc>,

    /// When the article was last updated server-side
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

/// SEO attributes attached to a finished (or partially generated) article
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoData {
    /// SEO title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Meta description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Targeted keywords
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    /// schema.org structured data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<HashMap<String, serde_json::Value>>,
}
