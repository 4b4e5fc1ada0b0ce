//! Configuration types for the SemanticPen client

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Production endpoint of the SemanticPen API
pub const DEFAULT_BASE_URL: &str = "https://semanticpen.vercel.app/api";

/// Default upper bound on a full request lifecycle
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration
///
/// Established at construction time and immutable for the client's lifetime.
/// The API key is deliberately not part of this struct: it is a required
/// constructor argument and never serialized.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the API (default: the vendor's production endpoint)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upper bound on the full request lifecycle (default: 30 seconds)
    #[serde(default = "default_timeout", with = "duration_serde")]
    pub timeout: Duration,

    /// Emit request/response diagnostics, with the credential redacted
    /// (default: false)
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            debug: false,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

// Duration serialization helper (integer seconds on the wire)
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
