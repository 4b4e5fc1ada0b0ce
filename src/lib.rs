//! # semanticpen
//!
//! Client library for the [SemanticPen](https://semanticpen.com) AI article
//! generation API.
//!
//! ## Design Philosophy
//!
//! semanticpen is designed to be:
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Sensible defaults** - Works out of the box with just an API key
//! - **Explicit about failure** - Validation, API, and polling failures are
//!   distinct typed errors; nothing is silently retried or swallowed
//!
//! ## Quick Start
//!
//! ```no_run
//! use semanticpen::{Client, WaitOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("your-api-key")?;
//!
//!     // Submit a generation request
//!     let ack = client.generate_article("rust async patterns", None).await?;
//!     println!("Article queued: {}", ack.article_id);
//!
//!     // Poll until the article reaches a terminal state
//!     let article = client
//!         .wait_for_article(
//!             &ack.article_id,
//!             WaitOptions::new().on_progress(|attempt, status| {
//!                 println!("attempt {attempt}: {status}");
//!             }),
//!         )
//!         .await?;
//!
//!     println!("Finished: {}", article.title.unwrap_or_default());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Article resource operations
mod articles;
/// Client and transport layer
pub mod client;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Poll-until-completion orchestration
pub mod polling;
/// Core types exchanged with the API
pub mod types;

// Re-export commonly used types
pub use client::Client;
pub use config::{Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ApiError, Error, RateLimitError, Result};
pub use polling::{CancellationToken, ProgressFn, WaitOptions};
pub use types::{
    Article, ArticleStatus, GenerateArticleRequest, GenerateArticleResponse, GenerationOptions,
    SeoData, SeoOptions, WritingOptions,
};
