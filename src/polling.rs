//! Poll-until-completion orchestration
//!
//! [`Client::wait_for_article`] repeatedly retrieves an article snapshot
//! until it reaches a terminal state (`finished` or `failed`), sleeping a
//! fixed interval between attempts. Fixed-interval polling (no backoff) is
//! deliberate: generation jobs have a server-bounded duration, and
//! `max_attempts * interval` is the effective client-side deadline,
//! independent of the per-request timeout.

use std::fmt;
use std::time::Duration;

pub use tokio_util::sync::CancellationToken;

use crate::client::Client;
use crate::error::{Error, Result};
use crate::types::{Article, ArticleStatus};

/// Progress observer invoked once per poll attempt with the attempt number
/// (1-based) and the status that attempt observed
pub type ProgressFn = Box<dyn FnMut(u32, &ArticleStatus) + Send>;

/// Options for [`Client::wait_for_article`]
///
/// ```
/// use std::time::Duration;
/// use semanticpen::WaitOptions;
///
/// let options = WaitOptions::new()
///     .max_attempts(100)
///     .interval(Duration::from_secs(3))
///     .on_progress(|attempt, status| println!("attempt {attempt}: {status}"));
/// ```
pub struct WaitOptions {
    /// Maximum number of poll attempts (default: 60)
    pub max_attempts: u32,

    /// Fixed pause between non-terminal attempts (default: 5 seconds)
    pub interval: Duration,

    pub(crate) on_progress: Option<ProgressFn>,
    pub(crate) cancel: Option<CancellationToken>,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            max_attempts: 60,
            interval: Duration::from_secs(5),
            on_progress: None,
            cancel: None,
        }
    }
}

impl fmt::Debug for WaitOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaitOptions")
            .field("max_attempts", &self.max_attempts)
            .field("interval", &self.interval)
            .field("on_progress", &self.on_progress.is_some())
            .field("cancel", &self.cancel.is_some())
            .finish()
    }
}

impl WaitOptions {
    /// Options with the default attempt budget and interval
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of poll attempts
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set the fixed pause between non-terminal attempts
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Install a progress observer, invoked synchronously once per attempt
    /// on the same task as the poll loop
    pub fn on_progress(mut self, observer: impl FnMut(u32, &ArticleStatus) + Send + 'static) -> Self {
        self.on_progress = Some(Box::new(observer));
        self
    }

    /// Install a cancellation token; cancelling it aborts the wait with
    /// [`Error::Cancelled`], both mid-retrieval and mid-sleep
    pub fn cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

impl Client {
    /// Poll an article until it reaches a terminal state.
    ///
    /// Each attempt retrieves the current snapshot, notifies the progress
    /// observer, and branches on the status: `finished` returns the snapshot,
    /// `failed` fails with the snapshot's error message, and anything else
    /// (including status strings this client does not recognize) continues
    /// polling after the configured interval.
    ///
    /// # Errors
    ///
    /// - [`Error::GenerationFailed`] when a snapshot reports `failed`
    /// - [`Error::PollTimeout`] when the attempt budget is exhausted
    /// - [`Error::Cancelled`] when the cancellation token fires
    /// - any retrieval error, propagated immediately (a failed retrieval is
    ///   a hard failure, not a transient poll miss)
    pub async fn wait_for_article(&self, article_id: &str, options: WaitOptions) -> Result<Article> {
        let WaitOptions {
            max_attempts,
            interval,
            mut on_progress,
            cancel,
        } = options;

        for attempt in 1..=max_attempts {
            let article = match &cancel {
                Some(token) => tokio::select! {
                    _ = token.cancelled() => return Err(Error::Cancelled),
                    result = self.get_article(article_id) => result?,
                },
                None => self.get_article(article_id).await?,
            };

            if let Some(observer) = on_progress.as_mut() {
                observer(attempt, &article.status);
            }

            match article.status {
                ArticleStatus::Finished => {
                    tracing::debug!(article_id, attempt, "article finished");
                    return Ok(article);
                }
                ArticleStatus::Failed => {
                    return Err(Error::GenerationFailed {
                        message: article.error_message.unwrap_or_default(),
                    });
                }
                ref status => {
                    tracing::trace!(
                        article_id,
                        attempt,
                        max_attempts,
                        status = %status,
                        "article not ready"
                    );
                    if attempt < max_attempts {
                        match &cancel {
                            Some(token) => tokio::select! {
                                _ = token.cancelled() => return Err(Error::Cancelled),
                                _ = tokio::time::sleep(interval) => {}
                            },
                            None => tokio::time::sleep(interval).await,
                        }
                    }
                }
            }
        }

        Err(Error::PollTimeout {
            attempts: max_attempts,
        })
    }
}
