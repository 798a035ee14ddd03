use thiserror::Error;

/// Failure inside a single source attempt.
///
/// These never cross the [`crate::ProfileSource::attempt`] boundary: the
/// adapter logs the diagnostic and collapses the failure to `None` so the
/// orchestrator only ever decides "try the next source or give up".
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("missing expected field: {context}")]
    MissingField { context: String },
}
