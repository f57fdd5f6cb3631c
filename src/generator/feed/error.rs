//! Feed generation error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering or writing a feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to write feed to `{}`", .0.display())]
    Write(PathBuf, #[source] std::io::Error),

    #[error("RSS validation failed: {0}")]
    InvalidRss(String),

    #[error("post `{id}` has invalid publish date {date}: {reason}")]
    InvalidDate {
        id: &'static str,
        date: String,
        reason: String,
    },
}
