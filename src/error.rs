// src/error.rs
use thiserror::Error;

/// Everything that can go wrong between the source site and a sink.
///
/// Per-track variants (`Transport`, `Status`, `TableNotFound`) are absorbed
/// by the scheduler: the track simply yields no snapshot that cycle.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("table class={class:?}: found {found} table(s), need at least 2")]
    TableNotFound { class: String, found: usize },

    #[error("notification sink: {0}")]
    Sink(String),

    #[error("config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
