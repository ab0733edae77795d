use thiserror::Error;

/// Failures inside the engine. None of these cross the WASM boundary: the
/// `PortfolioEngine` methods log them and degrade (no-op, force-close, or
/// fallback mode).
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no card with id {0}")]
    UnknownCard(usize),

    #[error("no project with slug \"{0}\"")]
    UnknownProject(String),

    #[error("card \"{slug}\" cannot open a gallery: {reason}")]
    MalformedCard { slug: String, reason: String },

    #[error("project record #{index} is invalid: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("slug \"{0}\" is used by more than one project")]
    DuplicateSlug(String),

    #[error("malformed config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("malformed history state: {0}")]
    HistoryState(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
