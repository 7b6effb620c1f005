#[derive(thiserror::Error, Debug)]
pub enum TrackerError {
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,
    #[error("MMR data not found")]
    MmrUnavailable,
    #[error("Match history malformed")]
    MalformedHistory,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}
