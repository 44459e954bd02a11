use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Riot API error: {status} {status_text}: {body}")]
    RiotApi {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format. Use RiotName#TagLine")]
    InvalidRiotId,

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Errors raised before any network activity, reported without the `Error:` prefix.
    pub fn is_startup(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::InvalidRegion(_) | Self::InvalidRiotId
        )
    }
}
