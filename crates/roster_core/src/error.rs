use thiserror::Error;

/// Everything that can go wrong while retrieving the roster document.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid document url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },
    #[error("failed to parse roster document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            Self::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}
