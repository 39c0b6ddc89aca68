use reqwest::StatusCode;
use shared::error::ValidationError;
use thiserror::Error;

/// Outcome of a single remote call that did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogClientError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("HTTP error! Status: {}", .status.as_u16())]
    Service { status: StatusCode },
}

impl CatalogClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            CatalogClientError::Service { status } => Some(*status),
            CatalogClientError::Transport(_) => None,
        }
    }
}

/// Send, receive and body-decode failures. Status codes are checked before decoding.
impl From<reqwest::Error> for CatalogClientError {
    fn from(err: reqwest::Error) -> Self {
        CatalogClientError::Transport(err.to_string())
    }
}

/// Why a store action did not commit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("invalid draft: {0}")]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Remote(#[from] CatalogClientError),
    #[error("catalog is not ready")]
    NotReady,
}
