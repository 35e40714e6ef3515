//! Error types for the Great Food client.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FoodApiError>;

#[derive(Debug, Error)]
pub enum FoodApiError {
    /// The HTTP exchange itself failed: connection error, timeout, or a
    /// non-2xx response. `status` is `None` when no response was received.
    #[error("transport error{}: {message}", fmt_status(.status))]
    Transport { message: String, status: Option<u16> },

    /// The access token could not be obtained.
    #[error("authentication failed{}: {message}", fmt_status(.status))]
    Auth { message: String, status: Option<u16> },

    /// An authenticated call failed or returned an unexpected shape.
    #[error("API call failed{}: {message}", fmt_status(.status))]
    Api { message: String, status: Option<u16> },

    #[error("no access token available for authenticated request")]
    MissingToken,

    #[error("invalid configuration: {0}")]
    Config(String),
}

fn fmt_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (status {})", code),
        None => String::new(),
    }
}

impl FoodApiError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. }
            | Self::Auth { status, .. }
            | Self::Api { status, .. } => *status,
            _ => None,
        }
    }

    pub(crate) fn into_auth(self, context: &str) -> Self {
        let status = self.status();
        Self::Auth {
            message: format!("{}: {}", context, self),
            status,
        }
    }

    pub(crate) fn into_api(self, context: &str) -> Self {
        let status = self.status();
        Self::Api {
            message: format!("{}: {}", context, self),
            status,
        }
    }
}

impl From<reqwest::Error> for FoodApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport {
            message: e.to_string(),
            status: e.status().map(|s| s.as_u16()),
        }
    }
}
