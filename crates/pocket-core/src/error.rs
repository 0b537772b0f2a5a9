use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PocketError {
    #[error(
        "request failed with status {status}: {}",
        .message.as_deref().unwrap_or("no error detail")
    )]
    Transport {
        status: u16,
        message: Option<String>,
        code: Option<String>,
    },
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("no cached authorization at {}", .0.display())]
    NotFound(PathBuf),
    #[error("cached authorization at {} is unreadable: {detail}", .path.display())]
    CorruptRecord { path: PathBuf, detail: String },
    #[error("failed to persist authorization to {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("callback listener failed: {0}")]
    Listener(#[source] std::io::Error),
    #[error("authorization was not completed within {0:?}")]
    CallbackTimeout(Duration),
    #[error("callback listener stopped before authorization completed")]
    CallbackClosed,
    #[error("auth flow cannot {action} while {state}")]
    AuthFlowState {
        action: &'static str,
        state: &'static str,
    },
    #[error("callback listener at {actual} does not match presented redirect {expected}")]
    RedirectMismatch { expected: String, actual: String },
    #[error("sent {expected} actions but received {actual} results")]
    ActionCountMismatch { expected: usize, actual: usize },
}

impl PocketError {
    /// Missing and unreadable records are equivalent: both mean "authorize again".
    #[must_use]
    pub fn triggers_reauthorization(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::CorruptRecord { .. })
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn service_message(&self) -> Option<&str> {
        match self {
            Self::Transport { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T, E = PocketError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_exposes_status_and_message() {
        let err = PocketError::Transport {
            status: 503,
            message: Some("backend down".to_string()),
            code: None,
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.service_message(), Some("backend down"));
        assert_eq!(
            err.to_string(),
            "request failed with status 503: backend down"
        );
        assert!(!err.triggers_reauthorization());
    }

    #[test]
    fn missing_and_corrupt_records_trigger_reauthorization() {
        assert!(PocketError::NotFound(PathBuf::from("auth.json")).triggers_reauthorization());
        assert!(PocketError::CorruptRecord {
            path: PathBuf::from("auth.json"),
            detail: "eof".to_string(),
        }
        .triggers_reauthorization());
        assert!(!PocketError::CallbackClosed.triggers_reauthorization());
    }
}
