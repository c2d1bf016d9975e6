//! Upstream call failures.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a call to another service.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("{service} timed out: {details}")]
    Timeout {
        service: &'static str,
        details: String,
    },

    #[error("{service} is unavailable: {details}")]
    Unavailable {
        service: &'static str,
        details: String,
    },

    #[error("{service} returned status {status}: {body}")]
    UnexpectedStatus {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("{service} returned an invalid payload: {details}")]
    Decode {
        service: &'static str,
        details: String,
    },
}

impl UpstreamError {
    /// Map a reqwest transport failure (connect, timeout, read).
    pub(crate) fn transport(service: &'static str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            UpstreamError::Timeout {
                service,
                details: error.to_string(),
            }
        } else {
            UpstreamError::Unavailable {
                service,
                details: error.to_string(),
            }
        }
    }

    pub(crate) fn status(service: &'static str, status: StatusCode, body: &[u8]) -> Self {
        UpstreamError::UnexpectedStatus {
            service,
            status: status.as_u16(),
            body: body_preview(body),
        }
    }

    pub(crate) fn decode(service: &'static str, details: impl ToString) -> Self {
        UpstreamError::Decode {
            service,
            details: details.to_string(),
        }
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 200;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
