use std::fmt;

use serde::Deserialize;

/// Caller-chosen id echoed back on the completion event of a fetch.
pub type RequestId = u64;
/// Caller-chosen id echoed back when a timer fires.
pub type TimerId = u64;

/// Dates arrive either as text or as epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DateField {
    Text(String),
    Millis(i64),
}

/// One element of the `/featured` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleRecord {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub date: Option<DateField>,
    #[serde(default)]
    pub link: Option<String>,
}

/// One element of the `/recommend/{id}` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendationRecord {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub date: Option<DateField>,
    pub score: f64,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    FeaturedCompleted {
        request: RequestId,
        result: Result<Vec<ArticleRecord>, FetchError>,
    },
    RecommendationsCompleted {
        request: RequestId,
        result: Result<Vec<RecommendationRecord>, FetchError>,
    },
    TimerFired {
        timer: TimerId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    /// Body was not the expected JSON array.
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed response body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
