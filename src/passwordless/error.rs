use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid {field}: must not be empty")]
    Validation { field: &'static str },
    #[error("invalid api secret: not a valid header value")]
    InvalidSecret,
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("invalid url: unsupported scheme {0}")]
    UnsupportedScheme(String),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{url} - {status}, {body}")]
    HttpStatus {
        url: String,
        status: StatusCode,
        body: String,
    },
    #[error("invalid json from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid utf-8 from {url}: {source}")]
    Utf8 {
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl Error {
    /// HTTP status of a rejected request, `None` for every other kind of failure.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The service answered with success but the body could not be read as the
    /// expected type.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::Utf8 { .. })
    }

    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
