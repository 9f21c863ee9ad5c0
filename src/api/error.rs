use std::error::Error;
use std::fmt;

/// Error enum for the banking API runner
#[derive(Debug)]
pub enum ApiError {
    /// Base URL or request path could not be parsed
    InvalidUrl(String),
    /// Request never got a response - see the contents
    Transport(String),
    /// Server answered with a non-success status
    Status(u16, String),
    /// Body was not valid JSON
    Decode(String),
    /// Output could not be written
    Io(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::InvalidUrl(e) => {
                write!(f, "Invalid URL: {}", e)
            }
            ApiError::Transport(e) => {
                write!(f, "Transport Error: {}", e)
            }
            ApiError::Status(code, body) => {
                write!(f, "HTTP {}: {}", code, body)
            }
            ApiError::Decode(e) => {
                write!(f, "Decode Error: {}", e)
            }
            ApiError::Io(e) => {
                write!(f, "IO Error: {}", e)
            }
        }
    }
}

impl Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        ApiError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            ApiError::Io(e.to_string())
        } else {
            ApiError::Decode(e.to_string())
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(e: url::ParseError) -> Self {
        ApiError::InvalidUrl(e.to_string())
    }
}
