use thiserror::Error;

/// Common error type shared by every marquee package
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Section record must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Invalid section record for '{section}': {source}")]
    InvalidRecord {
        section: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

impl From<String> for CommonError {
    fn from(s: String) -> Self {
        CommonError::Generic(s)
    }
}

impl From<&str> for CommonError {
    fn from(s: &str) -> Self {
        CommonError::Generic(s.to_string())
    }
}
