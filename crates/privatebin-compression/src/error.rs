use std::fmt;

#[derive(thiserror::Error, Debug)]
pub enum CompressionAlgorithmError {
    #[error("invalid compression algorithm value: {0}")]
    InvalidValue(InvalidValue),
    #[error("cannot decode compression algorithm: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("cannot encode compression algorithm: {0}")]
    Encode(#[source] serde_json::Error),
}

/// The offending input of an [`CompressionAlgorithmError::InvalidValue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidValue {
    /// Numeric tag outside the serializable set
    Tag(u8),
    /// String token that names no algorithm
    Token(String),
}

impl fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Tag(tag) => write!(f, "tag {tag}"),
            Self::Token(token) => write!(f, "{token:?}"),
        }
    }
}

impl From<InvalidValue> for CompressionAlgorithmError {
    fn from(value: InvalidValue) -> Self {
        Self::InvalidValue(value)
    }
}
