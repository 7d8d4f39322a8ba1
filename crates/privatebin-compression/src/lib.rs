//! Compression algorithm label carried by PrivateBin paste documents.
//!
//! The label only records which scheme was applied to a payload. Nothing in
//! this crate compresses or inspects payload bytes.

use std::fmt;
use std::str::FromStr;

mod error;

#[cfg(feature = "schema")]
mod schema;

pub use error::{CompressionAlgorithmError, InvalidValue};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer, ser};

pub type Result<T, E = CompressionAlgorithmError> = std::result::Result<T, E>;

const NONE_TOKEN: &str = "none";
const ZLIB_TOKEN: &str = "zlib";
const UNKNOWN_DISPLAY: &str = "unknow";

/// The compression scheme applied to a payload before it was stored or transmitted
///
/// Any `u8` tag is representable, but only [`CompressionAlgorithm::NONE`] and
/// [`CompressionAlgorithm::GZIP`] can be written to JSON. The default value,
/// [`CompressionAlgorithm::UNKNOWN`], marks a field that was never set and
/// refuses to serialize.
///
/// On the wire `GZIP` is spelled `"zlib"`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct CompressionAlgorithm(u8);

impl CompressionAlgorithm {
    pub const UNKNOWN: Self = Self(0);
    pub const NONE: Self = Self(1);
    /// zlib/deflate compatible stream
    pub const GZIP: Self = Self(2);

    /// Members that have a JSON token, in tag order
    pub const VALID: [Self; 2] = [Self::NONE, Self::GZIP];

    /// Wraps a raw tag without checking it. Use `TryFrom<u8>` to reject
    /// unknown tags up front.
    pub const fn from_tag(tag: u8) -> Self {
        Self(tag)
    }

    pub const fn tag(self) -> u8 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        matches!(self, Self::NONE | Self::GZIP)
    }

    /// JSON token for this value, if it has one
    pub const fn token(self) -> Option<&'static str> {
        match self {
            Self::NONE => Some(NONE_TOKEN),
            Self::GZIP => Some(ZLIB_TOKEN),
            _ => None,
        }
    }

    /// Render as a JSON string literal, e.g. `"zlib"` including the quotes
    pub fn to_json(self) -> Result<Vec<u8>> {
        let token = self.token().ok_or(InvalidValue::Tag(self.0))?;
        serde_json::to_vec(token).map_err(CompressionAlgorithmError::Encode)
    }

    /// Parse a JSON string literal holding one of the known tokens.
    ///
    /// Input that is not a JSON string fails with
    /// [`CompressionAlgorithmError::Decode`]; a string naming no algorithm
    /// fails with [`CompressionAlgorithmError::InvalidValue`]. Tokens are
    /// case sensitive.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let token: String =
            serde_json::from_slice(bytes).map_err(CompressionAlgorithmError::Decode)?;
        token.parse()
    }

    /// Decode `bytes` into `self`. On error `self` is left unchanged.
    pub fn update_from_json(&mut self, bytes: &[u8]) -> Result<()> {
        *self = Self::from_json(bytes)?;
        Ok(())
    }
}

impl TryFrom<u8> for CompressionAlgorithm {
    type Error = CompressionAlgorithmError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        let algorithm = Self(tag);
        if algorithm.is_valid() {
            Ok(algorithm)
        } else {
            Err(InvalidValue::Tag(tag).into())
        }
    }
}

impl From<CompressionAlgorithm> for u8 {
    fn from(algorithm: CompressionAlgorithm) -> Self {
        algorithm.0
    }
}

impl FromStr for CompressionAlgorithm {
    type Err = CompressionAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            NONE_TOKEN => Ok(Self::NONE),
            ZLIB_TOKEN => Ok(Self::GZIP),
            _ => Err(InvalidValue::Token(s.to_owned()).into()),
        }
    }
}

/// Human readable form. Never fails: unknown tags print as `unknow`.
impl fmt::Display for CompressionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.token().unwrap_or(UNKNOWN_DISPLAY))
    }
}

impl Serialize for CompressionAlgorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.token() {
            Some(token) => serializer.serialize_str(token),
            None => Err(ser::Error::custom(
                CompressionAlgorithmError::InvalidValue(InvalidValue::Tag(self.0)),
            )),
        }
    }
}

impl<'de> Deserialize<'de> for CompressionAlgorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(AlgorithmVisitor)
    }
}

struct AlgorithmVisitor;

impl Visitor<'_> for AlgorithmVisitor {
    type Value = CompressionAlgorithm;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "compression algorithm \"{NONE_TOKEN}\" or \"{ZLIB_TOKEN}\""
        )
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}
