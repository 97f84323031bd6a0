//! Error types for the timestamp signer

use std::io::Error as IoError;
use thiserror::Error;

/// Errors that can occur when signing or verifying tokens
#[derive(Error, Debug)]
pub enum Error {
    /// The presented token does not contain the separator at all
    #[error("Malformed token: the separator does not occur in the presented value")]
    MalformedToken,

    /// Signature verification failed
    #[error("Bad signature. The recomputed signature does not match the presented one")]
    BadSignature,

    /// A max age is in force but the token carries no timestamp segment
    #[error("Missing timestamp: a max age is configured but the token carries no timestamp segment")]
    MissingTimestamp,

    /// Token expired
    #[error("Token expired. The embedded timestamp is older than the allowed max age")]
    Expired,

    /// The configured separator would collide with a token segment alphabet
    #[error("Invalid separator {0:?}: it must not occur in the base64url or base62 alphabets")]
    InvalidSeparator(char),

    /// Error during base64 payload decoding
    #[error("Payload decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Error during payload decompression
    #[error("Corrupt compression stream: {0}")]
    CorruptStream(#[from] IoError),

    /// Error during payload serialization or deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
