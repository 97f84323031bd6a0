//! # Constants for the timestamp signer
//!
//! This module provides the centralized constants used throughout the library:
//! the default key-derivation salt, the key-derivation context string, token
//! separator and compression marker characters, and duration helpers for
//! expressing max-age values.

/// Default salt used for key derivation when none is configured.
///
/// Kept identical to the value used by Django's signing module so that tokens
/// produced with the default salt interoperate with it.
pub const DEFAULT_SALT: &str = "django.core.signing";

/// Context string appended to the salt during key derivation.
///
/// The signing key is `SHA1(salt || KEY_DERIVATION_CONTEXT || secret)`.
pub const KEY_DERIVATION_CONTEXT: &str = "signer";

/// Default character separating the value, timestamp, and signature segments
pub const DEFAULT_SEPARATOR: char = ':';

/// Marker prepended to a payload whose bytes were compressed before encoding
pub const COMPRESSION_MARKER: char = '.';

/// Length in characters of a base64url-encoded HMAC-SHA1 signature
pub const SIGNATURE_LENGTH: usize = 27;

/// Duration constants, in seconds, for max-age configuration
pub mod durations {
    /// One minute
    pub const MINUTE: u64 = 60;
    /// One hour
    pub const HOUR: u64 = 60 * MINUTE;
    /// One day
    pub const DAY: u64 = 24 * HOUR;
    /// One week
    pub const WEEK: u64 = 7 * DAY;
}
