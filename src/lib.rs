//! # Timestamp Signer
//!
//! A Rust implementation of the signed-cookie / signed-URL token scheme used
//! by Django's signing module: a caller hands in a string or a serializable
//! value, the library returns a compact URL-safe token, and a later caller
//! presenting that token either gets the original data back or a typed error
//! saying it was forged, malformed, or expired.
//!
//! ## Overview
//!
//! Tokens are `value:signature`, or `value:base62(timestamp):signature` when
//! signed with a timestamp. The signature is HMAC-SHA1 over the preceding
//! segments, keyed by `SHA1(salt || "signer" || secret)` and rendered as
//! unpadded base64url text, so tokens need no percent-encoding. Structured
//! values are serialized to JSON, optionally zlib-compressed (a leading `.`
//! marks a compressed payload), and framed as base64url before signing.
//!
//! Verification checks the signature in constant time before anything else,
//! then evaluates the embedded timestamp against a max age. All failures are
//! typed variants of [`Error`]; there is no silent fallback and an expired
//! token never yields its payload.
//!
//! ## Features
//!
//! - Tamper-evident signing of raw strings and serde-serializable values
//! - Optional embedded timestamps with max-age verification
//! - Constant-time signature comparison
//! - URL-safe output end to end (base64url signatures, base62 timestamps)
//! - Opportunistic zlib payload compression with an in-band marker
//! - Salt-based context separation so one secret serves unrelated purposes
//! - Immutable, thread-safe signer; per-call max-age and clock overrides
//!
//! ## Basic Example
//!
//! ```rust
//! use timestamp_signer::Signer;
//!
//! let signer = Signer::new("my-secret");
//!
//! let token = signer.sign("hello");
//! assert_eq!(token, "hello:AFPMHFvxZXEeDnY6I2XarmjSRfw");
//! assert_eq!(signer.unsign(&token).unwrap(), "hello");
//! ```
//!
//! ## Timestamped Example
//!
//! ```rust
//! use timestamp_signer::{durations, Error, Signer, UnsignOptions};
//!
//! let signer = Signer::builder("my-secret")
//!     .salt("email-confirmation")
//!     .default_max_age(durations::HOUR)
//!     .build()
//!     .unwrap();
//!
//! let token = signer.sign_with_timestamp("confirm-42");
//! assert_eq!(signer.unsign_with_timestamp(&token).unwrap(), "confirm-42");
//!
//! // A token signed an hour and a second ago is rejected.
//! let now = timestamp_signer::current_timestamp();
//! let stale = signer.sign_at("confirm-42", now - durations::HOUR - 1);
//! assert!(matches!(
//!     signer.unsign_with_timestamp(&stale),
//!     Err(Error::Expired)
//! ));
//! ```
//!
//! ## Structured Payloads
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use timestamp_signer::Signer;
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Session {
//!     user_id: u64,
//!     name: String,
//! }
//!
//! let signer = Signer::new("my-secret");
//! let session = Session { user_id: 42, name: "john".to_string() };
//!
//! let token = signer.dumps(&session).unwrap();
//! let restored: Session = signer.loads(&token).unwrap();
//! assert_eq!(restored, session);
//! ```

pub mod config;
pub mod constants;
pub mod crypto;
pub mod error;
pub mod payload;
pub mod signer;
pub mod token;
pub mod utils;

pub use config::SignerConfig;
pub use constants::{durations, DEFAULT_SALT, DEFAULT_SEPARATOR, SIGNATURE_LENGTH};
pub use error::Error;
pub use signer::{Signer, SignerBuilder, UnsignOptions};
pub use utils::current_timestamp;
