//! Signer facade composing key derivation, signing, wire format, expiry, and
//! payload framing

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::constants::{DEFAULT_SALT, DEFAULT_SEPARATOR};
use crate::error::Error;
use crate::utils::current_timestamp;
use crate::{crypto, payload, token};

/// Signs and verifies tamper-evident, optionally time-limited tokens.
///
/// A `Signer` is immutable once built: it holds the derived HMAC key, the
/// separator character, and an optional default max age. All per-call
/// variation (timestamp for signing, max age and clock for verification) is
/// passed explicitly, so a single instance is safe to share across threads
/// with no synchronization and no cross-talk between callers.
///
/// # Example
///
/// ```
/// use timestamp_signer::Signer;
///
/// let signer = Signer::new("my-secret");
///
/// let token = signer.sign("hello");
/// assert_eq!(signer.unsign(&token).unwrap(), "hello");
///
/// // Any mutation of the token is rejected.
/// let mut forged = token.clone();
/// forged.replace_range(0..1, "H");
/// assert!(signer.unsign(&forged).is_err());
/// ```
#[derive(Clone)]
pub struct Signer {
    key: [u8; crypto::KEY_LENGTH],
    separator: char,
    default_max_age: Option<u64>,
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The derived key is secret-equivalent and must never be printed.
        f.debug_struct("Signer")
            .field("key", &"<redacted>")
            .field("separator", &self.separator)
            .field("default_max_age", &self.default_max_age)
            .finish()
    }
}

impl Signer {
    /// Create a signer with the default salt, separator, and no max age.
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        SignerBuilder::new(secret.as_ref())
            .build()
            .expect("default separator is always valid")
    }

    /// Start building a signer with non-default configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use timestamp_signer::{durations, Signer};
    ///
    /// let signer = Signer::builder("my-secret")
    ///     .salt("password-reset")
    ///     .default_max_age(durations::HOUR)
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn builder(secret: impl AsRef<[u8]>) -> SignerBuilder {
        SignerBuilder::new(secret.as_ref())
    }

    /// Compute the bare signature of a value.
    ///
    /// The result is always 27 characters of unpadded base64url text.
    pub fn signature(&self, value: &str) -> String {
        crypto::signature(value.as_bytes(), &self.key)
    }

    /// Sign a value, producing `value SEP signature`.
    pub fn sign(&self, value: &str) -> String {
        format!("{value}{}{}", self.separator, self.signature(value))
    }

    /// Sign a value with the current time embedded as a timestamp segment.
    pub fn sign_with_timestamp(&self, value: &str) -> String {
        self.sign_at(value, current_timestamp())
    }

    /// Sign a value with an explicit timestamp.
    ///
    /// Produces `value SEP base62(timestamp) SEP signature`. Useful for tests
    /// and for signing on behalf of a caller-chosen point in time.
    pub fn sign_at(&self, value: &str, timestamp: u64) -> String {
        self.sign(&token::append_timestamp(value, self.separator, timestamp))
    }

    /// Verify a token and recover the signed value.
    ///
    /// Fails with [`Error::MalformedToken`] when the separator is absent and
    /// with [`Error::BadSignature`] when the signature does not match. The
    /// signature comparison runs in constant time.
    pub fn unsign(&self, signed_value: &str) -> Result<String, Error> {
        let (body, sig) = token::parse(signed_value, self.separator)?;

        if !crypto::verify(body.as_bytes(), sig, &self.key) {
            return Err(Error::BadSignature);
        }

        Ok(body.to_string())
    }

    /// Verify a timestamped token against the configured default max age.
    ///
    /// Equivalent to [`Signer::unsign_with_options`] with default options:
    /// the signer's default max age and the current wall-clock time.
    pub fn unsign_with_timestamp(&self, signed_value: &str) -> Result<String, Error> {
        self.unsign_with_options(signed_value, &UnsignOptions::new())
    }

    /// Verify a timestamped token with explicit per-call options.
    ///
    /// The signature is checked first, then the timestamp segment is split
    /// off the body. When a max age is in force the segment is decoded and
    /// its age checked; a signature-valid body with no timestamp segment is
    /// rejected with [`Error::MissingTimestamp`]. When no max age is in
    /// force, a token without a timestamp segment passes through unchanged as
    /// a legacy untimed token.
    ///
    /// # Example
    ///
    /// ```
    /// use timestamp_signer::{Error, Signer, UnsignOptions};
    ///
    /// let signer = Signer::new("my-secret");
    /// let token = signer.sign_at("hello", 1_000);
    ///
    /// // Within the allowed age.
    /// let options = UnsignOptions::new().max_age(60).now(1_060);
    /// assert_eq!(signer.unsign_with_options(&token, &options).unwrap(), "hello");
    ///
    /// // One second past it.
    /// let options = UnsignOptions::new().max_age(60).now(1_061);
    /// assert!(matches!(
    ///     signer.unsign_with_options(&token, &options),
    ///     Err(Error::Expired)
    /// ));
    /// ```
    pub fn unsign_with_options(
        &self,
        signed_value: &str,
        options: &UnsignOptions,
    ) -> Result<String, Error> {
        let body = self.unsign(signed_value)?;
        let max_age = options.effective_max_age(self.default_max_age);

        match token::split_last(&body, self.separator) {
            Some((value, segment)) => {
                if max_age.is_some() {
                    let timestamp = token::decode_timestamp(segment)?;
                    let now = options.now.unwrap_or_else(current_timestamp);
                    token::check_age(timestamp, max_age, now)?;
                }
                Ok(value.to_string())
            }
            None if max_age.is_some() => Err(Error::MissingTimestamp),
            None => Ok(body),
        }
    }

    /// Serialize a value to JSON and sign it with the current time.
    ///
    /// The serialized bytes are framed as base64url text before signing, so
    /// the resulting token is URL-safe end to end.
    pub fn dumps<T: Serialize>(&self, value: &T) -> Result<String, Error> {
        self.dumps_inner(value, false, current_timestamp())
    }

    /// Like [`Signer::dumps`], but with an explicit timestamp.
    pub fn dumps_at<T: Serialize>(&self, value: &T, timestamp: u64) -> Result<String, Error> {
        self.dumps_inner(value, false, timestamp)
    }

    /// Serialize, compress, and sign a value with the current time.
    ///
    /// The compressed form is only adopted when it is actually smaller than
    /// the serialized bytes by more than one byte; small or incompressible
    /// payloads fall back to the uncompressed framing, and
    /// [`Signer::loads`] recovers the value either way.
    pub fn dumps_compressed<T: Serialize>(&self, value: &T) -> Result<String, Error> {
        self.dumps_inner(value, true, current_timestamp())
    }

    /// Like [`Signer::dumps_compressed`], but with an explicit timestamp.
    pub fn dumps_compressed_at<T: Serialize>(
        &self,
        value: &T,
        timestamp: u64,
    ) -> Result<String, Error> {
        self.dumps_inner(value, true, timestamp)
    }

    fn dumps_inner<T: Serialize>(
        &self,
        value: &T,
        compress: bool,
        timestamp: u64,
    ) -> Result<String, Error> {
        let data = serde_json::to_vec(value)?;
        let framed = payload::encode(&data, compress)?;
        Ok(self.sign_at(&framed, timestamp))
    }

    /// Verify a token produced by [`Signer::dumps`] and deserialize its
    /// payload, using the configured default max age and the current time.
    ///
    /// # Example
    ///
    /// ```
    /// use timestamp_signer::Signer;
    ///
    /// let signer = Signer::new("my-secret");
    /// let token = signer.dumps(&vec!["a".to_string(), "b".to_string()]).unwrap();
    ///
    /// let roundtripped: Vec<String> = signer.loads(&token).unwrap();
    /// assert_eq!(roundtripped, vec!["a", "b"]);
    /// ```
    pub fn loads<T: DeserializeOwned>(&self, signed_value: &str) -> Result<T, Error> {
        self.loads_with_options(signed_value, &UnsignOptions::new())
    }

    /// Like [`Signer::loads`], but with explicit per-call options.
    pub fn loads_with_options<T: DeserializeOwned>(
        &self,
        signed_value: &str,
        options: &UnsignOptions,
    ) -> Result<T, Error> {
        let framed = self.unsign_with_options(signed_value, options)?;
        let data = payload::decode(&framed)?;
        Ok(serde_json::from_slice(&data)?)
    }
}

/// Per-call options for timestamped verification
///
/// Both knobs replace what would otherwise be mutable state on the signer: a
/// max age overriding the configured default, and a clock override standing
/// in for the current wall-clock time.
#[derive(Debug, Clone, Default)]
pub struct UnsignOptions {
    max_age: Option<u64>,
    now: Option<u64>,
}

impl UnsignOptions {
    /// Create options that defer to the signer's default max age and the
    /// current wall-clock time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the max age for this call, in seconds.
    ///
    /// A value of `0` disables expiry checking even when the signer carries a
    /// default max age.
    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    /// Override the clock used for age evaluation.
    pub fn now(mut self, timestamp: u64) -> Self {
        self.now = Some(timestamp);
        self
    }

    fn effective_max_age(&self, default: Option<u64>) -> Option<u64> {
        match self.max_age {
            Some(0) => None,
            Some(seconds) => Some(seconds),
            None => default,
        }
    }
}

/// Builder for [`Signer`]
#[derive(Clone)]
pub struct SignerBuilder {
    secret: Vec<u8>,
    salt: String,
    separator: char,
    default_max_age: Option<u64>,
}

impl SignerBuilder {
    /// Create a builder for the given secret.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
            salt: DEFAULT_SALT.to_string(),
            separator: DEFAULT_SEPARATOR,
            default_max_age: None,
        }
    }

    /// Set the key-derivation salt, replacing the library default.
    ///
    /// The salt separates signing contexts: two signers with the same secret
    /// but different salts never accept each other's tokens.
    pub fn salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = salt.into();
        self
    }

    /// Set the segment separator character.
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the default max age, in seconds, applied by timestamped
    /// verification when the caller does not override it.
    ///
    /// A value of `0` clears the default, disabling expiry checking.
    pub fn default_max_age(mut self, seconds: u64) -> Self {
        self.default_max_age = if seconds == 0 { None } else { Some(seconds) };
        self
    }

    /// Derive the key and build the signer.
    ///
    /// Fails with [`Error::InvalidSeparator`] when the separator is drawn
    /// from the base64url or base62 alphabets: right-anchored splitting
    /// relies on the separator never occurring inside the signature or
    /// timestamp segments.
    pub fn build(self) -> Result<Signer, Error> {
        if self.separator.is_ascii_alphanumeric()
            || self.separator == '-'
            || self.separator == '_'
        {
            return Err(Error::InvalidSeparator(self.separator));
        }

        Ok(Signer {
            key: crypto::derive_key(&self.secret, self.salt.as_bytes()),
            separator: self.separator,
            default_max_age: self.default_max_age,
        })
    }
}

impl fmt::Debug for SignerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignerBuilder")
            .field("secret", &"<redacted>")
            .field("salt", &self.salt)
            .field("separator", &self.separator)
            .field("default_max_age", &self.default_max_age)
            .finish()
    }
}
