//! Deserializable configuration surface for building a [`Signer`]

use std::fmt;

use serde::Deserialize;

use crate::error::Error;
use crate::signer::Signer;

/// Signer configuration as an application would load it from a settings file.
///
/// Only `secret` is required; the remaining options fall back to the library
/// defaults. How the configuration is loaded (environment, TOML, JSON, a
/// framework settings layer) is up to the application — this type only
/// defines the recognized option surface and its conversion into a signer.
///
/// # Example
///
/// ```
/// use timestamp_signer::SignerConfig;
///
/// let config: SignerConfig = serde_json::from_str(
///     r#"{ "secret": "my-secret", "default_max_age": 3600 }"#,
/// ).unwrap();
///
/// let signer = config.into_signer().unwrap();
/// let token = signer.sign("hello");
/// assert_eq!(signer.unsign(&token).unwrap(), "hello");
/// ```
#[derive(Clone, Deserialize)]
pub struct SignerConfig {
    /// Shared secret the signing key is derived from
    pub secret: String,
    /// Key-derivation salt; `None` applies the library default
    #[serde(default)]
    pub salt: Option<String>,
    /// Segment separator; `None` applies the default `:`
    #[serde(default)]
    pub separator: Option<char>,
    /// Default max age in seconds; `None` or `0` disables expiry checking
    #[serde(default)]
    pub default_max_age: Option<u64>,
}

impl SignerConfig {
    /// Create a configuration with the given secret and all defaults.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            salt: None,
            separator: None,
            default_max_age: None,
        }
    }

    /// Build a [`Signer`] from this configuration.
    pub fn into_signer(self) -> Result<Signer, Error> {
        let mut builder = Signer::builder(self.secret.as_bytes());

        if let Some(salt) = self.salt {
            builder = builder.salt(salt);
        }
        if let Some(separator) = self.separator {
            builder = builder.separator(separator);
        }
        if let Some(seconds) = self.default_max_age {
            builder = builder.default_max_age(seconds);
        }

        builder.build()
    }
}

impl fmt::Debug for SignerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignerConfig")
            .field("secret", &"<redacted>")
            .field("salt", &self.salt)
            .field("separator", &self.separator)
            .field("default_max_age", &self.default_max_age)
            .finish()
    }
}
