//! Key derivation and HMAC signature computation
//!
//! The signing key is derived once per [`Signer`](crate::Signer) as
//! `SHA1(salt || "signer" || secret)` and the raw digest bytes are used as the
//! HMAC-SHA1 key. Signatures are rendered as unpadded base64url text, which
//! keeps them free of characters requiring URL escaping and guarantees the
//! token separator can never occur inside a signature segment.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha1::{Digest, Sha1};
use subtle::ConstantTimeEq;

use crate::constants::KEY_DERIVATION_CONTEXT;

type HmacSha1 = Hmac<Sha1>;

/// Length in bytes of the derived signing key (a raw SHA-1 digest)
pub const KEY_LENGTH: usize = 20;

/// Derive the signing key from a secret and a salt.
///
/// Deterministic, with no error conditions: both inputs are arbitrary byte
/// strings, including empty ones. The salt separates signing contexts so the
/// same secret can be reused for unrelated purposes without signature
/// collisions.
pub fn derive_key(secret: &[u8], salt: &[u8]) -> [u8; KEY_LENGTH] {
    let mut hasher = Sha1::new();
    hasher.update(salt);
    hasher.update(KEY_DERIVATION_CONTEXT.as_bytes());
    hasher.update(secret);
    hasher.finalize().into()
}

/// Compute the signature of `value` under `key`.
///
/// Returns `base64url_nopad(HMAC-SHA1(key, value))`: always 27 characters
/// drawn from `[A-Za-z0-9_-]`, never containing `+`, `/`, or `=`.
pub fn signature(value: &[u8], key: &[u8]) -> String {
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(value);
    URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
}

/// Verify a presented signature against the one recomputed for `value`.
///
/// The comparison runs in constant time via [`subtle::ConstantTimeEq`] so an
/// attacker cannot recover a valid signature byte by byte through timing
/// measurements. Signature length is not secret.
pub fn verify(value: &[u8], presented: &str, key: &[u8]) -> bool {
    let expected = signature(value, key);
    expected.as_bytes().ct_eq(presented.as_bytes()).into()
}
