//! Token wire format and expiry evaluation
//!
//! A token is `value SEP signature` or, when signed with a timestamp,
//! `value SEP base62(timestamp) SEP signature`. The caller-supplied value may
//! itself contain the separator character; the signature and base62 segments
//! cannot, since their alphabets exclude it. Splitting is therefore anchored
//! at the **last** separator occurrence and performed exactly once per layer,
//! mirroring the single append performed during signing. It is never
//! recursive beyond the two fixed layers.

use crate::error::Error;

/// Split `input` at the last occurrence of `sep`.
pub fn split_last(input: &str, sep: char) -> Option<(&str, &str)> {
    input
        .rfind(sep)
        .map(|at| (&input[..at], &input[at + sep.len_utf8()..]))
}

/// Split a presented token into its body and signature segments.
///
/// Fails with [`Error::MalformedToken`] when the separator does not occur in
/// the token at all.
pub fn parse(token: &str, sep: char) -> Result<(&str, &str), Error> {
    split_last(token, sep).ok_or(Error::MalformedToken)
}

/// Append a base62-encoded timestamp segment to a value.
pub fn append_timestamp(value: &str, sep: char, timestamp: u64) -> String {
    format!("{value}{sep}{}", base62::encode(timestamp))
}

/// Decode a base62 timestamp segment.
///
/// A segment containing out-of-alphabet characters or overflowing a `u64` is
/// treated as a forged or corrupted token and surfaces as
/// [`Error::BadSignature`], matching the behavior of the schemes this format
/// interoperates with.
pub fn decode_timestamp(segment: &str) -> Result<u64, Error> {
    let decoded = base62::decode(segment).map_err(|_| Error::BadSignature)?;
    u64::try_from(decoded).map_err(|_| Error::BadSignature)
}

/// Check an embedded timestamp against a max age.
///
/// With no max age configured every timestamp passes. Timestamps from the
/// future (negative age) are accepted.
pub fn check_age(timestamp: u64, max_age: Option<u64>, now: u64) -> Result<(), Error> {
    let Some(max_age) = max_age else {
        return Ok(());
    };

    let age = i128::from(now) - i128::from(timestamp);
    if age > i128::from(max_age) {
        return Err(Error::Expired);
    }

    Ok(())
}
