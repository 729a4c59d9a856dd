use axum::http::{header::AUTHORIZATION, HeaderMap};

/// The credential scheme expected in the `Authorization` header.
///
/// Matched case-sensitively, as opposed to the standard `Bearer`/`Basic` schemes.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization` header was included in the request.
    ///
    /// A single variant so callers can tell "no credential supplied" apart from
    /// "credential supplied but malformed" by comparison instead of message matching.
    #[error("no authorization header included")]
    NoAuthHeaderIncluded,
    /// The `Authorization` header is present but does not parse as `ApiKey <key>`.
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Extracts the API key from the `Authorization` header.
///
/// The header value must have the shape `ApiKey <key>`. Anything after the
/// key's first space is ignored. The key itself is not validated here.
///
/// A trailing space with nothing behind it (`"ApiKey "`) yields an empty key,
/// not an error: the scheme did split off correctly, the remainder just
/// happens to be empty. Only a value with no space at all is malformed.
pub fn get_api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    let authorization = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::NoAuthHeaderIncluded)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;

    if authorization.is_empty() {
        return Err(AuthError::NoAuthHeaderIncluded);
    }

    let rest = match authorization.split_once(' ') {
        Some((API_KEY_SCHEME, rest)) => rest,
        _ => return Err(AuthError::MalformedHeader),
    };

    let key = match rest.split_once(' ') {
        Some((key, _)) => key,
        None => rest,
    };

    Ok(key.to_string())
}
