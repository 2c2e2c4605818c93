//! Authorization header parsing
//!
//! Expected wire format:
//!
//! ```text
//! Authorization: ApiKey <token>
//! ```

use std::fmt;

use http::{HeaderMap, header};

/// Scheme keyword that must prefix the token (case-sensitive)
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Reasons the Authorization header could not produce an API key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No Authorization header present
    NoAuthHeader,
    /// Header present but not in `ApiKey <token>` form
    MalformedHeader,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NoAuthHeader => write!(f, "no authorization header included"),
            AuthError::MalformedHeader => write!(f, "malformed authorization header"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Extract the API key from the `Authorization` header
///
/// Only the first `Authorization` value is consulted. An empty value counts as
/// absent. The whitespace between scheme and token is consumed; the token
/// itself is returned verbatim.
pub fn extract_api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(v) if !v.is_empty() => {
            std::str::from_utf8(v.as_bytes()).map_err(|_| AuthError::MalformedHeader)?
        }
        _ => return Err(AuthError::NoAuthHeader),
    };

    let (scheme, rest) = value
        .split_once(|c: char| c.is_ascii_whitespace())
        .ok_or(AuthError::MalformedHeader)?;

    if scheme != API_KEY_SCHEME {
        return Err(AuthError::MalformedHeader);
    }

    let token = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
    if token.is_empty() {
        return Err(AuthError::MalformedHeader);
    }

    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_valid_api_key() {
        let headers = headers_with("ApiKey valid-api-key-123");
        assert_eq!(
            extract_api_key(&headers),
            Ok("valid-api-key-123".to_string())
        );
    }

    #[test]
    fn test_wrong_scheme_is_malformed() {
        let headers = headers_with("Bearer token-123");
        assert_eq!(extract_api_key(&headers), Err(AuthError::MalformedHeader));
    }

    #[test]
    fn test_scheme_without_token_is_malformed() {
        let headers = headers_with("ApiKey");
        assert_eq!(extract_api_key(&headers), Err(AuthError::MalformedHeader));
    }

    #[test]
    fn test_scheme_with_trailing_space_only_is_malformed() {
        let headers = headers_with("ApiKey   ");
        assert_eq!(extract_api_key(&headers), Err(AuthError::MalformedHeader));
    }

    #[test]
    fn test_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(extract_api_key(&headers), Err(AuthError::NoAuthHeader));
    }

    #[test]
    fn test_empty_header_counts_as_missing() {
        let headers = headers_with("");
        assert_eq!(extract_api_key(&headers), Err(AuthError::NoAuthHeader));
    }

    #[test]
    fn test_other_headers_are_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_static("abc"));
        assert_eq!(extract_api_key(&headers), Err(AuthError::NoAuthHeader));
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        for value in ["apikey abc", "APIKEY abc", "Apikey abc"] {
            let headers = headers_with(value);
            assert_eq!(
                extract_api_key(&headers),
                Err(AuthError::MalformedHeader),
                "{value}"
            );
        }
    }

    #[test]
    fn test_scheme_prefix_must_be_whole_word() {
        let headers = headers_with("ApiKeyabc");
        assert_eq!(extract_api_key(&headers), Err(AuthError::MalformedHeader));
    }

    #[test]
    fn test_header_name_lookup_is_case_insensitive() {
        for name in ["authorization", "AUTHORIZATION", "Authorization"] {
            let mut headers = HeaderMap::new();
            headers.insert(
                http::HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_static("ApiKey k1"),
            );
            assert_eq!(extract_api_key(&headers), Ok("k1".to_string()), "{name}");
        }
    }

    #[test]
    fn test_whitespace_run_between_scheme_and_token() {
        let headers = headers_with("ApiKey \t  abc");
        assert_eq!(extract_api_key(&headers), Ok("abc".to_string()));
    }

    #[test]
    fn test_token_tail_is_preserved() {
        let headers = headers_with("ApiKey abc def ");
        assert_eq!(extract_api_key(&headers), Ok("abc def ".to_string()));
    }

    #[test]
    fn test_first_value_wins() {
        let mut headers = HeaderMap::new();
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey first"));
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey second"));
        assert_eq!(extract_api_key(&headers), Ok("first".to_string()));
    }

    #[test]
    fn test_non_utf8_value_is_malformed() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"ApiKey \xff\xfe").unwrap(),
        );
        assert_eq!(extract_api_key(&headers), Err(AuthError::MalformedHeader));
    }

    #[test]
    fn test_utf8_token_is_returned_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes("ApiKey clé-123".as_bytes()).unwrap(),
        );
        assert_eq!(extract_api_key(&headers), Ok("clé-123".to_string()));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let headers = headers_with("ApiKey same-key");
        assert_eq!(extract_api_key(&headers), extract_api_key(&headers));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AuthError::NoAuthHeader.to_string(),
            "no authorization header included"
        );
        assert_eq!(
            AuthError::MalformedHeader.to_string(),
            "malformed authorization header"
        );
    }
}
