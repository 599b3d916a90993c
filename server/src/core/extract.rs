use axum::{
	extract::FromRequestParts,
	http::{header, request::Parts},
};

use crate::prelude::*;

// Extractors //
//************//

// BearerToken //
//*************//
/// Plaintext token from the `Authorization: Bearer <token>` header.
///
/// Presence only: whether the token may do anything is decided by
/// [`crate::core::gate::authorize`].
#[derive(Clone)]
pub struct BearerToken(pub Box<str>);

impl std::fmt::Debug for BearerToken {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str("BearerToken(***)")
	}
}

impl<S> FromRequestParts<S> for BearerToken
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		let Some(value) = parts.headers.get(header::AUTHORIZATION) else {
			debug!("authorization header missing");
			return Err(Error::Unauthorized);
		};

		value
			.to_str()
			.ok()
			.and_then(parse_bearer)
			.map(|token| BearerToken(token.into()))
			.ok_or_else(|| {
				debug!("malformed authorization header");
				Error::Unauthorized
			})
	}
}

/// Extract the token from an `Authorization` header value. The scheme is matched
/// case-insensitively.
fn parse_bearer(header: &str) -> Option<&str> {
	let (scheme, token) = header.trim().split_once(' ')?;
	let token = token.trim();
	if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
		Some(token)
	} else {
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_bearer() {
		assert_eq!(parse_bearer("Bearer abc"), Some("abc"));
		assert_eq!(parse_bearer("bearer abc"), Some("abc"));
		assert_eq!(parse_bearer("BEARER  abc "), Some("abc"));
	}

	#[test]
	fn test_parse_bearer_rejects() {
		assert_eq!(parse_bearer("Bearer"), None);
		assert_eq!(parse_bearer("Bearer "), None);
		assert_eq!(parse_bearer("Basic dXNlcjpwYXNz"), None);
		assert_eq!(parse_bearer("abc"), None);
		assert_eq!(parse_bearer(""), None);
	}
}

// vim: ts=4
