//! Request body decoding
//!
//! Bodies are read as raw bytes and decoded here, so that a malformed body is
//! reported as a validation error with the usual error envelope.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::prelude::*;

/// Body of the permission grant and revoke endpoints
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrantReq {
	pub token: Box<str>,
	pub grant: Box<str>,
	pub context: Box<str>,
}

/// Decode a JSON object holding exactly one string member, returned as
/// `(name, value)`. The member name is free-form.
pub fn parse_single_pair(body: &[u8]) -> CkResult<(Box<str>, Box<str>)> {
	let obj: Map<String, Value> = serde_json::from_slice(body)
		.map_err(|_| Error::ValidationError("body must be a JSON object".into()))?;

	let mut members = obj.into_iter();
	match (members.next(), members.next()) {
		(Some((name, Value::String(value))), None) => Ok((name.into(), value.into())),
		(Some(_), None) => Err(Error::ValidationError("value must be a string".into())),
		_ => Err(Error::ValidationError("body must have exactly one member".into())),
	}
}

pub fn parse_grant(body: &[u8]) -> CkResult<GrantReq> {
	serde_json::from_slice(body).map_err(|err| {
		debug!("Invalid grant body: {}", err);
		Error::ValidationError("body must be {\"token\", \"grant\", \"context\"}".into())
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_single_pair() {
		let (name, value) = parse_single_pair(br#"{"name": "tenant42x"}"#).unwrap();
		assert_eq!(name.as_ref(), "name");
		assert_eq!(value.as_ref(), "tenant42x");
	}

	#[test]
	fn test_single_pair_rejects() {
		let bodies: [&[u8]; 8] = [
			b"",
			b"not json",
			b"[\"a\"]",
			b"\"a\"",
			b"{}",
			br#"{"a": "1", "b": "2"}"#,
			br#"{"a": 1}"#,
			br#"{"a": null}"#,
		];
		for body in bodies {
			assert!(
				matches!(parse_single_pair(body), Err(Error::ValidationError(_))),
				"should reject {:?}",
				String::from_utf8_lossy(body)
			);
		}
	}

	#[test]
	fn test_grant() {
		let req = parse_grant(br#"{"token": "t", "grant": "GET", "context": "tenant42x"}"#)
			.unwrap();
		assert_eq!(req.token.as_ref(), "t");
		assert_eq!(req.grant.as_ref(), "GET");
		assert_eq!(req.context.as_ref(), "tenant42x");
	}

	#[test]
	fn test_grant_rejects() {
		assert!(parse_grant(br#"{"token": "t", "grant": "GET"}"#).is_err());
		assert!(parse_grant(br#"{"token": "t", "grant": 1, "context": "c"}"#).is_err());
		assert!(
			parse_grant(br#"{"token": "t", "grant": "GET", "context": "c", "x": "y"}"#).is_err()
		);
	}
}

// vim: ts=4
