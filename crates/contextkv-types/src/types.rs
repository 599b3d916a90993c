//! Domain types: permissions, entries, context names

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::prelude::*;

/// Sentinel context for administrative grants. Not a real namespace.
pub const ADMIN_CONTEXT: &str = "ALL";

pub const CONTEXT_NAME_MIN_LEN: usize = 8;
pub const CONTEXT_NAME_MAX_LEN: usize = 255;

// Permission //
//************//
/// Closed set of permission names a token can be granted.
///
/// The four data-plane verbs are scoped to a real context; the `Adm*`
/// capabilities are only ever granted on [`ADMIN_CONTEXT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
	/// Create entry
	Post,
	/// Read entry
	Get,
	/// Update entry
	Put,
	/// Delete entry
	Delete,
	AdmTokenPost,
	AdmTokenDelete,
	AdmTokenGrant,
	AdmTokenRevoke,
	AdmContextPost,
	AdmContextGet,
	AdmContextDelete,
}

impl Permission {
	/// The full administrative set held by the bootstrap token
	pub const ADMIN: [Permission; 7] = [
		Permission::AdmTokenPost,
		Permission::AdmTokenDelete,
		Permission::AdmTokenGrant,
		Permission::AdmTokenRevoke,
		Permission::AdmContextPost,
		Permission::AdmContextGet,
		Permission::AdmContextDelete,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Permission::Post => "POST",
			Permission::Get => "GET",
			Permission::Put => "PUT",
			Permission::Delete => "DELETE",
			Permission::AdmTokenPost => "ADM_TOKEN_POST",
			Permission::AdmTokenDelete => "ADM_TOKEN_DELETE",
			Permission::AdmTokenGrant => "ADM_TOKEN_GRANT",
			Permission::AdmTokenRevoke => "ADM_TOKEN_REVOKE",
			Permission::AdmContextPost => "ADM_CONTEXT_POST",
			Permission::AdmContextGet => "ADM_CONTEXT_GET",
			Permission::AdmContextDelete => "ADM_CONTEXT_DELETE",
		}
	}

	pub fn is_admin(self) -> bool {
		!matches!(
			self,
			Permission::Post | Permission::Get | Permission::Put | Permission::Delete
		)
	}

	/// Check that the permission may be granted on `context`.
	///
	/// Administrative capabilities require the `ALL` sentinel, data-plane verbs
	/// require anything else. Existence of the context is checked by the store.
	pub fn check_scope(self, context: &str) -> CkResult<()> {
		match (self.is_admin(), context == ADMIN_CONTEXT) {
			(true, true) | (false, false) => Ok(()),
			(true, false) => Err(Error::ValidationError(format!(
				"permission {} can only be granted on context {}",
				self, ADMIN_CONTEXT
			))),
			(false, true) => Err(Error::ValidationError(format!(
				"permission {} cannot be granted on context {}",
				self, ADMIN_CONTEXT
			))),
		}
	}
}

impl fmt::Display for Permission {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Permission {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let perm = match s {
			"POST" => Permission::Post,
			"GET" => Permission::Get,
			"PUT" => Permission::Put,
			"DELETE" => Permission::Delete,
			"ADM_TOKEN_POST" => Permission::AdmTokenPost,
			"ADM_TOKEN_DELETE" => Permission::AdmTokenDelete,
			"ADM_TOKEN_GRANT" => Permission::AdmTokenGrant,
			"ADM_TOKEN_REVOKE" => Permission::AdmTokenRevoke,
			"ADM_CONTEXT_POST" => Permission::AdmContextPost,
			"ADM_CONTEXT_GET" => Permission::AdmContextGet,
			"ADM_CONTEXT_DELETE" => Permission::AdmContextDelete,
			_ => {
				return Err(Error::ValidationError(format!(
					"grant {} is not a valid permission",
					s
				)));
			}
		};
		Ok(perm)
	}
}

impl Serialize for Permission {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

// Entry //
//*******//
/// A single key/value pair within one context
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Entry {
	pub context: Box<str>,
	pub key: Box<str>,
	pub value: Box<str>,
}

/// Validate a context name on the administrative create path
pub fn validate_context_name(name: &str) -> CkResult<()> {
	let len = name.chars().count();
	if len < CONTEXT_NAME_MIN_LEN {
		return Err(Error::ValidationError(format!(
			"a context must have at least {} characters",
			CONTEXT_NAME_MIN_LEN
		)));
	}
	if len > CONTEXT_NAME_MAX_LEN {
		return Err(Error::ValidationError(format!(
			"a context must have at most {} characters",
			CONTEXT_NAME_MAX_LEN
		)));
	}
	if name.chars().any(char::is_control) {
		return Err(Error::ValidationError("a context must not contain control characters".into()));
	}
	Ok(())
}


// vim: ts=4
