//! Error type shared by the store adapters and the server.
//!
//! Every store operation returns `CkResult<T>`. The server maps each variant to an
//! HTTP status through the `IntoResponse` impl below.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub type CkResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Malformed input, disallowed permission name, invalid context name
	ValidationError(String),
	/// Missing or malformed bearer token, or the authorization check failed
	Unauthorized,
	/// Context, token, entry or permission absent when required present
	NotFound,
	/// Uniqueness violation on create or grant
	Conflict,
	/// Storage backend failure
	DbError,
	ConfigError(String),

	// externals
	Io(std::io::Error),
}

impl Error {
	fn code(&self) -> &'static str {
		match self {
			Error::ValidationError(_) => "E-VALIDATION",
			Error::Unauthorized => "E-AUTH-UNAUTH",
			Error::NotFound => "E-CORE-NOTFOUND",
			Error::Conflict => "E-CORE-CONFLICT",
			Error::DbError => "E-CORE-DBERR",
			Error::ConfigError(_) => "E-CORE-CONFIG",
			Error::Io(_) => "E-CORE-IO",
		}
	}

	fn status(&self) -> StatusCode {
		match self {
			Error::ValidationError(_) | Error::NotFound | Error::Conflict => {
				StatusCode::BAD_REQUEST
			}
			Error::Unauthorized => StatusCode::UNAUTHORIZED,
			Error::DbError | Error::ConfigError(_) | Error::Io(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::Unauthorized => write!(f, "not authorized"),
			Error::NotFound => write!(f, "not found"),
			Error::Conflict => write!(f, "already exists"),
			Error::DbError => write!(f, "storage error"),
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		let status = self.status();
		// Internal details stay in the log
		let message = if status.is_server_error() {
			"internal server error".to_string()
		} else {
			self.to_string()
		};
		let body = serde_json::json!({
			"error": {
				"code": self.code(),
				"message": message,
			}
		});

		(status, Json(body)).into_response()
	}
}


// vim: ts=4
