//! Utility functions for database operations

use contextkv_types::prelude::*;

/// Log database errors
pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Classify a sqlx error into the store error taxonomy.
///
/// Constraint violations are expected outcomes of racing or repeated requests and
/// are not logged. Everything else is a backend failure.
pub(crate) fn db_err(err: sqlx::Error) -> Error {
	match &err {
		sqlx::Error::RowNotFound => Error::NotFound,
		sqlx::Error::Database(db_err) if db_err.is_unique_violation() => Error::Conflict,
		sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => Error::NotFound,
		_ => {
			inspect(&err);
			Error::DbError
		}
	}
}

/// Turn an affected-rows count into the existence signal used by updates and deletes
pub(crate) fn require_affected(rows_affected: u64) -> CkResult<()> {
	if rows_affected == 0 { Err(Error::NotFound) } else { Ok(()) }
}

// vim: ts=4
