//! Context (namespace) registry
//!
//! All contexts share the `entries` table. A context name is only ever bound as a
//! query parameter, never spliced into SQL.

use sqlx::SqlitePool;

use crate::utils::*;
use contextkv_types::{prelude::*, types::validate_context_name};

/// Create a context
pub(crate) async fn create(db: &SqlitePool, name: &str) -> CkResult<Box<str>> {
	validate_context_name(name)?;

	sqlx::query("INSERT INTO contexts (name) VALUES (?)")
		.bind(name)
		.execute(db)
		.await
		.map_err(db_err)?;

	info!("Context created: {}", name);
	Ok(name.into())
}

/// Read a context, failing with NotFound if it does not exist
pub(crate) async fn read(db: &SqlitePool, name: &str) -> CkResult<Box<str>> {
	let name: Option<String> = sqlx::query_scalar("SELECT name FROM contexts WHERE name = ?")
		.bind(name)
		.fetch_optional(db)
		.await
		.map_err(db_err)?;

	name.map(Into::into).ok_or(Error::NotFound)
}

/// Delete a context together with its entries.
///
/// Grants scoped to the context are kept, so a former holder reading a key
/// gets NotFound rather than Unauthorized.
pub(crate) async fn delete(db: &SqlitePool, name: &str) -> CkResult<()> {
	let mut tx = db.begin().await.map_err(db_err)?;

	let entries = sqlx::query("DELETE FROM entries WHERE context = ?")
		.bind(name)
		.execute(&mut *tx)
		.await
		.map_err(db_err)?
		.rows_affected();

	let res = sqlx::query("DELETE FROM contexts WHERE name = ?")
		.bind(name)
		.execute(&mut *tx)
		.await
		.map_err(db_err)?;
	require_affected(res.rows_affected())?;

	tx.commit().await.map_err(db_err)?;

	info!("Context deleted: {} ({} entries)", name, entries);
	Ok(())
}

// vim: ts=4
