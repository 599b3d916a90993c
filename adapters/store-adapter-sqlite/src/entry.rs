//! Key/value entries scoped to a context

use sqlx::SqlitePool;

use crate::utils::*;
use contextkv_types::{prelude::*, types::Entry};

/// Row type for entry reads (context, key, value)
type EntryRow = (String, String, String);

/// Create an entry. Fails with NotFound if the context does not exist and with
/// Conflict if the key is already taken.
pub(crate) async fn create(
	db: &SqlitePool,
	context: &str,
	key: &str,
	value: &str,
) -> CkResult<Entry> {
	sqlx::query("INSERT INTO entries (context, key, value) VALUES (?, ?, ?)")
		.bind(context)
		.bind(key)
		.bind(value)
		.execute(db)
		.await
		.map_err(db_err)?;

	debug!("Entry created in {}", context);
	Ok(Entry { context: context.into(), key: key.into(), value: value.into() })
}

/// Read an entry
pub(crate) async fn read(db: &SqlitePool, context: &str, key: &str) -> CkResult<Entry> {
	let row: Option<EntryRow> =
		sqlx::query_as("SELECT context, key, value FROM entries WHERE context = ? AND key = ?")
			.bind(context)
			.bind(key)
			.fetch_optional(db)
			.await
			.map_err(db_err)?;

	let (context, key, value) = row.ok_or(Error::NotFound)?;
	Ok(Entry { context: context.into(), key: key.into(), value: value.into() })
}

/// Update the value of an existing entry
pub(crate) async fn update(
	db: &SqlitePool,
	context: &str,
	key: &str,
	value: &str,
) -> CkResult<Entry> {
	let res = sqlx::query(
		"UPDATE entries SET value = ?, updated_at = unixepoch() WHERE context = ? AND key = ?",
	)
	.bind(value)
	.bind(context)
	.bind(key)
	.execute(db)
	.await
	.map_err(db_err)?;
	require_affected(res.rows_affected())?;

	debug!("Entry updated in {}", context);
	Ok(Entry { context: context.into(), key: key.into(), value: value.into() })
}

/// Delete an entry
pub(crate) async fn delete(db: &SqlitePool, context: &str, key: &str) -> CkResult<()> {
	let res = sqlx::query("DELETE FROM entries WHERE context = ? AND key = ?")
		.bind(context)
		.bind(key)
		.execute(db)
		.await
		.map_err(db_err)?;
	require_affected(res.rows_affected())?;

	debug!("Entry deleted in {}", context);
	Ok(())
}

// vim: ts=4
