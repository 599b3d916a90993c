//! Database schema initialization and migrations

use sqlx::{Sqlite, SqlitePool, Transaction};

/// Get the current database version from vars table
async fn get_db_version(tx: &mut Transaction<'_, Sqlite>) -> i64 {
	sqlx::query_scalar::<_, String>("SELECT value FROM vars WHERE key = 'db_version'")
		.fetch_optional(&mut **tx)
		.await
		.ok()
		.flatten()
		.and_then(|v| v.parse().ok())
		.unwrap_or(0)
}

/// Set the database version in vars table
async fn set_db_version(tx: &mut Transaction<'_, Sqlite>, version: i64) -> Result<(), sqlx::Error> {
	sqlx::query("INSERT OR REPLACE INTO vars (key, value) VALUES ('db_version', ?)")
		.bind(version.to_string())
		.execute(&mut **tx)
		.await?;
	Ok(())
}

// Current schema version - update this when adding new migrations
const CURRENT_DB_VERSION: i64 = 1;

/// Initialize the database schema and run migrations
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Create vars table first (needed for version tracking)
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS vars (
		key text NOT NULL,
		value text NOT NULL,
		created_at INTEGER DEFAULT (unixepoch()),
		updated_at INTEGER DEFAULT (unixepoch()),
		PRIMARY KEY(key)
	)",
	)
	.execute(&mut *tx)
	.await?;

	let version = get_db_version(&mut tx).await;

	// Schema creation - safe to run every time (uses IF NOT EXISTS)

	// Contexts
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS contexts (
			name text NOT NULL,
			created_at INTEGER DEFAULT (unixepoch()),
			PRIMARY KEY(name)
		)",
	)
	.execute(&mut *tx)
	.await?;

	// Tokens (digest only, never the plaintext)
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS tokens (
			token_digest text NOT NULL,
			created_at INTEGER DEFAULT (unixepoch()),
			PRIMARY KEY(token_digest)
		)",
	)
	.execute(&mut *tx)
	.await?;

	// Permissions
	//
	// No foreign key on context: the 'ALL' sentinel is not a row of contexts.
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS permissions (
			token_digest text NOT NULL REFERENCES tokens(token_digest) ON DELETE CASCADE,
			permission text NOT NULL,
			context text NOT NULL,
			created_at INTEGER DEFAULT (unixepoch()),
			UNIQUE(token_digest, permission, context)
		)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_permissions_context ON permissions(context)")
		.execute(&mut *tx)
		.await?;

	// Entries
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS entries (
			context text NOT NULL REFERENCES contexts(name) ON DELETE CASCADE,
			key text NOT NULL,
			value text NOT NULL,
			created_at INTEGER DEFAULT (unixepoch()),
			updated_at INTEGER DEFAULT (unixepoch()),
			PRIMARY KEY(context, key)
		)",
	)
	.execute(&mut *tx)
	.await?;

	// Migrations
	//************
	if version < CURRENT_DB_VERSION {
		set_db_version(&mut tx, CURRENT_DB_VERSION).await?;
	}

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
