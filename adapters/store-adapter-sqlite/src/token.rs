//! Token management
//!
//! Tokens are stored only as their digest. The plaintext leaves this module
//! exactly once, as the return value of `create_token` or `bootstrap_admin_token`.

use sqlx::{SqliteExecutor, SqlitePool};

use crate::utils::*;
use contextkv_types::{
	prelude::*,
	types::{ADMIN_CONTEXT, Permission},
	utils::{digest_token, random_token},
};

async fn insert_token<'e>(db: impl SqliteExecutor<'e>, digest: &str) -> CkResult<()> {
	sqlx::query("INSERT INTO tokens (token_digest) VALUES (?)")
		.bind(digest)
		.execute(db)
		.await
		.map_err(db_err)?;
	Ok(())
}

/// Create a new token, returning the plaintext
pub(crate) async fn create_token(db: &SqlitePool) -> CkResult<Box<str>> {
	let token = random_token();
	insert_token(db, &digest_token(&token)).await?;

	info!("Token created");
	Ok(token)
}

/// Check whether a token is known
pub(crate) async fn token_exists(db: &SqlitePool, token: &str) -> CkResult<bool> {
	let row: Option<i64> = sqlx::query_scalar("SELECT 1 FROM tokens WHERE token_digest = ?")
		.bind(digest_token(token).as_ref())
		.fetch_optional(db)
		.await
		.map_err(db_err)?;

	Ok(row.is_some())
}

/// Delete a token and all its permissions
pub(crate) async fn delete_token(db: &SqlitePool, token: &str) -> CkResult<()> {
	let digest = digest_token(token);
	let mut tx = db.begin().await.map_err(db_err)?;

	let revoked = sqlx::query("DELETE FROM permissions WHERE token_digest = ?")
		.bind(digest.as_ref())
		.execute(&mut *tx)
		.await
		.map_err(db_err)?
		.rows_affected();

	let res = sqlx::query("DELETE FROM tokens WHERE token_digest = ?")
		.bind(digest.as_ref())
		.execute(&mut *tx)
		.await
		.map_err(db_err)?;
	// Dropping the transaction rolls back the permission delete
	require_affected(res.rows_affected())?;

	tx.commit().await.map_err(db_err)?;

	info!("Token deleted with {} permissions", revoked);
	Ok(())
}

/// Create the administrative token unless one exists already.
///
/// Token creation and all administrative grants commit together, so a failure
/// never leaves a token holding a partial permission set.
pub(crate) async fn bootstrap_admin_token(db: &SqlitePool) -> CkResult<Option<Box<str>>> {
	let mut tx = db.begin().await.map_err(db_err)?;

	// Only administrative permissions can be scoped to the sentinel context
	let existing: Option<i64> =
		sqlx::query_scalar("SELECT 1 FROM permissions WHERE context = ? LIMIT 1")
			.bind(ADMIN_CONTEXT)
			.fetch_optional(&mut *tx)
			.await
			.map_err(db_err)?;

	if existing.is_some() {
		debug!("Admin token already exists, skipping bootstrap");
		return Ok(None);
	}

	let token = random_token();
	let digest = digest_token(&token);
	insert_token(&mut *tx, &digest).await?;

	for perm in Permission::ADMIN {
		sqlx::query("INSERT INTO permissions (token_digest, permission, context) VALUES (?, ?, ?)")
			.bind(digest.as_ref())
			.bind(perm.as_str())
			.bind(ADMIN_CONTEXT)
			.execute(&mut *tx)
			.await
			.map_err(db_err)?;
	}

	tx.commit().await.map_err(db_err)?;

	info!("Admin token created with {} permissions", Permission::ADMIN.len());
	Ok(Some(token))
}

/// Count distinct tokens holding an administrative permission
pub(crate) async fn count_admin_tokens(db: &SqlitePool) -> CkResult<u32> {
	let count: i64 =
		sqlx::query_scalar("SELECT COUNT(DISTINCT token_digest) FROM permissions WHERE context = ?")
			.bind(ADMIN_CONTEXT)
			.fetch_one(db)
			.await
			.map_err(db_err)?;

	Ok(u32::try_from(count).unwrap_or_default())
}

// vim: ts=4
