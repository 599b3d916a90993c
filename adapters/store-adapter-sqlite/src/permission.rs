//! Permission grants and the authorization check

use sqlx::SqlitePool;

use crate::utils::*;
use contextkv_types::{prelude::*, types::Permission, utils::digest_token};

/// Grant a permission to a token on a context
pub(crate) async fn grant(
	db: &SqlitePool,
	token: &str,
	perm: Permission,
	context: &str,
) -> CkResult<()> {
	perm.check_scope(context)?;

	let digest = digest_token(token);
	let mut tx = db.begin().await.map_err(db_err)?;

	if !perm.is_admin() {
		let exists: Option<i64> = sqlx::query_scalar("SELECT 1 FROM contexts WHERE name = ?")
			.bind(context)
			.fetch_optional(&mut *tx)
			.await
			.map_err(db_err)?;
		if exists.is_none() {
			debug!("Grant {} on missing context {}", perm, context);
			return Err(Error::NotFound);
		}
	}

	// Unknown token trips the foreign key (NotFound), a repeated grant the
	// unique constraint (Conflict)
	sqlx::query("INSERT INTO permissions (token_digest, permission, context) VALUES (?, ?, ?)")
		.bind(digest.as_ref())
		.bind(perm.as_str())
		.bind(context)
		.execute(&mut *tx)
		.await
		.map_err(db_err)?;

	tx.commit().await.map_err(db_err)?;

	info!("Granted {} on {}", perm, context);
	Ok(())
}

/// Revoke a permission from a token
pub(crate) async fn revoke(
	db: &SqlitePool,
	token: &str,
	perm: Permission,
	context: &str,
) -> CkResult<()> {
	let res = sqlx::query(
		"DELETE FROM permissions WHERE token_digest = ? AND permission = ? AND context = ?",
	)
	.bind(digest_token(token).as_ref())
	.bind(perm.as_str())
	.bind(context)
	.execute(db)
	.await
	.map_err(db_err)?;

	require_affected(res.rows_affected())?;

	info!("Revoked {} on {}", perm, context);
	Ok(())
}

/// Succeed only if the exact (token, permission, context) grant exists
pub(crate) async fn check(
	db: &SqlitePool,
	token: &str,
	context: &str,
	perm: Permission,
) -> CkResult<()> {
	let row: Option<i64> = sqlx::query_scalar(
		"SELECT 1 FROM permissions WHERE token_digest = ? AND context = ? AND permission = ?
			LIMIT 1",
	)
	.bind(digest_token(token).as_ref())
	.bind(context)
	.bind(perm.as_str())
	.fetch_optional(db)
	.await
	.map_err(db_err)?;

	match row {
		Some(_) => Ok(()),
		None => Err(Error::Unauthorized),
	}
}

// vim: ts=4
