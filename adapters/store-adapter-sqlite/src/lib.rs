//! SQLite store adapter for contextkv.
//!
//! One database file holds the token digests, the permission relation, the
//! context registry and the shared entry table. Every operation checks a
//! connection out of the pool for the duration of one statement or
//! transaction.

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;
use std::time::Duration;

use contextkv_types::{
	prelude::*,
	store_adapter::StoreAdapter,
	types::{Entry, Permission},
};

mod context;
mod entry;
mod permission;
mod schema;
mod token;
mod utils;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
pub struct StoreAdapterSqlite {
	db: SqlitePool,
}

impl StoreAdapterSqlite {
	/// Open (or create) the database at `path` and initialize the schema
	pub async fn new(path: impl AsRef<Path>, max_connections: u32) -> CkResult<Self> {
		let path = path.as_ref();
		if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
			tokio::fs::create_dir_all(dir).await?;
		}

		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path)
			.create_if_missing(true)
			.foreign_keys(true)
			.busy_timeout(BUSY_TIMEOUT)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(max_connections.max(1))
			.connect_with(opts)
			.await
			.inspect_err(|err| error!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| error!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		info!("Store opened at {}", path.display());
		Ok(Self { db })
	}
}

#[async_trait]
impl StoreAdapter for StoreAdapterSqlite {
	// Tokens
	//********
	async fn create_token(&self) -> CkResult<Box<str>> {
		token::create_token(&self.db).await
	}

	async fn token_exists(&self, token: &str) -> CkResult<bool> {
		token::token_exists(&self.db, token).await
	}

	async fn delete_token(&self, token: &str) -> CkResult<()> {
		token::delete_token(&self.db, token).await
	}

	async fn bootstrap_admin_token(&self) -> CkResult<Option<Box<str>>> {
		token::bootstrap_admin_token(&self.db).await
	}

	async fn count_admin_tokens(&self) -> CkResult<u32> {
		token::count_admin_tokens(&self.db).await
	}

	// Permissions
	//*************
	async fn grant_permission(
		&self,
		token: &str,
		perm: Permission,
		context: &str,
	) -> CkResult<()> {
		permission::grant(&self.db, token, perm, context).await
	}

	async fn revoke_permission(
		&self,
		token: &str,
		perm: Permission,
		context: &str,
	) -> CkResult<()> {
		permission::revoke(&self.db, token, perm, context).await
	}

	async fn check_permission(
		&self,
		token: &str,
		context: &str,
		perm: Permission,
	) -> CkResult<()> {
		permission::check(&self.db, token, context, perm).await
	}

	// Contexts
	//**********
	async fn create_context(&self, name: &str) -> CkResult<Box<str>> {
		context::create(&self.db, name).await
	}

	async fn read_context(&self, name: &str) -> CkResult<Box<str>> {
		context::read(&self.db, name).await
	}

	async fn delete_context(&self, name: &str) -> CkResult<()> {
		context::delete(&self.db, name).await
	}

	// Entries
	//*********
	async fn create_entry(&self, context: &str, key: &str, value: &str) -> CkResult<Entry> {
		entry::create(&self.db, context, key, value).await
	}

	async fn read_entry(&self, context: &str, key: &str) -> CkResult<Entry> {
		entry::read(&self.db, context, key).await
	}

	async fn update_entry(&self, context: &str, key: &str, value: &str) -> CkResult<Entry> {
		entry::update(&self.db, context, key, value).await
	}

	async fn delete_entry(&self, context: &str, key: &str) -> CkResult<()> {
		entry::delete(&self.db, context, key).await
	}
}

// vim: ts=4
