//! Adapter that persists tokens, permissions, contexts and entries.
//!
//! The four stores share one backend so that cascading deletes (token →
//! permissions, context → entries) can run in a single transaction.
//! Implementations perform no authorization of their own: callers must pass
//! [`StoreAdapter::check_permission`] before invoking any other operation on
//! behalf of a request.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;
use crate::types::{Entry, Permission};

#[async_trait]
pub trait StoreAdapter: Debug + Send + Sync {
	/// # Tokens
	/// Creates a new token and returns its plaintext. This is the only time the
	/// plaintext is available.
	async fn create_token(&self) -> CkResult<Box<str>>;

	/// Checks whether a token is known
	async fn token_exists(&self, token: &str) -> CkResult<bool>;

	/// Deletes a token together with every permission granted to it
	async fn delete_token(&self, token: &str) -> CkResult<()>;

	/// Creates the administrative token if no token holds an administrative
	/// permission yet. Returns the plaintext of the created token, or `None` if
	/// one already existed.
	async fn bootstrap_admin_token(&self) -> CkResult<Option<Box<str>>>;

	/// Counts tokens holding at least one administrative permission
	async fn count_admin_tokens(&self) -> CkResult<u32>;

	/// # Permissions
	/// Grants a permission to a token on a context. A duplicate grant is a
	/// `Conflict`.
	async fn grant_permission(&self, token: &str, perm: Permission, context: &str)
	-> CkResult<()>;

	/// Revokes a previously granted permission
	async fn revoke_permission(
		&self,
		token: &str,
		perm: Permission,
		context: &str,
	) -> CkResult<()>;

	/// Succeeds only if exactly this (token, permission, context) grant exists,
	/// fails with `Unauthorized` otherwise.
	async fn check_permission(&self, token: &str, context: &str, perm: Permission)
	-> CkResult<()>;

	/// # Contexts
	async fn create_context(&self, name: &str) -> CkResult<Box<str>>;
	async fn read_context(&self, name: &str) -> CkResult<Box<str>>;

	/// Deletes a context together with its entries. Grants scoped to it are kept.
	async fn delete_context(&self, name: &str) -> CkResult<()>;

	/// # Entries
	async fn create_entry(&self, context: &str, key: &str, value: &str) -> CkResult<Entry>;
	async fn read_entry(&self, context: &str, key: &str) -> CkResult<Entry>;
	async fn update_entry(&self, context: &str, key: &str, value: &str) -> CkResult<Entry>;
	async fn delete_entry(&self, context: &str, key: &str) -> CkResult<()>;
}

// vim: ts=4
