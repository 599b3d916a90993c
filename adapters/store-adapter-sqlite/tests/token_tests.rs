//! Token and permission tests
//!
//! Tests token lifecycle, grants, revocation, the authorization check and the
//! admin token bootstrap.

use contextkv_store_adapter_sqlite::{DEFAULT_MAX_CONNECTIONS, StoreAdapterSqlite};
use contextkv_types::error::Error;
use contextkv_types::store_adapter::StoreAdapter;
use contextkv_types::types::{ADMIN_CONTEXT, Permission};
use tempfile::TempDir;

async fn create_test_adapter() -> (StoreAdapterSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let adapter =
		StoreAdapterSqlite::new(temp_dir.path().join("store.db"), DEFAULT_MAX_CONNECTIONS)
			.await
			.expect("Failed to create adapter");
	(adapter, temp_dir)
}

#[tokio::test]
async fn test_create_token_exists() {
	let (adapter, _temp) = create_test_adapter().await;

	let token = adapter.create_token().await.expect("Should create token");

	assert!(adapter.token_exists(&token).await.unwrap());
	assert!(!adapter.token_exists("not-a-token").await.unwrap());
}

#[tokio::test]
async fn test_tokens_are_unique() {
	let (adapter, _temp) = create_test_adapter().await;

	let t1 = adapter.create_token().await.unwrap();
	let t2 = adapter.create_token().await.unwrap();

	assert_ne!(t1, t2);
}

#[tokio::test]
async fn test_delete_token() {
	let (adapter, _temp) = create_test_adapter().await;
	let token = adapter.create_token().await.unwrap();

	adapter.delete_token(&token).await.expect("Should delete token");

	assert!(!adapter.token_exists(&token).await.unwrap());
	assert!(matches!(adapter.delete_token(&token).await, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_delete_unknown_token() {
	let (adapter, _temp) = create_test_adapter().await;

	assert!(matches!(adapter.delete_token("nope").await, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_delete_token_cascades_permissions() {
	let (adapter, _temp) = create_test_adapter().await;
	let token = adapter.create_token().await.unwrap();
	adapter.create_context("tenant42x").await.unwrap();
	adapter.grant_permission(&token, Permission::Get, "tenant42x").await.unwrap();

	adapter.delete_token(&token).await.unwrap();

	assert!(matches!(
		adapter.check_permission(&token, "tenant42x", Permission::Get).await,
		Err(Error::Unauthorized)
	));
	// The grant went with the token, so a revoke has nothing to remove
	assert!(matches!(
		adapter.revoke_permission(&token, Permission::Get, "tenant42x").await,
		Err(Error::NotFound)
	));
}

#[tokio::test]
async fn test_grant_then_check() {
	let (adapter, _temp) = create_test_adapter().await;
	let token = adapter.create_token().await.unwrap();
	adapter.create_context("tenant42x").await.unwrap();

	adapter.grant_permission(&token, Permission::Post, "tenant42x").await.unwrap();

	assert!(adapter.check_permission(&token, "tenant42x", Permission::Post).await.is_ok());
	// Only the exact triple authorizes
	assert!(matches!(
		adapter.check_permission(&token, "tenant42x", Permission::Get).await,
		Err(Error::Unauthorized)
	));
	assert!(matches!(
		adapter.check_permission(&token, "tenant43x", Permission::Post).await,
		Err(Error::Unauthorized)
	));
	assert!(matches!(
		adapter.check_permission("other", "tenant42x", Permission::Post).await,
		Err(Error::Unauthorized)
	));
}

#[tokio::test]
async fn test_duplicate_grant_conflicts() {
	let (adapter, _temp) = create_test_adapter().await;
	let token = adapter.create_token().await.unwrap();
	adapter.create_context("tenant42x").await.unwrap();

	adapter.grant_permission(&token, Permission::Put, "tenant42x").await.unwrap();
	let res = adapter.grant_permission(&token, Permission::Put, "tenant42x").await;

	assert!(matches!(res, Err(Error::Conflict)));
	// The original grant is untouched
	assert!(adapter.check_permission(&token, "tenant42x", Permission::Put).await.is_ok());
}

#[tokio::test]
async fn test_revoke_restores_state() {
	let (adapter, _temp) = create_test_adapter().await;
	let token = adapter.create_token().await.unwrap();
	adapter.create_context("tenant42x").await.unwrap();

	adapter.grant_permission(&token, Permission::Delete, "tenant42x").await.unwrap();
	adapter.revoke_permission(&token, Permission::Delete, "tenant42x").await.unwrap();

	assert!(matches!(
		adapter.check_permission(&token, "tenant42x", Permission::Delete).await,
		Err(Error::Unauthorized)
	));
	assert!(matches!(
		adapter.revoke_permission(&token, Permission::Delete, "tenant42x").await,
		Err(Error::NotFound)
	));
}

#[tokio::test]
async fn test_grant_on_missing_context() {
	let (adapter, _temp) = create_test_adapter().await;
	let token = adapter.create_token().await.unwrap();

	let res = adapter.grant_permission(&token, Permission::Get, "missing-context").await;

	assert!(matches!(res, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_grant_to_unknown_token() {
	let (adapter, _temp) = create_test_adapter().await;
	adapter.create_context("tenant42x").await.unwrap();

	let res = adapter.grant_permission("unknown", Permission::Get, "tenant42x").await;

	assert!(matches!(res, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_grant_scope_validation() {
	let (adapter, _temp) = create_test_adapter().await;
	let token = adapter.create_token().await.unwrap();
	adapter.create_context("tenant42x").await.unwrap();

	assert!(matches!(
		adapter.grant_permission(&token, Permission::AdmTokenPost, "tenant42x").await,
		Err(Error::ValidationError(_))
	));
	assert!(matches!(
		adapter.grant_permission(&token, Permission::Get, ADMIN_CONTEXT).await,
		Err(Error::ValidationError(_))
	));
	assert!(adapter.grant_permission(&token, Permission::AdmTokenPost, ADMIN_CONTEXT).await.is_ok());
}

#[tokio::test]
async fn test_bootstrap_admin_token() {
	let (adapter, _temp) = create_test_adapter().await;

	let token = adapter
		.bootstrap_admin_token()
		.await
		.unwrap()
		.expect("First bootstrap should create a token");

	for perm in Permission::ADMIN {
		assert!(
			adapter.check_permission(&token, ADMIN_CONTEXT, perm).await.is_ok(),
			"Admin token should hold {}",
			perm
		);
	}
	assert_eq!(adapter.count_admin_tokens().await.unwrap(), 1);
}

#[tokio::test]
async fn test_bootstrap_is_idempotent() {
	let (adapter, _temp) = create_test_adapter().await;

	let first = adapter.bootstrap_admin_token().await.unwrap();
	let second = adapter.bootstrap_admin_token().await.unwrap();

	assert!(first.is_some());
	assert!(second.is_none());
	assert_eq!(adapter.count_admin_tokens().await.unwrap(), 1);
}

#[tokio::test]
async fn test_bootstrap_survives_reopen() {
	let temp_dir = TempDir::new().unwrap();
	let db_path = temp_dir.path().join("store.db");

	let adapter1 = StoreAdapterSqlite::new(&db_path, 1).await.unwrap();
	assert!(adapter1.bootstrap_admin_token().await.unwrap().is_some());
	drop(adapter1);

	let adapter2 = StoreAdapterSqlite::new(&db_path, 1).await.unwrap();
	assert!(adapter2.bootstrap_admin_token().await.unwrap().is_none());
	assert_eq!(adapter2.count_admin_tokens().await.unwrap(), 1);
}

#[tokio::test]
async fn test_bootstrap_skipped_when_admin_granted() {
	let (adapter, _temp) = create_test_adapter().await;
	let token = adapter.create_token().await.unwrap();
	adapter.grant_permission(&token, Permission::AdmContextGet, ADMIN_CONTEXT).await.unwrap();

	assert!(adapter.bootstrap_admin_token().await.unwrap().is_none());
	assert_eq!(adapter.count_admin_tokens().await.unwrap(), 1);
}

// vim: ts=4
