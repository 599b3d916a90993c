use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use serde::Serialize;

use contextkv_types::types::{ADMIN_CONTEXT, Permission};

use crate::core::{BearerToken, gate, request};
use crate::prelude::*;

#[derive(Serialize)]
pub struct ContextRes {
	pub context: Box<str>,
}

#[derive(Serialize)]
pub struct TokenRes {
	pub token: Box<str>,
}

#[derive(Serialize)]
pub struct EmptyRes {}

#[derive(Serialize)]
pub struct PermissionRes {
	pub token: Box<str>,
	pub permission: Permission,
	pub context: Box<str>,
}

// Contexts
//**********

/// # POST /adm/context
pub async fn post_context(
	State(app): State<App>,
	BearerToken(token): BearerToken,
	body: Bytes,
) -> CkResult<(StatusCode, Json<ContextRes>)> {
	let (_, name) = request::parse_single_pair(&body)?;
	gate::authorize(&app, &token, ADMIN_CONTEXT, Permission::AdmContextPost).await?;

	let context = app.store_adapter.create_context(&name).await?;

	Ok((StatusCode::CREATED, Json(ContextRes { context })))
}

/// # GET /adm/context
pub async fn get_context(
	State(app): State<App>,
	BearerToken(token): BearerToken,
	body: Bytes,
) -> CkResult<(StatusCode, Json<ContextRes>)> {
	let (_, name) = request::parse_single_pair(&body)?;
	gate::authorize(&app, &token, ADMIN_CONTEXT, Permission::AdmContextGet).await?;

	let context = app.store_adapter.read_context(&name).await?;

	Ok((StatusCode::OK, Json(ContextRes { context })))
}

/// # DELETE /adm/context
pub async fn delete_context(
	State(app): State<App>,
	BearerToken(token): BearerToken,
	body: Bytes,
) -> CkResult<(StatusCode, Json<ContextRes>)> {
	let (_, name) = request::parse_single_pair(&body)?;
	gate::authorize(&app, &token, ADMIN_CONTEXT, Permission::AdmContextDelete).await?;

	app.store_adapter.delete_context(&name).await?;

	Ok((StatusCode::OK, Json(ContextRes { context: name })))
}

// Tokens
//********

/// # POST /adm/token
pub async fn post_token(
	State(app): State<App>,
	BearerToken(token): BearerToken,
) -> CkResult<(StatusCode, Json<TokenRes>)> {
	gate::authorize(&app, &token, ADMIN_CONTEXT, Permission::AdmTokenPost).await?;

	let token = app.store_adapter.create_token().await?;

	Ok((StatusCode::CREATED, Json(TokenRes { token })))
}

/// # DELETE /adm/token
pub async fn delete_token(
	State(app): State<App>,
	BearerToken(token): BearerToken,
	body: Bytes,
) -> CkResult<(StatusCode, Json<EmptyRes>)> {
	let (_, target) = request::parse_single_pair(&body)?;
	gate::authorize(&app, &token, ADMIN_CONTEXT, Permission::AdmTokenDelete).await?;

	app.store_adapter.delete_token(&target).await?;

	Ok((StatusCode::OK, Json(EmptyRes {})))
}

// Permissions
//*************

/// # POST /adm/permission
pub async fn post_permission(
	State(app): State<App>,
	BearerToken(token): BearerToken,
	body: Bytes,
) -> CkResult<(StatusCode, Json<PermissionRes>)> {
	let req = request::parse_grant(&body)?;
	gate::authorize(&app, &token, ADMIN_CONTEXT, Permission::AdmTokenGrant).await?;

	let permission: Permission = req.grant.parse()?;
	app.store_adapter.grant_permission(&req.token, permission, &req.context).await?;

	Ok((
		StatusCode::CREATED,
		Json(PermissionRes { token: req.token, permission, context: req.context }),
	))
}

/// # DELETE /adm/permission
pub async fn delete_permission(
	State(app): State<App>,
	BearerToken(token): BearerToken,
	body: Bytes,
) -> CkResult<(StatusCode, Json<PermissionRes>)> {
	let req = request::parse_grant(&body)?;
	gate::authorize(&app, &token, ADMIN_CONTEXT, Permission::AdmTokenRevoke).await?;

	let permission: Permission = req.grant.parse()?;
	app.store_adapter.revoke_permission(&req.token, permission, &req.context).await?;

	Ok((StatusCode::OK, Json(PermissionRes { token: req.token, permission, context: req.context })))
}

// vim: ts=4
