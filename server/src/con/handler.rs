use axum::{
	Json,
	body::Bytes,
	extract::{Path, State},
	http::StatusCode,
};
use serde::Serialize;

use contextkv_types::types::{Entry, Permission};

use crate::core::{BearerToken, gate, request};
use crate::prelude::*;

/// Decode the `{"<key>": "<value>"}` body of the entry write endpoints
fn parse_entry_body(body: &[u8]) -> CkResult<(Box<str>, Box<str>)> {
	let (key, value) = request::parse_single_pair(body)?;
	// Would be unreachable through /con/{context}/{key}
	if key.is_empty() {
		return Err(Error::ValidationError("key must not be empty".into()));
	}
	Ok((key, value))
}

#[derive(Serialize)]
pub struct DeletedEntryRes {
	pub context: Box<str>,
	pub key: Box<str>,
}

/// # POST /con/{context}
/// Creates the entry given as the single member of the body
pub async fn post_entry(
	State(app): State<App>,
	BearerToken(token): BearerToken,
	Path(context): Path<String>,
	body: Bytes,
) -> CkResult<(StatusCode, Json<Entry>)> {
	let (key, value) = parse_entry_body(&body)?;
	gate::authorize(&app, &token, &context, Permission::Post).await?;

	let entry = app.store_adapter.create_entry(&context, &key, &value).await?;

	Ok((StatusCode::CREATED, Json(entry)))
}

/// # PUT /con/{context}
/// Replaces the value of an existing entry
pub async fn put_entry(
	State(app): State<App>,
	BearerToken(token): BearerToken,
	Path(context): Path<String>,
	body: Bytes,
) -> CkResult<(StatusCode, Json<Entry>)> {
	let (key, value) = parse_entry_body(&body)?;
	gate::authorize(&app, &token, &context, Permission::Put).await?;

	let entry = app.store_adapter.update_entry(&context, &key, &value).await?;

	Ok((StatusCode::OK, Json(entry)))
}

/// # GET /con/{context}/{key}
pub async fn get_entry(
	State(app): State<App>,
	BearerToken(token): BearerToken,
	Path((context, key)): Path<(String, String)>,
) -> CkResult<(StatusCode, Json<Entry>)> {
	gate::authorize(&app, &token, &context, Permission::Get).await?;

	let entry = app.store_adapter.read_entry(&context, &key).await?;

	Ok((StatusCode::OK, Json(entry)))
}

/// # DELETE /con/{context}/{key}
pub async fn delete_entry(
	State(app): State<App>,
	BearerToken(token): BearerToken,
	Path((context, key)): Path<(String, String)>,
) -> CkResult<(StatusCode, Json<DeletedEntryRes>)> {
	gate::authorize(&app, &token, &context, Permission::Delete).await?;

	app.store_adapter.delete_entry(&context, &key).await?;

	Ok((StatusCode::OK, Json(DeletedEntryRes { context: context.into(), key: key.into() })))
}


// vim: ts=4
