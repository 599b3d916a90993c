use axum::{
	Json, Router,
	routing::{get, post},
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::core::app::VERSION;
use crate::prelude::*;
use crate::{adm, con};

#[derive(Serialize)]
struct HealthRes {
	ok: bool,
	version: &'static str,
}

async fn get_health() -> Json<HealthRes> {
	Json(HealthRes { ok: true, version: VERSION })
}

fn init_adm() -> Router<App> {
	Router::new()
		.route(
			"/adm/context",
			post(adm::handler::post_context)
				.get(adm::handler::get_context)
				.delete(adm::handler::delete_context),
		)
		.route("/adm/token", post(adm::handler::post_token).delete(adm::handler::delete_token))
		.route(
			"/adm/permission",
			post(adm::handler::post_permission).delete(adm::handler::delete_permission),
		)
}

fn init_con() -> Router<App> {
	Router::new()
		.route("/con/{context}", post(con::handler::post_entry).put(con::handler::put_entry))
		.route(
			"/con/{context}/{key}",
			get(con::handler::get_entry).delete(con::handler::delete_entry),
		)
}

pub fn init(app: App) -> Router {
	Router::new()
		.route("/healthz", get(get_health))
		.merge(init_adm())
		.merge(init_con())
		.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
		.with_state(app)
}

// vim: ts=4
