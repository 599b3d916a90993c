//! App state type

use std::sync::Arc;

use contextkv_types::store_adapter::StoreAdapter;

use crate::prelude::*;
use crate::{bootstrap, routes};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,

	pub store_adapter: Arc<dyn StoreAdapter>,
}

pub type App = Arc<AppState>;

#[derive(Debug)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
}

pub struct AppBuilder {
	opts: AppBuilderOpts,
	store_adapter: Option<Arc<dyn StoreAdapter>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder {
			opts: AppBuilderOpts { listen: "127.0.0.1:8080".into() },
			store_adapter: None,
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}

	// Adapters
	pub fn store_adapter(&mut self, store_adapter: Arc<dyn StoreAdapter>) -> &mut Self {
		self.store_adapter = Some(store_adapter);
		self
	}

	/// Assemble the app state without starting anything
	pub fn build(self) -> CkResult<App> {
		let store_adapter = self
			.store_adapter
			.ok_or_else(|| Error::ConfigError("no store adapter".into()))?;

		Ok(Arc::new(AppState { opts: self.opts, store_adapter }))
	}

	pub async fn run(self) -> CkResult<()> {
		init_logging();
		info!("contextkv V{}", VERSION);

		let app = self.build()?;

		bootstrap::bootstrap(&app).await?;

		let router = routes::init(app.clone());
		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
		info!("Listening on HTTP {}", app.opts.listen);
		axum::serve(listener, router).await?;

		Ok(())
	}
}

/// Install the global log subscriber, filtered by `RUST_LOG` (default `info`).
/// Later calls are no-ops.
pub fn init_logging() {
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
	let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
