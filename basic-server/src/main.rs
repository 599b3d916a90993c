use std::{env, path, sync::Arc};

use contextkv::{AppBuilder, core::app::init_logging};
use contextkv_store_adapter_sqlite::{DEFAULT_MAX_CONNECTIONS, StoreAdapterSqlite};
use contextkv_types::prelude::*;

pub struct Config {
	pub listen: Box<str>,
	pub db_dir: path::PathBuf,
	pub db_max_conn: u32,
}

impl Config {
	fn from_env() -> CkResult<Self> {
		let db_max_conn = match env::var("DB_MAX_CONN") {
			Ok(val) => val
				.parse::<u32>()
				.ok()
				.filter(|n| *n > 0)
				.ok_or_else(|| Error::ConfigError(format!("DB_MAX_CONN: invalid value {:?}", val)))?,
			Err(env::VarError::NotPresent) => DEFAULT_MAX_CONNECTIONS,
			Err(env::VarError::NotUnicode(_)) => {
				return Err(Error::ConfigError("DB_MAX_CONN: not unicode".into()));
			}
		};

		Ok(Config {
			listen: env::var("LISTEN").unwrap_or_else(|_| "127.0.0.1:8080".to_string()).into(),
			db_dir: path::PathBuf::from(env::var("DB_DIR").unwrap_or_else(|_| "./data".to_string())),
			db_max_conn,
		})
	}
}

#[tokio::main]
async fn main() -> CkResult<()> {
	init_logging();
	let config = Config::from_env()?;

	let store_adapter =
		Arc::new(StoreAdapterSqlite::new(config.db_dir.join("store.db"), config.db_max_conn).await?);

	let mut builder = AppBuilder::new();
	builder.listen(config.listen).store_adapter(store_adapter);
	builder.run().await
}

// vim: ts=4
