//! First-start provisioning of the administrative token

use crate::prelude::*;

/// Create the admin token if none exists yet.
///
/// Safe to run on every start. The plaintext of a newly created token is
/// written to the log exactly once; it cannot be recovered afterwards.
pub async fn bootstrap(app: &App) -> CkResult<()> {
	info!("Bootstrapping...");

	if let Some(token) = app.store_adapter.bootstrap_admin_token().await? {
		warn!("Admin token created: {}", token);
		warn!("Store it now, it will not be shown again");
	} else {
		let count = app.store_adapter.count_admin_tokens().await?;
		info!("Admin token already provisioned ({} admin tokens)", count);
	}

	Ok(())
}

// vim: ts=4
