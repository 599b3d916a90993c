//! Authorization gate
//!
//! Every handler calls [`authorize`] after decoding its input and before touching
//! the store. A request is allowed only if the exact (token, permission, context)
//! grant exists.

use contextkv_types::types::Permission;

use crate::prelude::*;

pub async fn authorize(app: &App, token: &str, context: &str, perm: Permission) -> CkResult<()> {
	app.store_adapter.check_permission(token, context, perm).await.inspect_err(|err| {
		if matches!(err, Error::Unauthorized) {
			debug!("Denied {} on {}", perm, context);
		}
	})
}

// vim: ts=4
