pub use crate::core::app::App;
pub use contextkv_types::error::{CkResult, Error};

pub use tracing::{debug, error, info, info_span, warn};

// vim: ts=4
