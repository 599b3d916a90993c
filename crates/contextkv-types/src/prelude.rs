pub use crate::error::{CkResult, Error};

pub use tracing::{debug, error, info, info_span, warn};

// vim: ts=4
