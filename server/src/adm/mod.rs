//! Administrative API: contexts, tokens and permission grants.
//!
//! All capabilities here are granted on the `ALL` sentinel context.

pub mod handler;

// vim: ts=4
