//! Shared types, the store adapter trait, and core utilities for contextkv.
//!
//! This crate contains the foundational types that are shared between the
//! server crate and the adapter implementations.

pub mod error;
pub mod prelude;
pub mod store_adapter;
pub mod types;
pub mod utils;

// vim: ts=4
