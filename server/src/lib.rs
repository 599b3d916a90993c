//! contextkv is a multi-tenant key/value store served over HTTP.
//!
//! # Features
//!
//! - Contexts
//!		- named namespaces, each holding its own keys
//!		- created and deleted through the admin API
//! - Bearer tokens
//!		- opaque, stored only as a digest
//!		- every operation checks an explicit (token, permission, context) grant
//! - Admin token
//!		- provisioned once on first start and printed to the log

#![forbid(unsafe_code)]

pub mod adm;
pub mod bootstrap;
pub mod con;
pub mod core;
pub mod prelude;
pub mod routes;

pub use crate::core::app::{App, AppBuilder, AppState};

// vim: ts=4
