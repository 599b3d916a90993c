//! Data-plane API: entries within a context

pub mod handler;

// vim: ts=4
