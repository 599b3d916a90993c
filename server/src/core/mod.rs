//! Core infrastructure: app state, extractors, authorization and request decoding

pub mod app;
pub mod extract;
pub mod gate;
pub mod request;

pub use extract::BearerToken;

// vim: ts=4
