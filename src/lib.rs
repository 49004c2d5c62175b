//! consultancy-lms - minimal backend for a consultancy learning platform.
//!
//! Validated record schemas mapped onto a pluggable document store,
//! exposed over a small HTTP API: one create and one list operation per
//! record type, nothing else.

pub mod api;
pub mod cli;
pub mod observability;
pub mod schema;
pub mod store;
