//! Live cluster access for discovery.
//!
//! Only used when scopes are resolved against a running cluster rather than
//! the built-in table.

pub mod client;
pub mod discovery;
