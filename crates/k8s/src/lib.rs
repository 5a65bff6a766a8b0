//! Shared Kubernetes vocabulary.
//!
//! Types in this crate describe resource kinds independently of any API
//! client, so they can be used both offline (with the built-in scope table)
//! and with a live cluster.

pub mod builtin;
mod gvk;
mod scope;

pub use gvk::{GroupKind, GroupVersionKind, ParseApiVersionError};
pub use scope::ResourceScope;
