//! Reorganize hydrated Kubernetes manifests into a canonical directory layout.

pub mod cluster;
pub mod crd;
pub mod files;
pub mod format;
pub mod manifest;
pub mod namespaces;
pub mod output;
pub mod placement;
pub mod registry;
pub mod telemetry;
pub mod yaml;

pub use format::{format, FormatOpts, FormatReport};
