//! Discover resource kinds defined by CustomResourceDefinitions in the input.

use std::collections::HashSet;

use k8s::{GroupVersionKind, ResourceScope};
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::manifest::{self, AccessError};

pub const CRD_KIND: &str = "CustomResourceDefinition";

#[derive(Debug, Error)]
pub enum CrdError {
	#[error(transparent)]
	Access(#[from] AccessError),

	#[error("resource already exists: {0}")]
	DuplicateResource(GroupVersionKind),
}

/// A resource kind declared by a CRD, one per served version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrdResource {
	pub gvk: GroupVersionKind,
	pub scope: ResourceScope,
}

/// Collect the resources declared by every CRD among `documents`.
///
/// Every document must have a kind. Declaring the same group, version and
/// kind twice is an error.
pub fn find_resources<'a>(
	documents: impl IntoIterator<Item = &'a JsonValue>,
) -> Result<Vec<CrdResource>, CrdError> {
	let mut seen = HashSet::new();
	let mut resources = Vec::new();

	for document in documents {
		if manifest::kind(document)? != CRD_KIND {
			continue;
		}

		let group = manifest::crd_group(document)?;
		let kind = manifest::crd_kind(document)?;
		let scope = ResourceScope::from_crd_scope(&manifest::crd_scope(document)?);

		for version in manifest::crd_versions(document)? {
			let gvk = GroupVersionKind::gvk(&group, &version, &kind);
			if !seen.insert(gvk.clone()) {
				return Err(CrdError::DuplicateResource(gvk));
			}
			resources.push(CrdResource { gvk, scope });
		}
	}

	Ok(resources)
}
