use std::fmt;

use thiserror::Error;

/// Error returned when an `apiVersion` string cannot be split into group and version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected GroupVersion string: {0}")]
pub struct ParseApiVersionError(pub String);

/// A resource type identified by group, version and kind.
///
/// The core API group is represented by an empty `group`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupVersionKind {
	pub group: String,
	pub version: String,
	pub kind: String,
}

impl GroupVersionKind {
	pub fn gvk(group: &str, version: &str, kind: &str) -> Self {
		Self {
			group: group.to_owned(),
			version: version.to_owned(),
			kind: kind.to_owned(),
		}
	}

	/// Build a GroupVersionKind from a manifest's `apiVersion` and `kind`.
	///
	/// `v1` maps to the core group, `apps/v1` to group `apps`. More than one
	/// `/` in the apiVersion is rejected.
	pub fn from_api_version(api_version: &str, kind: &str) -> Result<Self, ParseApiVersionError> {
		let (group, version) = match api_version.split_once('/') {
			None => ("", api_version),
			Some((group, version)) if !version.contains('/') => (group, version),
			Some(_) => return Err(ParseApiVersionError(api_version.to_owned())),
		};
		Ok(Self::gvk(group, version, kind))
	}

	/// The `apiVersion` string for this kind, e.g. `apps/v1` or `v1`.
	pub fn api_version(&self) -> String {
		if self.group.is_empty() {
			self.version.clone()
		} else {
			format!("{}/{}", self.group, self.version)
		}
	}

	pub fn group_kind(&self) -> GroupKind {
		GroupKind {
			group: self.group.clone(),
			kind: self.kind.clone(),
		}
	}
}

impl fmt::Display for GroupVersionKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}, Kind={}", self.api_version(), self.kind)
	}
}

/// A resource type with the version dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKind {
	pub group: String,
	pub kind: String,
}

impl GroupKind {
	pub fn new(group: &str, kind: &str) -> Self {
		Self {
			group: group.to_owned(),
			kind: kind.to_owned(),
		}
	}
}

/// Formats as `Kind.group`, or just `Kind` for the core group.
impl fmt::Display for GroupKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.group.is_empty() {
			f.write_str(&self.kind)
		} else {
			write!(f, "{}.{}", self.kind, self.group)
		}
	}
}
