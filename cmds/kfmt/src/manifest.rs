//! Field access on parsed manifest documents.
//!
//! Missing fields and fields set to an empty value are both reported as
//! empty; callers decide which fields are required.

use serde_json::Value as JsonValue;
use thiserror::Error;

const QUOTES: [char; 2] = ['\'', '"'];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
	#[error("{0} is empty")]
	Empty(&'static str),

	#[error("field {0} is not a scalar value")]
	NotScalar(String),

	#[error("field {0} is not a list")]
	NotList(String),

	#[error("field {0} must be a string")]
	NotString(String),
}

/// Read a scalar field at `path`, returning `None` when it is missing, null or empty.
///
/// Numbers and booleans are rendered as text. Surrounding whitespace and one
/// pair of matching quotes are stripped.
pub fn string_field(document: &JsonValue, path: &[&str]) -> Result<Option<String>, AccessError> {
	let Some(value) = lookup(document, path) else {
		return Ok(None);
	};
	let text = match value {
		JsonValue::Null => return Ok(None),
		JsonValue::String(s) => trim_space_and_quotes(s).to_owned(),
		JsonValue::Number(n) => n.to_string(),
		JsonValue::Bool(b) => b.to_string(),
		JsonValue::Array(_) | JsonValue::Object(_) => {
			return Err(AccessError::NotScalar(path.join(".")))
		}
	};
	Ok(Some(text).filter(|t| !t.is_empty()))
}

fn required_field(
	document: &JsonValue,
	path: &[&str],
	name: &'static str,
) -> Result<String, AccessError> {
	string_field(document, path)?.ok_or(AccessError::Empty(name))
}

/// Like [`string_field`], but numbers and booleans are rejected.
///
/// YAML reformats them on parsing, so an unquoted `1.10` would read as `1.1`.
fn text_field(document: &JsonValue, path: &[&str]) -> Result<Option<String>, AccessError> {
	match lookup(document, path) {
		Some(JsonValue::Number(_) | JsonValue::Bool(_)) => {
			Err(AccessError::NotString(path.join(".")))
		}
		_ => string_field(document, path),
	}
}

fn lookup<'a>(document: &'a JsonValue, path: &[&str]) -> Option<&'a JsonValue> {
	path.iter()
		.try_fold(document, |value, field| value.as_object()?.get(*field))
}

/// Trim whitespace, then one pair of matching quotes around a value.
pub fn trim_space_and_quotes(value: &str) -> &str {
	let text = value.trim();
	for quote in QUOTES {
		if let Some(inner) = text
			.strip_prefix(quote)
			.and_then(|rest| rest.strip_suffix(quote))
		{
			return inner;
		}
	}
	text
}

pub fn kind(document: &JsonValue) -> Result<String, AccessError> {
	required_field(document, &["kind"], "kind")
}

pub fn api_version(document: &JsonValue) -> Result<String, AccessError> {
	required_field(document, &["apiVersion"], "apiVersion")
}

pub fn name(document: &JsonValue) -> Result<String, AccessError> {
	text_field(document, &["metadata", "name"])?.ok_or(AccessError::Empty("name"))
}

/// `metadata.namespace`, or `None` when it is not set.
pub fn namespace(document: &JsonValue) -> Result<Option<String>, AccessError> {
	text_field(document, &["metadata", "namespace"])
}

/// Remove `metadata.namespace` from the document.
pub fn clear_namespace(document: &mut JsonValue) {
	if let Some(metadata) = document
		.get_mut("metadata")
		.and_then(JsonValue::as_object_mut)
	{
		metadata.shift_remove("namespace");
	}
}

pub fn crd_group(document: &JsonValue) -> Result<String, AccessError> {
	required_field(document, &["spec", "group"], "group")
}

pub fn crd_kind(document: &JsonValue) -> Result<String, AccessError> {
	required_field(document, &["spec", "names", "kind"], "CRD kind")
}

pub fn crd_scope(document: &JsonValue) -> Result<String, AccessError> {
	required_field(document, &["spec", "scope"], "scope")
}

/// Versions declared by a CustomResourceDefinition.
///
/// Names from the `spec.versions` list are preferred; the legacy
/// `spec.version` scalar is used when the list is absent or has no names.
pub fn crd_versions(document: &JsonValue) -> Result<Vec<String>, AccessError> {
	let mut versions = Vec::new();
	match lookup(document, &["spec", "versions"]) {
		None | Some(JsonValue::Null) => {}
		Some(JsonValue::Array(elements)) => {
			for element in elements {
				if let Some(version) = string_field(element, &["name"])? {
					versions.push(version);
				}
			}
		}
		Some(_) => return Err(AccessError::NotList("spec.versions".to_owned())),
	}
	if !versions.is_empty() {
		return Ok(versions);
	}

	let version = required_field(document, &["spec", "version"], "version")?;
	Ok(vec![version])
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;
	use rstest::rstest;
	use serde_json::json;

	use super::*;

	#[rstest]
	#[case("plain", "plain")]
	#[case("  padded\t", "padded")]
	#[case("'single'", "single")]
	#[case("\"double\"", "double")]
	#[case(" \"spaced\" ", "spaced")]
	#[case("'mismatched\"", "'mismatched\"")]
	#[case("\"", "\"")]
	fn test_trim_space_and_quotes(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(trim_space_and_quotes(input), expected);
	}

	#[test]
	fn test_required_fields() {
		let document = json!({
			"apiVersion": "apps/v1",
			"kind": "Deployment",
			"metadata": { "name": "web", "namespace": "prod" }
		});

		assert_eq!(api_version(&document).unwrap(), "apps/v1");
		assert_eq!(kind(&document).unwrap(), "Deployment");
		assert_eq!(name(&document).unwrap(), "web");
		assert_eq!(namespace(&document).unwrap().as_deref(), Some("prod"));
	}

	#[test]
	fn test_missing_and_empty_fields() {
		let document = json!({ "kind": "", "metadata": { "namespace": null } });

		assert_eq!(kind(&document), Err(AccessError::Empty("kind")));
		assert_eq!(api_version(&document), Err(AccessError::Empty("apiVersion")));
		assert_eq!(name(&document), Err(AccessError::Empty("name")));
		assert_eq!(namespace(&document).unwrap(), None);
	}

	#[test]
	fn test_non_scalar_field() {
		let document = json!({ "kind": { "nested": true } });
		assert_matches!(kind(&document), Err(AccessError::NotScalar(field)) if field == "kind");
	}

	#[test]
	fn test_non_string_name_and_namespace() {
		let document = json!({ "metadata": { "name": 1.1, "namespace": true } });
		assert_matches!(
			name(&document),
			Err(AccessError::NotString(field)) if field == "metadata.name"
		);
		assert_matches!(
			namespace(&document),
			Err(AccessError::NotString(field)) if field == "metadata.namespace"
		);

		let quoted = json!({ "metadata": { "name": "1.10", "namespace": "'true'" } });
		assert_eq!(name(&quoted).unwrap(), "1.10");
		assert_eq!(namespace(&quoted).unwrap().as_deref(), Some("true"));
	}

	#[test]
	fn test_numeric_scalar_field() {
		let document = json!({ "spec": { "version": 2 } });
		assert_eq!(
			string_field(&document, &["spec", "version"]).unwrap().as_deref(),
			Some("2")
		);
	}

	#[test]
	fn test_clear_namespace() {
		let mut document = json!({
			"kind": "ClusterRole",
			"metadata": { "name": "admin", "namespace": "stray", "labels": {} }
		});
		clear_namespace(&mut document);
		assert_eq!(
			document,
			json!({ "kind": "ClusterRole", "metadata": { "name": "admin", "labels": {} } })
		);
	}

	#[test]
	fn test_crd_versions_list() {
		let document = json!({
			"spec": {
				"versions": [{ "name": "v1alpha1" }, { "name": "v1" }],
				"version": "ignored"
			}
		});
		assert_eq!(crd_versions(&document).unwrap(), vec!["v1alpha1", "v1"]);
	}

	#[test]
	fn test_crd_versions_legacy_scalar() {
		let document = json!({ "spec": { "version": "v1beta1" } });
		assert_eq!(crd_versions(&document).unwrap(), vec!["v1beta1"]);

		let document = json!({ "spec": { "versions": [], "version": "v1beta1" } });
		assert_eq!(crd_versions(&document).unwrap(), vec!["v1beta1"]);
	}

	#[test]
	fn test_crd_versions_missing() {
		let document = json!({ "spec": { "group": "example.com" } });
		assert_eq!(crd_versions(&document), Err(AccessError::Empty("version")));
	}

	#[test]
	fn test_crd_fields() {
		let document = json!({
			"spec": {
				"group": "example.com",
				"names": { "kind": "Widget" },
				"scope": "Namespaced"
			}
		});
		assert_eq!(crd_group(&document).unwrap(), "example.com");
		assert_eq!(crd_kind(&document).unwrap(), "Widget");
		assert_eq!(crd_scope(&document).unwrap(), "Namespaced");

		let document = json!({ "spec": {} });
		assert_eq!(crd_kind(&document), Err(AccessError::Empty("CRD kind")));
		assert_eq!(crd_scope(&document), Err(AccessError::Empty("scope")));
	}
}
