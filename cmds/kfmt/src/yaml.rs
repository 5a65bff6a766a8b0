//! YAML stream parsing and manifest serialization.

use serde::Deserialize;
use serde_json::Value as JsonValue;

/// Separator written at the start of every output file.
pub const DOCUMENT_SEPARATOR: &str = "---\n";

/// Split a YAML stream into its documents.
///
/// Empty and comment-only documents parse as null and are dropped.
pub fn parse_documents(content: &str) -> Result<Vec<JsonValue>, serde_yaml::Error> {
	let mut documents = Vec::new();
	for document in serde_yaml::Deserializer::from_str(content) {
		let value = JsonValue::deserialize(document)?;
		if value.is_null() {
			continue;
		}
		documents.push(value);
	}
	Ok(documents)
}

/// Serialize a single manifest as a standalone YAML document.
pub fn to_document(value: &JsonValue) -> Result<String, serde_yaml::Error> {
	let body = serde_yaml::to_string(value)?;
	Ok(format!("{DOCUMENT_SEPARATOR}{body}"))
}

#[cfg(test)]
mod tests {
	use indoc::indoc;

	use super::*;

	#[test]
	fn test_parse_multiple_documents() {
		let documents = parse_documents(indoc! {"
			apiVersion: v1
			kind: ConfigMap
			metadata:
			  name: one
			---
			# only a comment
			---
			apiVersion: v1
			kind: Secret
			metadata:
			  name: two
			---
		"})
		.unwrap();

		assert_eq!(documents.len(), 2);
		assert_eq!(documents[0]["kind"], "ConfigMap");
		assert_eq!(documents[1]["metadata"]["name"], "two");
	}

	#[test]
	fn test_parse_empty_stream() {
		assert!(parse_documents("").unwrap().is_empty());
	}

	#[test]
	fn test_parse_invalid_yaml() {
		assert!(parse_documents("kind: [unterminated").is_err());
	}

	#[test]
	fn test_document_keeps_field_order() {
		let documents = parse_documents(indoc! {"
			kind: ConfigMap
			apiVersion: v1
			metadata:
			  name: ordered
			data:
			  z: last
			  a: first
		"})
		.unwrap();

		assert_eq!(
			to_document(&documents[0]).unwrap(),
			indoc! {"
				---
				kind: ConfigMap
				apiVersion: v1
				metadata:
				  name: ordered
				data:
				  z: last
				  a: first
			"}
		);
	}
}
