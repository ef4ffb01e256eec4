//! Locale dataset loading and dotted-key lookup.
//!
//! A dataset file holds one locale's values under a fixed two-level prefix:
//!
//! ```yaml
//! en:
//!   faker:
//!     name:
//!       first_name: ['John', 'Jane']
//!       name: '#{first_name} #{last_name}'
//! ```
//!
//! [`LocaleData`] parses the document once, keeps the subtree under
//! `<locale>.faker`, and answers dotted-key lookups against it. The tree is
//! read-only after construction. Leaves are plain strings, ordered lists, or
//! nested maps; any other YAML shape is reported at lookup time, not load
//! time, since unused keys are never validated.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::error::ForgeError;

/// One locale's value tree with dotted-key lookup.
#[derive(Debug, Clone)]
pub struct LocaleData {
    locale: String,
    root: Value,
}

impl LocaleData {
    /// Load a locale dataset from a YAML file.
    pub fn from_file<P: AsRef<Path>>(locale: &str, path: P) -> Result<Self, ForgeError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(locale, &content)
    }

    /// Parse a locale dataset from a YAML string.
    ///
    /// The document must carry the requested locale as its top-level key and
    /// the `faker` namespace beneath it; everything under that namespace
    /// becomes the lookup tree.
    pub fn from_yaml_str(locale: &str, yaml: &str) -> Result<Self, ForgeError> {
        let document: Value = serde_yaml::from_str(yaml)?;
        let scoped = document
            .get(locale)
            .ok_or_else(|| ForgeError::LocaleNotFound(locale.to_string()))?;
        let root = scoped
            .get("faker")
            .ok_or_else(|| ForgeError::KeyNotFound(format!("{locale}.faker")))?;
        if !root.is_mapping() {
            return Err(ForgeError::WrongValueShape {
                key: format!("{locale}.faker"),
                expected: "map",
                found: shape_name(root),
            });
        }
        tracing::debug!("Loaded dataset for locale '{}'", locale);
        Ok(Self {
            locale: locale.to_string(),
            root: root.clone(),
        })
    }

    /// The locale code this dataset was loaded for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Look up the value at a dotted key, e.g. `name.first_name`.
    ///
    /// Traverses the tree segment by segment. Fails with
    /// [`ForgeError::KeyNotFound`] if any segment is absent or the path
    /// descends through a non-map value.
    pub fn get(&self, key: &str) -> Result<&Value, ForgeError> {
        let mut current = &self.root;
        for segment in key.split('.') {
            current = current
                .get(segment)
                .ok_or_else(|| ForgeError::KeyNotFound(key.to_string()))?;
        }
        Ok(current)
    }

    /// Look up a key that must hold a scalar string.
    pub fn get_str(&self, key: &str) -> Result<&str, ForgeError> {
        let value = self.get(key)?;
        value.as_str().ok_or_else(|| ForgeError::WrongValueShape {
            key: key.to_string(),
            expected: "string",
            found: shape_name(value),
        })
    }

    /// Look up a key that must hold an ordered list.
    pub fn get_list(&self, key: &str) -> Result<&Vec<Value>, ForgeError> {
        let value = self.get(key)?;
        value
            .as_sequence()
            .ok_or_else(|| ForgeError::WrongValueShape {
                key: key.to_string(),
                expected: "list",
                found: shape_name(value),
            })
    }
}

/// Human-readable name of a YAML value's shape, for error messages.
fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a map",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_DATASET: &str = r#"
test:
  faker:
    name:
      first_name: ['John', 'Jane', 'Alex']
      last_name: ['Smith']
      name: '#{first_name} #{last_name}'
    address:
      formats:
        full_address: [':street', ':city']
      count: 3
"#;

    fn sample() -> LocaleData {
        LocaleData::from_yaml_str("test", SAMPLE_DATASET).unwrap()
    }

    #[test]
    fn test_get_traverses_dotted_keys() {
        let data = sample();

        assert_eq!(data.get_str("name.name").unwrap(), "#{first_name} #{last_name}");
        assert_eq!(data.get_list("name.first_name").unwrap().len(), 3);
        assert_eq!(
            data.get_list("address.formats.full_address")
                .unwrap()
                .first()
                .and_then(|v| v.as_str()),
            Some(":street")
        );
    }

    #[test]
    fn test_missing_key_fails_with_key_not_found() {
        let data = sample();

        let err = data.get("bogus.key").unwrap_err();
        assert!(matches!(err, ForgeError::KeyNotFound(key) if key == "bogus.key"));
    }

    #[test]
    fn test_descending_through_scalar_fails_with_key_not_found() {
        let data = sample();

        let err = data.get("name.name.deeper").unwrap_err();
        assert!(matches!(err, ForgeError::KeyNotFound(key) if key == "name.name.deeper"));
    }

    #[test]
    fn test_list_leaf_via_scalar_fetch_fails_with_wrong_shape() {
        let data = sample();

        let err = data.get_str("name.first_name").unwrap_err();
        assert!(matches!(
            err,
            ForgeError::WrongValueShape {
                expected: "string",
                found: "a list",
                ..
            }
        ));
    }

    #[test]
    fn test_scalar_leaf_via_list_fetch_fails_with_wrong_shape() {
        let data = sample();

        let err = data.get_list("name.name").unwrap_err();
        assert!(matches!(
            err,
            ForgeError::WrongValueShape {
                expected: "list",
                found: "a string",
                ..
            }
        ));
    }

    #[test]
    fn test_non_string_leaf_reports_its_shape() {
        let data = sample();

        let err = data.get_str("address.count").unwrap_err();
        assert!(matches!(
            err,
            ForgeError::WrongValueShape {
                found: "a number",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_locale_fails_at_construction() {
        let err = LocaleData::from_yaml_str("fr", SAMPLE_DATASET).unwrap_err();
        assert!(matches!(err, ForgeError::LocaleNotFound(locale) if locale == "fr"));
    }

    #[test]
    fn test_missing_faker_namespace_fails() {
        let err = LocaleData::from_yaml_str("test", "test:\n  other: 1\n").unwrap_err();
        assert!(matches!(err, ForgeError::KeyNotFound(key) if key == "test.faker"));
    }

    #[test]
    fn test_invalid_yaml_fails_with_parse_error() {
        let err = LocaleData::from_yaml_str("test", "test: [unclosed").unwrap_err();
        assert!(matches!(err, ForgeError::YamlError(_)));
    }

    #[test]
    fn test_from_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_DATASET.as_bytes()).unwrap();

        let data = LocaleData::from_file("test", file.path()).unwrap();
        assert_eq!(data.locale(), "test");
        assert_eq!(data.get_list("name.last_name").unwrap().len(), 1);
    }

    #[test]
    fn test_from_file_missing_path_fails_with_io_error() {
        let err = LocaleData::from_file("test", "/nonexistent/dataset.yml").unwrap_err();
        assert!(matches!(err, ForgeError::IoError(_)));
    }
}
