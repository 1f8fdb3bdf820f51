//! # Legacy YAML Shapes
//!
//! Workspace files list their elements as single-key mappings, where the key
//! names the element type and the value holds its fields:
//!
//! ```yaml
//! - git: {local-name: ros, uri: https://github.com/ros/ros.git, version: fuerte}
//! - setup-file: {local-name: /opt/ros/fuerte/setup.sh}
//! - other: {local-name: /opt/ros/fuerte/share}
//! ```
//!
//! This module converts between that shape and [`PathSpec`]. [`decode`] is
//! the only place where element invariants are checked; [`legacy_yaml`] is
//! its inverse and emits only the optional fields that are set.
//!
//! ```
//! use multiproject::legacy;
//!
//! let specs = legacy::decode_str("- hg: {local-name: common, uri: https://example.com/hg}", "inline")
//!     .unwrap();
//! assert_eq!(specs.len(), 1);
//! assert_eq!(specs[0].uri(), Some("https://example.com/hg"));
//! ```

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::path_spec::{LegacyType, PathSpec, SETUP_FILE_TAG};

const LOCAL_NAME: &str = "local-name";
const URI: &str = "uri";
const VERSION: &str = "version";
const REVISION: &str = "revision";
const CURRENT_REVISION: &str = "current_revision";

/// Decode one element of a workspace document.
pub fn decode(value: &Value) -> Result<PathSpec> {
    let map = value.as_mapping().ok_or_else(|| Error::Format {
        message: format!("element must be a YAML mapping, got {}", describe(value)),
    })?;
    if map.len() != 1 {
        return Err(Error::Format {
            message: describe(value),
        });
    }
    let Some((key, fields)) = map.iter().next() else {
        return Err(Error::Format {
            message: describe(value),
        });
    };
    let legacy_type = key
        .as_str()
        .and_then(LegacyType::from_key)
        .ok_or_else(|| Error::Format {
            message: describe(value),
        })?;

    let mut local_name = None;
    let mut uri = None;
    let mut version = None;
    match fields {
        Value::Null => {}
        Value::Mapping(fields) => {
            for (field, field_value) in fields {
                match field.as_str() {
                    Some(LOCAL_NAME) => local_name = scalar(field_value, value)?,
                    Some(URI) => uri = scalar(field_value, value)?,
                    Some(VERSION) => version = scalar(field_value, value)?,
                    _ => {
                        return Err(Error::UnknownKey {
                            key: describe(field),
                            element: describe(value),
                        })
                    }
                }
            }
        }
        other => {
            return Err(Error::Format {
                message: format!(
                    "fields of '{}' must be a mapping, got {}",
                    legacy_type,
                    describe(other)
                ),
            })
        }
    }

    let local_name = local_name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| Error::MissingField {
            field: LOCAL_NAME.to_string(),
            element: describe(value),
        })?;

    let mut builder = PathSpec::builder(local_name);
    match legacy_type {
        LegacyType::Scm(scm_type) => {
            let uri = uri.ok_or_else(|| Error::MissingField {
                field: URI.to_string(),
                element: describe(value),
            })?;
            builder = builder.scm(scm_type, uri);
            if let Some(version) = version {
                builder = builder.version(version);
            }
        }
        LegacyType::SetupFile | LegacyType::Other => {
            for (field, present) in [(URI, uri.is_some()), (VERSION, version.is_some())] {
                if present {
                    return Err(Error::Inconsistent {
                        field: field.to_string(),
                        element: describe(value),
                    });
                }
            }
            if legacy_type == LegacyType::SetupFile {
                builder = builder.tag(SETUP_FILE_TAG);
            }
        }
    }
    Ok(builder.build())
}

/// Encode one element in its legacy shape.
///
/// Version-control fields are emitted only when the element has an
/// `scm_type`, and each only when set.
pub fn legacy_yaml(spec: &PathSpec) -> Value {
    let mut fields = Mapping::new();
    fields.insert(LOCAL_NAME.into(), spec.local_name().into());
    if spec.scm_type().is_some() {
        let optional = [
            (URI, spec.uri()),
            (VERSION, spec.version()),
            (REVISION, spec.revision()),
            (CURRENT_REVISION, spec.current_revision()),
        ];
        for (key, field) in optional {
            if let Some(field) = field {
                fields.insert(key.into(), field.into());
            }
        }
    }
    let mut element = Mapping::new();
    element.insert(spec.legacy_type().as_str().into(), Value::Mapping(fields));
    Value::Mapping(element)
}

/// Decode a whole parsed document.
///
/// A null document is empty. Anything other than a sequence of elements is
/// a format error.
pub fn decode_document(document: &Value) -> Result<Vec<PathSpec>> {
    match document {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(elements) => elements.iter().map(decode).collect(),
        other => Err(Error::Format {
            message: format!("document must be a list of elements, got {}", describe(other)),
        }),
    }
}

/// Parse and decode a document held in memory. `origin` names it in errors.
pub fn decode_str(content: &str, origin: &str) -> Result<Vec<PathSpec>> {
    match parse_yaml(content, origin)? {
        Some(document) => decode_document(&document),
        None => Ok(Vec::new()),
    }
}

/// Parse YAML text, returning `None` for a document with no content.
///
/// Blank and comment-only documents count as empty.
pub fn parse_yaml(content: &str, origin: &str) -> Result<Option<Value>> {
    let blank = content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'));
    if blank {
        return Ok(None);
    }
    let document: Value = serde_yaml::from_str(content).map_err(|e| Error::Parse {
        uri: origin.to_string(),
        message: e.to_string(),
    })?;
    Ok(match document {
        Value::Null => None,
        document => Some(document),
    })
}

/// Serialize a list of elements as a legacy workspace document.
pub fn to_yaml_string(specs: &[PathSpec]) -> Result<String> {
    Ok(serde_yaml::to_string(specs)?)
}

impl Serialize for PathSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        legacy_yaml(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PathSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        decode(&value).map_err(de::Error::custom)
    }
}

/// A field value as text. Null means the field is not set.
fn scalar(field: &Value, element: &Value) -> Result<Option<String>> {
    match field {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(Error::Format {
            message: format!(
                "expected a scalar value, got {} in {}",
                describe(other),
                describe(element)
            ),
        }),
    }
}

/// Render a value on one line, flow style, for error messages.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => {
            let items: Vec<String> = items.iter().map(describe).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", describe(k), describe(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, describe(&tagged.value)),
    }
}
