//! Tabgroup path parsing.
//!
//! Normalizes a [`TabgroupSpec`] into an ordered list of non-empty,
//! whitespace-trimmed segment names. Position-keyed input is sorted by
//! position before segment extraction.

use serde_json::Value;

use crate::error::ComposeError;
use crate::item::TabgroupSpec;

impl TabgroupSpec {
    /// Build a spec from loose authoring input.
    ///
    /// Accepts a string (atomic or slash-delimited), an array of segment
    /// strings, or an object keyed by integer position. Every other shape
    /// is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::InvalidPathShape`] for any other shape,
    /// including arrays or maps with non-string entries.
    pub fn from_value(value: &Value) -> Result<Self, ComposeError> {
        match value {
            Value::String(path) => Ok(Self::Path(path.clone())),
            Value::Array(entries) => {
                let mut segments = Vec::with_capacity(entries.len());
                for entry in entries {
                    let Value::String(segment) = entry else {
                        return Err(invalid_shape(entry));
                    };
                    segments.push(segment.clone());
                }
                Ok(Self::Segments(segments))
            }
            Value::Object(map) => {
                let mut ordered = std::collections::BTreeMap::new();
                for (key, entry) in map {
                    let Ok(position) = key.parse::<i64>() else {
                        return Err(ComposeError::InvalidPathShape {
                            found: format!("object with non-integer key {key:?}"),
                        });
                    };
                    let Value::String(segment) = entry else {
                        return Err(invalid_shape(entry));
                    };
                    ordered.insert(position, segment.clone());
                }
                Ok(Self::Ordered(ordered))
            }
            other => Err(invalid_shape(other)),
        }
    }

    /// Parse the spec into its ordered, trimmed, non-empty segments.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::EmptyPath`] when trimming leaves zero
    /// segments.
    pub fn segments(&self) -> Result<Vec<String>, ComposeError> {
        let raw: Vec<&str> = match self {
            Self::Path(path) => path.split('/').collect(),
            Self::Segments(list) => list.iter().map(String::as_str).collect(),
            Self::Ordered(map) => map.values().map(String::as_str).collect(),
        };

        let segments: Vec<String> = raw
            .into_iter()
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned)
            .collect();

        if segments.is_empty() {
            return Err(ComposeError::EmptyPath {
                spec: self.describe(),
            });
        }
        Ok(segments)
    }

    /// Human-readable rendering of the spec for error messages.
    fn describe(&self) -> String {
        match self {
            Self::Path(path) => path.clone(),
            Self::Segments(list) => format!("{list:?}"),
            Self::Ordered(map) => format!("{map:?}"),
        }
    }
}

fn invalid_shape(value: &Value) -> ComposeError {
    let found = match value {
        Value::Null => "null".to_owned(),
        Value::Bool(_) => "boolean".to_owned(),
        Value::Number(_) => "number".to_owned(),
        Value::String(_) => "string".to_owned(),
        Value::Array(_) => "array with non-string entries".to_owned(),
        Value::Object(_) => "object with non-string entries".to_owned(),
    };
    ComposeError::InvalidPathShape { found }
}
