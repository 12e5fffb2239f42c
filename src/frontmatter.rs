//! Front-matter splitting for ARC READMEs.
//!
//! The parser is deliberately lenient: a malformed header yields an empty or
//! partial mapping and validation reports whichever required key is missing.
use serde_json::Value as JsonValue;
use serde_yaml::Value;
use std::collections::BTreeMap;

const DELIMITER: &str = "---";

/// Untyped front matter plus the remaining markdown body.
///
/// Scalars are carried as JSON strings; lists and maps keep their structure.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub metadata: BTreeMap<String, JsonValue>,
    pub content: String,
}

/// Split `text` into its `---`-delimited YAML header and body.
pub fn split_front_matter(text: &str) -> RawDocument {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return RawDocument::default();
    };
    if !is_delimiter(first) {
        return unframed(text);
    }

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        if is_delimiter(line) {
            let header = &text[header_start..offset];
            return RawDocument {
                metadata: parse_header(header),
                content: text[offset + line.len()..].to_string(),
            };
        }
        offset += line.len();
    }
    unframed(text)
}

fn unframed(text: &str) -> RawDocument {
    RawDocument {
        metadata: BTreeMap::new(),
        content: text.to_string(),
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

fn parse_header(header: &str) -> BTreeMap<String, JsonValue> {
    let value: Value = match serde_yaml::from_str(header) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(error = %err, "front matter is not valid YAML");
            return BTreeMap::new();
        }
    };
    let Value::Mapping(mapping) = value else {
        return BTreeMap::new();
    };

    mapping
        .iter()
        .filter_map(|(key, value)| Some((scalar_to_string(key)?, to_json(value)?)))
        .collect()
}

fn to_json(value: &Value) -> Option<JsonValue> {
    if let Some(scalar) = scalar_to_string(value) {
        return Some(JsonValue::String(scalar));
    }
    match serde_json::to_value(value) {
        Ok(json) => Some(json),
        Err(err) => {
            tracing::debug!(error = %err, "front matter value has no JSON form");
            None
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(value) => Some(value.to_string()),
        Value::Number(value) => Some(value.to_string()),
        Value::String(value) => Some(value.clone()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}
