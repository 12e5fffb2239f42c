//! Schema checks that turn raw front matter into a typed [`ArcDocument`].
//!
//! Fields are checked in declaration order and only the first violation is
//! reported.
use crate::error::ArcError;
use crate::frontmatter::RawDocument;
use crate::layout::ArcDir;
use crate::schema::{ArcDocument, ArcMetadata, Status, Topic};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Validate one ARC directory's parsed README.
pub fn validate_arc(dir: &ArcDir, raw: RawDocument) -> Result<ArcDocument, ArcError> {
    let path = dir.readme_path();
    let RawDocument {
        mut metadata,
        content,
    } = raw;
    let mut fields = Fields {
        path: &path,
        metadata: &mut metadata,
    };

    let arc = fields.take("arc")?;
    let arc = match (dir.id(), arc.trim().parse::<u32>()) {
        (Some(expected), Ok(actual)) if expected == actual => actual,
        _ => {
            return Err(ArcError::IdMismatch {
                path: fields.path.to_path_buf(),
                expected: dir.suffix.clone(),
                actual: arc,
            })
        }
    };
    let title = fields.take_nonempty("title")?;
    let authors = fields.take_nonempty("authors")?;
    let discussion = fields.take("discussion")?;
    let topic = fields.take("topic")?;
    let topic = Topic::parse(&topic).ok_or_else(|| fields.invalid("topic", topic))?;
    let status = fields.take("status")?;
    let status = Status::parse(&status).ok_or_else(|| fields.invalid("status", status))?;
    let created = fields.take_nonempty("created")?;

    if content.is_empty() {
        return Err(ArcError::EmptyBody { path });
    }

    Ok(ArcDocument {
        metadata: ArcMetadata {
            arc,
            title,
            authors,
            discussion,
            topic,
            status,
            created,
            extra: metadata,
        },
        content,
    })
}

struct Fields<'a> {
    path: &'a Path,
    metadata: &'a mut BTreeMap<String, Value>,
}

impl Fields<'_> {
    /// Remove a required field; structured values are rendered as JSON text.
    fn take(&mut self, field: &'static str) -> Result<String, ArcError> {
        match self.metadata.remove(field) {
            Some(Value::String(value)) => Ok(value),
            Some(other) => Ok(other.to_string()),
            None => Err(ArcError::MissingField {
                path: self.path.to_path_buf(),
                field,
            }),
        }
    }

    fn take_nonempty(&mut self, field: &'static str) -> Result<String, ArcError> {
        let value = self.take(field)?;
        if value.trim().is_empty() {
            return Err(ArcError::EmptyField {
                path: self.path.to_path_buf(),
                field,
            });
        }
        Ok(value)
    }

    fn invalid(&self, field: &'static str, value: String) -> ArcError {
        ArcError::InvalidEnum {
            path: self.path.to_path_buf(),
            field,
            value,
        }
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
