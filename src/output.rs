//! Publishing of the site index (`site/src/arcs.json`).
//!
//! The index is staged next to its destination and renamed into place, so a
//! failed run never leaves a truncated artifact behind.
use crate::error::ArcError;
use crate::schema::ArcIndex;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Render the index as 4-space pretty JSON without a trailing newline.
pub fn render_index(index: &ArcIndex) -> serde_json::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);
    index.serialize(&mut serializer)?;
    Ok(bytes)
}

/// Write the rendered index to `path`, replacing any previous artifact.
pub fn write_index(path: &Path, index: &ArcIndex) -> Result<(), ArcError> {
    let write_err = |source| ArcError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let bytes = render_index(index).map_err(|err| write_err(err.into()))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = tempfile::NamedTempFile::new_in(parent).map_err(write_err)?;
    staged.write_all(&bytes).map_err(write_err)?;
    staged.flush().map_err(write_err)?;
    staged.persist(path).map_err(|err| write_err(err.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ArcDocument, ArcMetadata, Status, Topic};
    use std::collections::BTreeMap;

    fn doc(arc: u32, content: &str) -> ArcDocument {
        ArcDocument {
            metadata: ArcMetadata {
                arc,
                title: format!("ARC {arc}"),
                authors: "Y".to_string(),
                discussion: String::new(),
                topic: Topic::Protocol,
                status: Status::Draft,
                created: "2021-01-01".to_string(),
                extra: BTreeMap::new(),
            },
            content: content.to_string(),
        }
    }

    #[test]
    fn renders_with_four_space_indent_and_numeric_order() {
        let index = ArcIndex::from([(20, doc(20, "b")), (7, doc(7, "a"))]);
        let rendered = String::from_utf8(render_index(&index).expect("render")).expect("utf8");
        let expected = r#"{
    "7": {
        "metadata": {
            "arc": 7,
            "title": "ARC 7",
            "authors": "Y",
            "discussion": "",
            "topic": "Protocol",
            "status": "Draft",
            "created": "2021-01-01"
        },
        "content": "a"
    },
    "20": {
        "metadata": {
            "arc": 20,
            "title": "ARC 20",
            "authors": "Y",
            "discussion": "",
            "topic": "Protocol",
            "status": "Draft",
            "created": "2021-01-01"
        },
        "content": "b"
    }
}"#;
        assert_eq!(rendered, expected);
    }

    #[test]
    fn empty_index_renders_as_empty_object() {
        let rendered = render_index(&ArcIndex::new()).expect("render");
        assert_eq!(rendered, b"{}");
    }

    #[test]
    fn write_replaces_existing_artifact() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("arcs.json");
        std::fs::write(&path, "stale").expect("seed artifact");

        let index = ArcIndex::from([(1, doc(1, "body"))]);
        write_index(&path, &index).expect("write index");
        let written = std::fs::read(&path).expect("read index");
        assert_eq!(written, render_index(&index).expect("render"));
    }

    #[test]
    fn missing_parent_is_write_error() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("site/src/arcs.json");
        let err = write_index(&path, &ArcIndex::new()).expect_err("missing parent");
        assert!(matches!(err, ArcError::WriteError { .. }));
        assert!(!path.exists());
    }
}
