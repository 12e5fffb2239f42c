//! Typed paths into an ARC repository.
//!
//! An ARC root holds one `arc-NNNN/` directory per proposal, each with a
//! `README.md`, plus the `site/` viewer that consumes `arcs.json`.
use crate::error::ArcError;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Document file expected inside every ARC directory.
pub const README_FILE: &str = "README.md";
/// Site artifact location relative to the ARC root.
pub const INDEX_REL: &str = "site/src/arcs.json";

/// Convenience wrapper for locating ARC repository artifacts.
#[derive(Debug, Clone)]
pub struct ArcPaths {
    root: PathBuf,
}

impl ArcPaths {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Return the default `site/src/arcs.json` path.
    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_REL)
    }
}

/// One `arc-*` directory found under the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcDir {
    pub path: PathBuf,
    /// Everything after `arc-`, as written in the directory name.
    pub suffix: String,
}

impl ArcDir {
    /// Numeric id encoded in the directory name; `None` unless the suffix is
    /// all digits and fits in `u32`.
    pub fn id(&self) -> Option<u32> {
        if self.suffix.is_empty() || !self.suffix.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.suffix.parse().ok()
    }

    pub fn readme_path(&self) -> PathBuf {
        self.path.join(README_FILE)
    }

    pub fn is_template(&self) -> bool {
        self.id() == Some(crate::schema::TEMPLATE_ID)
    }
}

fn arc_dir_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^arc-(.*)$").expect("regex for ARC directory names"))
}

/// List every `arc-*` directory directly under `root`, sorted by name.
///
/// Malformed suffixes are listed too so validation rejects them.
pub fn list_arc_dirs(root: &Path) -> Result<Vec<ArcDir>, ArcError> {
    let io_err = |source| ArcError::Io {
        path: root.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    for entry in fs::read_dir(root).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        let Some(caps) = arc_dir_pattern().captures(&name) else {
            continue;
        };
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        dirs.push(ArcDir {
            suffix: caps[1].to_string(),
            path,
        });
    }
    dirs.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(dirs)
}

/// Read the README of one ARC directory.
pub fn read_readme(dir: &ArcDir) -> Result<String, ArcError> {
    let path = dir.readme_path();
    fs::read_to_string(&path).map_err(|source| ArcError::MissingDocument { path, source })
}
