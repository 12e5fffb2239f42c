//! The `ci` and `site` passes over an ARC root.
//!
//! Both passes validate every proposal before acting; `site` only writes the
//! index once the whole tree is known to be clean.
use crate::cli::RunArgs;
use crate::error::ArcError;
use crate::frontmatter::split_front_matter;
use crate::layout::{list_arc_dirs, read_readme, ArcDir, ArcPaths};
use crate::output::write_index;
use crate::schema::{ArcDocument, ArcIndex, TEMPLATE_ID};
use crate::validate::validate_arc;
use anyhow::{Context, Result};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Outcome of a clean `ci` pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CiSummary {
    pub checked: usize,
}

/// Load, parse, and validate a single ARC directory.
pub fn load_arc(dir: &ArcDir) -> Result<ArcDocument, ArcError> {
    let text = read_readme(dir)?;
    let doc = validate_arc(dir, split_front_matter(&text))?;
    tracing::debug!(arc = doc.metadata.arc, path = %dir.path.display(), "validated");
    Ok(doc)
}

/// Validate every non-template ARC under `root`, in listing order.
fn validated_arcs(root: &Path) -> Result<Vec<(PathBuf, ArcDocument)>> {
    let dirs = list_arc_dirs(root)?;
    let mut arcs = Vec::with_capacity(dirs.len());
    for dir in dirs {
        if dir.is_template() {
            tracing::debug!(path = %dir.path.display(), "skipping template");
            continue;
        }
        let doc = load_arc(&dir)?;
        arcs.push((dir.path, doc));
    }
    Ok(arcs)
}

/// Check every ARC under `root` against the schema.
pub fn run_ci(root: &Path) -> Result<CiSummary> {
    let arcs = validated_arcs(root)
        .with_context(|| format!("check ARCs under {}", root.display()))?;
    Ok(CiSummary {
        checked: arcs.len(),
    })
}

/// Validate every ARC under `root` and collect them by id.
pub fn build_index(root: &Path) -> Result<ArcIndex> {
    let arcs = validated_arcs(root)
        .with_context(|| format!("build ARC index from {}", root.display()))?;

    let mut index = ArcIndex::new();
    let mut sources: BTreeMap<u32, PathBuf> = BTreeMap::new();
    for (path, doc) in arcs {
        let id = doc.metadata.arc;
        if id == TEMPLATE_ID {
            continue;
        }
        match sources.entry(id) {
            Entry::Occupied(first) => {
                return Err(ArcError::DuplicateId {
                    id,
                    first: first.get().clone(),
                    second: path,
                }
                .into());
            }
            Entry::Vacant(slot) => {
                slot.insert(path);
            }
        }
        index.insert(id, doc);
    }
    Ok(index)
}

/// Run the `ci` command.
pub fn ci(args: &RunArgs) -> Result<()> {
    let summary = run_ci(&args.root)?;
    tracing::info!(checked = summary.checked, "all ARCs passed");
    println!("All ARCs are up to standard!");
    Ok(())
}

/// Run the `site` command.
pub fn site(args: &RunArgs) -> Result<()> {
    let paths = ArcPaths::new(args.root.clone());
    let out = args.out.clone().unwrap_or_else(|| paths.index_path());

    let index = build_index(paths.root())?;
    tracing::info!(published = index.len(), "built ARC index");
    println!("Successfully built all ARCs!");

    write_index(&out, &index)?;
    println!("Successfully wrote all ARCs to {}!", out.display());
    Ok(())
}
