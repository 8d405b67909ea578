use anyhow::{Context, Result};
use lexis_core::{build_index, Index};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Read every file below `root` as a `(path, text)` pair.
///
/// Entries are visited sorted by file name so ids come out the same on every build. Bytes that
/// aren't valid UTF-8 are replaced rather than rejected. Any unreadable entry fails the whole load.
pub fn load_corpus(root: &Path) -> Result<Vec<(String, String)>> {
    if !root.is_dir() {
        anyhow::bail!("{} is not a directory", root.display());
    }
    let mut docs = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        docs.push((path.display().to_string(), String::from_utf8_lossy(&bytes).into_owned()));
    }
    tracing::debug!(root = %root.display(), files = docs.len(), "loaded corpus");
    Ok(docs)
}

pub fn build_from_dir(root: &Path) -> Result<Index> {
    Ok(build_index(load_corpus(root)?))
}
