//! Promotion of staged files into the output directory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{CodegenError, Result};

/// Replace the contents of `output` with the files staged under `staging`.
///
/// `output` is owned by the generator: an existing directory is removed
/// wholesale first, stray files included. Staged files are copied by file
/// name, so any sub-directory a template created is flattened.
pub fn promote(staging: &Path, output: &Path) -> Result<Vec<PathBuf>> {
    let promote_error = |path: &Path| {
        let path = path.to_path_buf();
        move |source: io::Error| CodegenError::Promote { path, source }
    };

    let files = collect_files(staging).map_err(promote_error(staging))?;

    if output.exists() {
        warn!("Clearing output directory {}", output.display());
        fs::remove_dir_all(output).map_err(promote_error(output))?;
    }
    fs::create_dir_all(output).map_err(promote_error(output))?;

    let mut promoted = Vec::with_capacity(files.len());
    for file in files {
        let Some(name) = file.file_name() else {
            continue;
        };
        let target = output.join(name);
        fs::copy(&file, &target).map_err(promote_error(&target))?;
        promoted.push(target);
    }

    info!(
        "Promoted {} files into {}",
        promoted.len(),
        output.display()
    );
    Ok(promoted)
}

/// All regular files below `dir`, recursively, in sorted order
pub(crate) fn collect_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort();

    let mut files = Vec::new();
    for path in entries {
        if path.is_dir() {
            files.extend(collect_files(&path)?);
        } else {
            files.push(path);
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promote_into_fresh_directory() {
        let staging = tempfile::tempdir().unwrap();
        let root = tempfile::tempdir().unwrap();
        std::fs::write(staging.path().join("user.rs"), "user").unwrap();
        std::fs::write(staging.path().join("article.rs"), "article").unwrap();

        let output = root.path().join("nested").join("model");
        let promoted = promote(staging.path(), &output).unwrap();

        assert_eq!(
            promoted,
            vec![output.join("article.rs"), output.join("user.rs")]
        );
        assert_eq!(std::fs::read_to_string(output.join("user.rs")).unwrap(), "user");
    }

    #[test]
    fn test_promote_removes_stray_files() {
        let staging = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::write(staging.path().join("user.rs"), "new").unwrap();
        std::fs::write(output.path().join("user.rs"), "old").unwrap();
        std::fs::write(output.path().join("stray.txt"), "stray").unwrap();
        std::fs::create_dir(output.path().join("old_dir")).unwrap();

        promote(staging.path(), output.path()).unwrap();

        let mut names: Vec<String> = std::fs::read_dir(output.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["user.rs"]);
        assert_eq!(std::fs::read_to_string(output.path().join("user.rs")).unwrap(), "new");
    }

    #[test]
    fn test_promote_flattens_subdirectories() {
        let staging = tempfile::tempdir().unwrap();
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(staging.path().join("a").join("b")).unwrap();
        std::fs::write(staging.path().join("a").join("b").join("deep.rs"), "deep").unwrap();
        std::fs::write(staging.path().join("top.rs"), "top").unwrap();

        let output = root.path().join("model");
        promote(staging.path(), &output).unwrap();

        assert_eq!(std::fs::read_to_string(output.join("deep.rs")).unwrap(), "deep");
        assert_eq!(std::fs::read_to_string(output.join("top.rs")).unwrap(), "top");
        assert!(!output.join("a").exists());
    }

    #[test]
    fn test_missing_staging_is_promote_error() {
        let root = tempfile::tempdir().unwrap();
        let output = root.path().join("model");
        std::fs::create_dir(&output).unwrap();
        std::fs::write(output.join("keep.rs"), "keep").unwrap();

        let err = promote(&root.path().join("missing"), &output).unwrap_err();
        assert!(matches!(err, CodegenError::Promote { .. }));
        // Nothing was cleared because the staged tree could not be listed
        assert!(output.join("keep.rs").exists());
    }

    #[test]
    fn test_collect_files_sorted_and_recursive() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("b.rs"), "").unwrap();
        std::fs::write(dir.path().join("a.rs"), "").unwrap();
        std::fs::write(dir.path().join("sub").join("c.rs"), "").unwrap();

        let files = collect_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![
                dir.path().join("a.rs"),
                dir.path().join("b.rs"),
                dir.path().join("sub").join("c.rs"),
            ]
        );
    }
}
