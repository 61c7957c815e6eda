//! Filesystem helpers
//!
//! In-process replacements for the shelled `cp -r` / `mkdir` calls: the
//! build-output tree copy into the wrapper's `www/` directory and APK
//! collection.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{WrapError, WrapResult};

/// Recursively copy the contents of `src` into `dst`.
///
/// `dst` is created if needed; existing files are overwritten. Matches
/// `cp -r src/* dst/` semantics: the `src` directory itself is not
/// recreated under `dst`.
pub fn copy_tree(src: &Path, dst: &Path) -> WrapResult<usize> {
    if !src.is_dir() {
        return Err(WrapError::MissingArtifact {
            path: src.to_path_buf(),
        });
    }

    fs::create_dir_all(dst)?;
    let mut copied = 0;

    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| WrapError::Io(std::io::Error::other(e)))?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .expect("walkdir yields paths under its root");
        if rel.as_os_str().is_empty() {
            continue;
        }
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Copy a single file into `dst_dir`, creating the directory if absent.
///
/// Fails with `MissingArtifact` when `src` does not exist.
pub fn collect_file(src: &Path, dst_dir: &Path) -> WrapResult<()> {
    if !src.is_file() {
        return Err(WrapError::MissingArtifact {
            path: src.to_path_buf(),
        });
    }
    fs::create_dir_all(dst_dir)?;
    let name = src
        .file_name()
        .ok_or_else(|| WrapError::MissingArtifact {
            path: src.to_path_buf(),
        })?;
    fs::copy(src, dst_dir.join(name))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn copy_tree_copies_nested_contents() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("dist/shop");
        let dst = dir.path().join("www");
        fs::create_dir_all(src.join("assets")).unwrap();
        fs::write(src.join("index.html"), "<html></html>").unwrap();
        fs::write(src.join("assets/app.js"), "js").unwrap();

        let copied = copy_tree(&src, &dst).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(
            fs::read_to_string(dst.join("index.html")).unwrap(),
            "<html></html>"
        );
        assert_eq!(fs::read_to_string(dst.join("assets/app.js")).unwrap(), "js");
    }

    #[test]
    fn copy_tree_overwrites_existing_files() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dst).unwrap();
        fs::write(src.join("index.html"), "new").unwrap();
        fs::write(dst.join("index.html"), "old").unwrap();

        copy_tree(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("index.html")).unwrap(), "new");
    }

    #[test]
    fn copy_tree_missing_source_is_missing_artifact() {
        let dir = tempdir().unwrap();
        let err = copy_tree(&dir.path().join("nope"), &dir.path().join("www")).unwrap_err();
        assert!(matches!(err, WrapError::MissingArtifact { .. }));
    }

    #[test]
    fn collect_file_creates_output_dir() {
        let dir = tempdir().unwrap();
        let apk = dir.path().join("app-debug.apk");
        fs::write(&apk, "bytes").unwrap();
        let out = dir.path().join("apks");

        collect_file(&apk, &out).unwrap();

        assert_eq!(
            fs::read_to_string(out.join("app-debug.apk")).unwrap(),
            "bytes"
        );
    }

    #[test]
    fn collect_file_missing_apk() {
        let dir = tempdir().unwrap();
        let err =
            collect_file(&dir.path().join("app-debug.apk"), &dir.path().join("apks")).unwrap_err();
        assert!(matches!(err, WrapError::MissingArtifact { .. }));
    }
}
