//! Enumerates rename candidates under a base directory.
//!
//! Discovery is lazy and single-pass: nothing is collected up front, and the
//! walk advances only as far as the consumer pulls. `preview` relies on this to
//! stop reading the directory once it has enough entries.
use crate::config::TargetSpec;
use crate::core_types::FileCandidate;
use crate::errors::{Error, Result};
use std::path::{Path, PathBuf};

mod entry_processor;
mod walker;

use entry_processor::{process_direntry, to_candidate};
use walker::build_walker;

/// A lazy sequence of regular-file paths produced by [`enumerate`].
pub struct FileEnumerator {
    walk: ignore::Walk,
}

impl Iterator for FileEnumerator {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        for entry_result in self.walk.by_ref() {
            if let Some(path) = process_direntry(entry_result) {
                return Some(path);
            }
        }
        None
    }
}

/// Walks `base_directory` and yields every regular file in it.
///
/// With `recursive` set, nested subdirectories are visited too; otherwise
/// only the immediate children are considered. Symlinks to files are yielded;
/// dangling symlinks and directories are not.
///
/// # Errors
/// Returns `Error::Directory` if `base_directory` does not exist or is not a
/// directory.
///
/// # Examples
///
/// ```
/// use rename2date::discovery::enumerate;
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// fs::create_dir(temp.path().join("sub"))?;
/// fs::write(temp.path().join("a.jpg"), "a")?;
/// fs::write(temp.path().join("sub").join("b.jpg"), "b")?;
///
/// assert_eq!(enumerate(temp.path(), false)?.count(), 1);
/// assert_eq!(enumerate(temp.path(), true)?.count(), 2);
/// # Ok(())
/// # }
/// ```
pub fn enumerate(base_directory: &Path, recursive: bool) -> Result<FileEnumerator> {
    if !base_directory.is_dir() {
        let reason = if base_directory.exists() {
            "not a directory"
        } else {
            "directory does not exist"
        };
        return Err(Error::Directory {
            path: base_directory.to_path_buf(),
            reason: reason.to_string(),
        });
    }
    Ok(FileEnumerator {
        walk: build_walker(base_directory, recursive),
    })
}

/// Enumerates the files of `spec` that pass the extension filter.
pub fn discover_candidates(spec: &TargetSpec) -> Result<impl Iterator<Item = FileCandidate>> {
    let extension_filter = spec.extension_filter.clone();
    let files = enumerate(&spec.base_directory, spec.recursive)?;
    Ok(files.filter_map(move |path| to_candidate(&path, &extension_filter)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::tempdir;

    fn names(paths: impl Iterator<Item = PathBuf>) -> HashSet<String> {
        paths
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_enumerate_recursive_and_flat() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let sub = temp.path().join("sub");
        fs::create_dir(&sub)?;
        fs::write(temp.path().join("a.jpg"), "a")?;
        fs::write(sub.join("b.jpg"), "b")?;

        let flat = names(enumerate(temp.path(), false)?);
        assert_eq!(flat, HashSet::from(["a.jpg".to_string()]));

        let deep = names(enumerate(temp.path(), true)?);
        assert_eq!(
            deep,
            HashSet::from(["a.jpg".to_string(), "b.jpg".to_string()])
        );
        Ok(())
    }

    #[test]
    fn test_enumerate_includes_hidden_and_ignored_files() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join(".gitignore"), "*.jpg\n")?;
        fs::write(temp.path().join(".hidden.jpg"), "h")?;
        fs::write(temp.path().join("ignored.jpg"), "i")?;

        let found = names(enumerate(temp.path(), true)?);
        assert!(found.contains(".hidden.jpg"));
        assert!(found.contains("ignored.jpg"));
        Ok(())
    }

    #[test]
    fn test_enumerate_skips_directories() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::create_dir(temp.path().join("folder.jpg"))?;
        assert_eq!(enumerate(temp.path(), true)?.count(), 0);
        Ok(())
    }

    #[test]
    fn test_enumerate_missing_directory() {
        let result = enumerate(Path::new("no_such_dir_for_rename2date"), true);
        assert!(matches!(result, Err(Error::Directory { .. })));
    }

    #[test]
    fn test_enumerate_file_is_not_a_directory() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file = temp.path().join("a.jpg");
        fs::write(&file, "a")?;
        match enumerate(&file, true) {
            Err(Error::Directory { reason, .. }) => assert_eq!(reason, "not a directory"),
            _ => panic!("Expected Error::Directory"),
        }
        Ok(())
    }

    #[test]
    fn test_discover_candidates_filters_extensions() -> anyhow::Result<()> {
        let temp = tempdir()?;
        for name in ["a.jpg", "b.JPG", "c.png", "d.jpeg"] {
            fs::write(temp.path().join(name), name)?;
        }
        let spec = TargetSpec::new_for_test(temp.path());
        let found: HashSet<String> = discover_candidates(&spec)?
            .map(|c| c.filename)
            .collect();
        assert_eq!(
            found,
            HashSet::from(["a.jpg".to_string(), "b.JPG".to_string()])
        );
        Ok(())
    }
}
