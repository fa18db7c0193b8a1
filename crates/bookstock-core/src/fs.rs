//! Filesystem utilities for the store file.

use std::fs;
use std::io;
use std::path::Path;

/// Create the directory that will hold `path`, if it is missing.
///
/// Paths without a parent component (a bare file name) need nothing.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, or if the parent
/// exists but is not a directory.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => return Ok(()),
    };

    if parent.exists() && !parent.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("Store directory {} is not a directory", parent.display()),
        ));
    }

    fs::create_dir_all(parent).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Failed to create store directory {}: {}", parent.display(), e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_creates_nested_parent() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("a").join("b").join("inventory.db");

        ensure_parent_dir(&target).unwrap();

        assert!(dir.path().join("a").join("b").is_dir());
        assert!(!target.exists());
    }

    #[test]
    fn test_bare_file_name_is_fine() {
        ensure_parent_dir(Path::new("inventory.db")).unwrap();
    }

    #[test]
    fn test_parent_that_is_a_file_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        File::create(&blocker).unwrap();

        let result = ensure_parent_dir(&blocker.join("inventory.db"));
        assert!(result.is_err());
    }
}
