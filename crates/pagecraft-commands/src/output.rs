//! Writing rendered pages to disk.

use std::fs;
use std::io;
use std::path::Path;

/// Writes `content` to `path` through a temporary sibling file and a rename.
///
/// Parent directories are created as needed. A reader never observes a
/// half-written page, and an existing file keeps its permissions.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)?;
	}

	let original_perms = fs::metadata(path).ok().map(|m| m.permissions());

	let tmp_path = path.with_extension("tmp");
	fs::write(&tmp_path, content)?;

	if let Err(e) = fs::rename(&tmp_path, path) {
		let _ = fs::remove_file(&tmp_path);
		return Err(e);
	}

	if let Some(perms) = original_perms {
		fs::set_permissions(path, perms)?;
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_write_creates_parents() {
		// Arrange
		let dir = tempfile::tempdir().expect("failed to create temp dir");
		let path = dir.path().join("nested/deeper/page.html");

		// Act
		write_atomic(&path, "<p>hi</p>").expect("write page");

		// Assert
		assert_eq!(fs::read_to_string(&path).unwrap(), "<p>hi</p>");
		assert!(!path.with_extension("tmp").exists());
	}

	#[rstest]
	fn test_write_replaces_existing() {
		// Arrange
		let dir = tempfile::tempdir().expect("failed to create temp dir");
		let path = dir.path().join("page.html");
		fs::write(&path, "old").expect("seed file");

		// Act
		write_atomic(&path, "new").expect("overwrite page");

		// Assert
		assert_eq!(fs::read_to_string(&path).unwrap(), "new");
	}
}
