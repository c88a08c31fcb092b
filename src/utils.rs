use crate::error::Result;
use std::path::{Path, PathBuf};

/// Creates `directory` if it is missing and returns the path of `file_name` inside it.
///
/// The file itself is not created.
///
/// # Errors
///
/// Fails if the directory cannot be created.
pub fn prepare_output_path(directory: impl AsRef<Path>, file_name: &str) -> Result<PathBuf> {
    let directory = directory.as_ref();
    if !directory.is_dir() {
        std::fs::create_dir_all(directory)?;
    }
    Ok(directory.join(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_output_path_creates_directory() -> Result<()> {
        let root = tempfile::tempdir()?;
        let dir = root.path().join("processed").join("nested");

        let path = prepare_output_path(&dir, "cleaned_data.csv")?;
        assert!(dir.is_dir());
        assert_eq!(path, dir.join("cleaned_data.csv"));
        assert!(!path.exists());

        // second call is a no-op on an existing directory
        assert_eq!(prepare_output_path(&dir, "cleaned_data.csv")?, path);
        Ok(())
    }
}
