//! Precondition gate for the raw upstream artifact.
//!
//! Runs before any parsing: the file must exist and carry the `.data`
//! extension. Nothing is read.

use crate::error::{CensusError, Result};
use std::ffi::OsStr;
use std::path::Path;

/// Extension of the raw artifact distributed upstream (case-sensitive).
pub const RAW_EXTENSION: &str = "data";

/// Confirms `path` names an existing `.data` file.
///
/// # Errors
///
/// - [`CensusError::NotFound`] if no file exists at `path`
/// - [`CensusError::FormatMismatch`] if the final extension is not exactly `data`
pub fn validate_raw_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(CensusError::NotFound(path.to_path_buf()));
    }

    if path.extension() != Some(OsStr::new(RAW_EXTENSION)) {
        return Err(CensusError::FormatMismatch(path.to_path_buf()));
    }

    log::debug!("Raw file {} passed precondition checks", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_exist() {
        let result = validate_raw_file("data/raw/non_existent.data");
        assert!(matches!(result, Err(CensusError::NotFound(_))));
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Unable to find raw file")
        );
    }

    #[test]
    fn test_invalid_extension() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let invalid = dir.path().join("adult.txt");
        std::fs::File::create(&invalid)?;

        let result = validate_raw_file(&invalid);
        assert!(matches!(result, Err(CensusError::FormatMismatch(_))));
        assert!(result.unwrap_err().to_string().contains("is not a DATA file"));
        Ok(())
    }

    #[test]
    fn test_extension_is_case_sensitive() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let upper = dir.path().join("adult.DATA");
        std::fs::File::create(&upper)?;

        assert!(matches!(
            validate_raw_file(&upper),
            Err(CensusError::FormatMismatch(_))
        ));
        Ok(())
    }

    #[test]
    fn test_directory_is_not_a_raw_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("adult.data");
        std::fs::create_dir(&nested)?;

        assert!(matches!(
            validate_raw_file(&nested),
            Err(CensusError::NotFound(_))
        ));
        Ok(())
    }

    #[test]
    fn test_valid_data_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let valid = dir.path().join("adult.data");
        std::fs::File::create(&valid)?;

        validate_raw_file(&valid)?;
        Ok(())
    }
}
