use std::io::Write;
use std::path::Path;

use crate::error::WriteError;

/// Write the summary's exact bytes to the destination file,
/// creating it or truncating any existing content.
pub fn write_summary(summary: &str, path: &Path) -> Result<(), WriteError> {
    let mut file = std::fs::File::create(path).map_err(|e| WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    file.write_all(summary.as_bytes()).map_err(|e| WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_identity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.txt");
        let summary = "Average pay is $60k, mostly Engineering.";

        write_summary(summary, &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), summary);
    }

    #[test]
    fn test_overwrites_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.txt");

        std::fs::write(&path, "previous content that is much longer").unwrap();
        write_summary("short", &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_unwritable_directory_is_write_error() {
        let result = write_summary("text", Path::new("/nonexistent/dir/summary.txt"));
        let err = result.unwrap_err();
        assert_eq!(err.path, Path::new("/nonexistent/dir/summary.txt"));
    }
}
