use std::path::Path;

use tracing::info;

use crate::error::WriteError;
use crate::io::write_summary;

/// Execute the Persist stage: write the summary to the destination file,
/// overwriting any existing content.
pub fn execute_persist(summary: &str, path: &Path) -> Result<(), WriteError> {
    write_summary(summary, path)?;

    info!("Summary successfully saved to {:?}", path);

    Ok(())
}
