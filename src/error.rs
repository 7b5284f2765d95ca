use std::path::PathBuf;

use thiserror::Error;

/// The input file could not be read as spreadsheet data
#[derive(Debug, Error)]
pub enum FileFormatError {
    #[error("failed to open spreadsheet {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("spreadsheet {path:?} contains no sheets")]
    NoSheets { path: PathBuf },

    #[error("failed to read sheet '{sheet}' from {path:?}: {source}")]
    Sheet {
        path: PathBuf,
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}

/// A required column is absent from the loaded table
#[derive(Debug, Error)]
#[error("missing column in the data: '{column}'")]
pub struct MissingColumnError {
    column: String,
}

impl MissingColumnError {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }

    /// Name of the absent column
    pub fn column(&self) -> &str {
        &self.column
    }
}

/// The remote summarization call failed
#[derive(Debug, Error)]
pub enum SummarizationError {
    #[error("OPENAI_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("failed to reach the completion endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion endpoint returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("completion response contained no text")]
    EmptyResponse,
}

/// The summary could not be written to the destination file
#[derive(Debug, Error)]
#[error("failed to write summary to {path:?}: {source}")]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Top-level pipeline failure, one variant per stage
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] FileFormatError),

    #[error(transparent)]
    Aggregate(#[from] MissingColumnError),

    #[error(transparent)]
    Summarize(#[from] SummarizationError),

    #[error(transparent)]
    Persist(#[from] WriteError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_names_column() {
        let err = MissingColumnError::new("Salary");
        assert_eq!(err.column(), "Salary");
        assert!(err.to_string().contains("'Salary'"));
    }

    #[test]
    fn test_pipeline_error_preserves_kind() {
        let err: PipelineError = MissingColumnError::new("Department").into();
        match err {
            PipelineError::Aggregate(e) => assert_eq!(e.column(), "Department"),
            other => panic!("unexpected variant: {}", other),
        }
    }
}
