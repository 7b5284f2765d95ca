pub mod error;
pub mod io;
pub mod llm;
pub mod models;
pub mod stages;

pub use error::{
    FileFormatError, MissingColumnError, PipelineError, SummarizationError, WriteError,
};
pub use io::{read_spreadsheet, write_summary};
pub use llm::{build_summary_prompt, OpenAiClient, OpenAiConfig, SYSTEM_PROMPT};
pub use models::{CellValue, Column, Statistics, Table};
pub use stages::{
    execute_aggregate, execute_load, execute_persist, execute_summarize, DEPARTMENT_COLUMN,
    SALARY_COLUMN,
};
