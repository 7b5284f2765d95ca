use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sheetbrief::{
    execute_aggregate, execute_load, execute_persist, execute_summarize, OpenAiClient,
    OpenAiConfig, PipelineError,
};

#[derive(Parser)]
#[command(name = "sheetbrief")]
#[command(author, version, about = "Spreadsheet statistics summarization pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a natural-language report from a spreadsheet
    Report {
        /// Input spreadsheet file (xlsx, xls, xlsb, ods)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the generated summary (text)
        #[arg(short, long)]
        output: PathBuf,

        /// Model to request completions from
        #[arg(long, default_value = "gpt-4o-mini")]
        model: String,

        /// Maximum tokens in the completion
        #[arg(long, default_value = "150")]
        max_tokens: u32,

        /// Sampling temperature
        #[arg(long, default_value = "0.5")]
        temperature: f64,

        /// Request timeout in seconds
        #[arg(long, default_value = "60")]
        timeout_secs: u64,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Load a spreadsheet and print its statistics without calling the model
    Inspect {
        /// Input spreadsheet file (xlsx, xls, xlsb, ods)
        #[arg(short, long)]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            input,
            output,
            model,
            max_tokens,
            temperature,
            timeout_secs,
            verbose,
        } => {
            setup_logging(verbose);
            run_report(input, output, model, max_tokens, temperature, timeout_secs).await?;
        }
        Commands::Inspect { input, verbose } => {
            setup_logging(verbose);
            inspect_spreadsheet(input)?;
        }
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

/// Run the full pipeline: Load -> Aggregate -> Summarize -> Persist.
/// Each stage is terminal on failure; later stages never execute.
async fn run_report(
    input: PathBuf,
    output: PathBuf,
    model: String,
    max_tokens: u32,
    temperature: f64,
    timeout_secs: u64,
) -> Result<(), PipelineError> {
    info!("Loading spreadsheet from {:?}", input);
    let table = execute_load(&input)?;

    let stats = execute_aggregate(&table)?;
    info!(
        "Aggregated {} rows into {} departments",
        table.row_count(),
        stats.department_count()
    );

    let mut config = OpenAiConfig::from_env()?;
    config.model = model;
    config.max_tokens = max_tokens;
    config.temperature = temperature;
    config.timeout = Duration::from_secs(timeout_secs);
    let client = OpenAiClient::new(config);

    let summary = execute_summarize(&client, &stats).await?;
    println!("\nGenerated Summary:\n{}", summary);

    execute_persist(&summary, &output)?;

    Ok(())
}

fn inspect_spreadsheet(input: PathBuf) -> Result<(), PipelineError> {
    info!("Loading spreadsheet from {:?}", input);
    let table = execute_load(&input)?;

    println!("Spreadsheet Analysis");
    println!("====================");
    println!("Rows: {}", table.row_count());
    println!("Columns: {}", table.column_names().join(", "));
    println!();

    let stats = execute_aggregate(&table)?;

    if stats.average_salary.is_nan() {
        println!("Average salary: n/a (no numeric values)");
    } else {
        println!("Average salary: {:.2}", stats.average_salary);
    }
    println!();

    println!("Department Distribution");
    println!("-----------------------");
    for (department, count) in &stats.department_distribution {
        println!("{}: {}", department, count);
    }
    println!();
    println!(
        "{} departments across {} rows",
        stats.department_count(),
        stats.distribution_total()
    );

    Ok(())
}
