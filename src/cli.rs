use anyhow::{Context as _, Result};
use census_clean::config::PipelineConfig;
use census_clean::pipeline::read_and_validate;
use census_clean::raw_file::validate_raw_file;
use census_clean::schema::TableSchema;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "census-clean",
    about = "Validate and clean the adult census-income dataset"
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a raw .data file against the schema and write the cleaned CSV
    Validate {
        /// Path to the raw data file
        #[arg(long, alias = "raw_dir")]
        raw_dir: Option<PathBuf>,

        /// Directory the cleaned data will be written to
        #[arg(long, alias = "processor_dir")]
        processor_dir: Option<PathBuf>,

        /// Validation-error log file (truncated on every run)
        #[arg(long, env = "CENSUS_VALIDATION_LOG")]
        log_path: Option<PathBuf>,

        /// JSON rule set to use instead of the built-in adult schema
        #[arg(long)]
        schema: Option<PathBuf>,

        /// Path to a JSON run configuration; flags override its values
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Only check that the raw file exists and has the .data extension
    CheckRaw {
        /// Path to the raw data file
        #[arg(long, alias = "raw_dir")]
        raw_dir: PathBuf,
    },
    /// Print the built-in schema as JSON, or write it to a file
    Schema {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Validate {
            raw_dir,
            processor_dir,
            log_path,
            schema,
            config,
        } => handle_validate(raw_dir, processor_dir, log_path, schema, config),
        Commands::CheckRaw { raw_dir } => {
            validate_raw_file(&raw_dir)?;
            println!("{} passed file existence and format checks.", raw_dir.display());
            Ok(())
        }
        Commands::Schema { output } => handle_schema(output),
    }
}

fn handle_validate(
    raw_dir: Option<PathBuf>,
    processor_dir: Option<PathBuf>,
    log_path: Option<PathBuf>,
    schema: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => PipelineConfig::from_file(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    if let Some(raw) = raw_dir {
        config.raw_path = raw;
    }
    if let Some(dir) = processor_dir {
        config.processed_dir = dir;
    }
    if let Some(path) = log_path {
        config.log_path = path;
    }
    if schema.is_some() {
        config.schema_path = schema;
    }

    let report = read_and_validate(&config)?;

    println!("{}", report.summary());
    if !report.is_clean() {
        println!("Validation errors logged to {}", report.log_path.display());
    }
    println!("Cleaned data saved to {}", report.output_path.display());
    Ok(())
}

fn handle_schema(output: Option<PathBuf>) -> Result<()> {
    let schema = TableSchema::adult_income();
    match output {
        Some(path) => {
            schema
                .to_file(&path)
                .with_context(|| format!("Failed to write schema to {}", path.display()))?;
            println!("Schema written to {}", path.display());
        }
        None => println!("{}", schema.to_json()?),
    }
    Ok(())
}
