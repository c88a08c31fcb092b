//! The `read_and_validate` stage of the census-income workflow.
//!
//! ```text
//! raw .data file ─> validate_raw_file ─> read_raw_table ─> validate_df ─> cleaned_data.csv
//!                                                              └─> validation_errors.log
//! ```
//!
//! # Example
//!
//! ```no_run
//! use census_clean::config::PipelineConfig;
//! use census_clean::pipeline::read_and_validate;
//!
//! let config = PipelineConfig::new("data/raw/adult.data", "data/processed");
//! let report = read_and_validate(&config)?;
//! println!("{}", report.summary());
//! # Ok::<(), census_clean::error::CensusError>(())
//! ```

pub mod executor;

pub use executor::{RunReport, read_and_validate};
