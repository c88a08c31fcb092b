//! # census_clean - schema validation and cleaning for census-income data
//!
//! Validates the UCI "adult" census-income dataset against a fixed 15-column
//! schema, logs every rule violation and removes the offending rows, leaving a
//! table ready for model fitting.
//!
//! ## Quick Start
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
//!
//! ## Core Modules
//!
//! - [`raw_file`]: precondition check on the raw `.data` artifact
//! - [`schema`]: column rules as data, with the built-in adult schema
//! - [`validation`]: exhaustive rule checks, row removal and the violation log
//! - [`io`]: reading the raw file and writing the cleaned CSV
//! - [`pipeline`]: the full `read_and_validate` run
//! - [`config`]: JSON-backed run configuration
//! - [`error`]: error types and handling utilities
//!
//! ## Violations are data
//!
//! A cell outside its domain, a duplicate row or an all-empty row is never an
//! error. [`validation::validate_df`] returns a [`validation::CleanOutcome`]
//! carrying both the cleaned table and the full violation list; the `Err` arm
//! is reserved for fatal conditions such as a missing raw file or an unwritable
//! log.

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod raw_file;
pub mod schema;
pub mod utils;
pub mod validation;
