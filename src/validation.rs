//! Schema validation and cleaning for census tables.
//!
//! The pass is batch-oriented: every rule runs over the full table, every
//! violation is collected, and only then are offending rows removed.
//!
//! # Example
//!
//! ```no_run
//! use census_clean::schema::TableSchema;
//! use census_clean::validation::{ViolationLog, validate_df};
//! # fn run(table: polars::prelude::DataFrame) -> census_clean::error::Result<()> {
//!
//! let mut sink = ViolationLog::create("data/logs/validation_errors.log")?;
//! let outcome = validate_df(table, &TableSchema::adult_income(), &mut sink)?;
//! println!(
//!     "kept {} rows, {} violations logged",
//!     outcome.rows_after(),
//!     outcome.violations.len()
//! );
//! # Ok(())
//! # }
//! ```

pub mod audit;
mod cells;
pub mod checks;
pub mod cleaner;
pub mod violation;

pub use audit::{DEFAULT_LOG_PATH, ViolationLog};
pub use checks::collect_violations;
pub use cleaner::{CleanOutcome, drop_duplicate_rows, drop_empty_rows, remove_rows, validate_df};
pub use violation::{CheckKind, Violation, ViolationReport, implicated_rows};
