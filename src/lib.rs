//! # Batchcheck - CSV batch-file integrity checking
//!
//! Batchcheck validates a directory of CSV batch files carrying "insert" and
//! "update" records keyed by a numeric identifier, and flags rows violating
//! the batch rules before downstream ingestion:
//!
//! - a second occurrence of an identifier in an insert file,
//! - an identifier below the configured minimum,
//! - any repeat appearance of an already-flagged identifier.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Directory  │────▶│   Runner    │────▶│   Checker   │────▶│ Output sink │
//! │  (source)   │     │ (sort/read) │     │ (rule chain)│     │ (diag+sum)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use batchcheck::{Config, OsDirectory, Runner};
//!
//! let cfg = Config::new("./batches");
//! let mut runner = Runner::new(cfg, OsDirectory, std::io::stdout());
//! let stats = runner.run()?;
//! println!("{} insert errors", stats.insert_errors);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Run-fatal error types
//! - [`config`] - Run configuration
//! - [`source`] - Directory access abstraction (real FS and in-memory)
//! - [`checker`] - Stateful validation engine and rule chain
//! - [`runner`] - Run orchestration and reporting

pub mod checker;
pub mod config;
pub mod error;
pub mod runner;
pub mod source;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{RunError, RunResult};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::Config;

// =============================================================================
// Re-exports - Sources
// =============================================================================

pub use source::{DirectorySource, MemoryDirectory, OsDirectory, SourceEntry};

// =============================================================================
// Re-exports - Checker
// =============================================================================

pub use checker::{Checker, FileKind, Violation};

// =============================================================================
// Re-exports - Runner
// =============================================================================

pub use runner::{RunStats, Runner};
