//! Run configuration.
//!
//! Built once by the CLI layer and consumed by the core as plain data.
//! Immutable for the lifetime of a run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for one checker run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing the batch files.
    pub dir: PathBuf,

    /// Zero-based index of the identifier column.
    pub id_col: usize,

    /// Zero-based index of the secondary flag column, if enabled.
    ///
    /// Parsed and carried for compatibility with existing batch layouts but
    /// never consulted by the rule chain. Reserved.
    pub flag_col: Option<usize>,

    /// Filename prefix identifying insert files.
    pub insert_prefix: String,

    /// Filename prefix identifying update files.
    pub update_prefix: String,

    /// Minimum acceptable identifier value.
    pub min_id: i64,
}

impl Config {
    /// Configuration with the same defaults the CLI exposes.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            id_col: 0,
            flag_col: None,
            insert_prefix: "insert".to_string(),
            update_prefix: "update".to_string(),
            min_id: 0,
        }
    }
}
