//! Run orchestration.
//!
//! The [`Runner`] drives one full check: it lists the target directory,
//! keeps only `.csv` files, sorts them byte-wise ascending, classifies each
//! by filename prefix, feeds every data row to the [`Checker`](crate::checker::Checker)
//! and streams a diagnostic line per flagged row to the output sink,
//! followed by exactly one summary line.
//!
//! Filename ordering is a deliberate contract: byte-wise string order, not
//! numeric (`INS_10.csv` sorts before `INS_2.csv`). Callers relying on
//! numeric ordering must zero-pad filenames.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::checker::{Checker, FileKind};
use crate::config::Config;
use crate::error::{RunError, RunResult};
use crate::source::DirectorySource;

/// Aggregate error counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Flagged rows across all insert files.
    pub insert_errors: usize,
    /// Flagged rows across all update files.
    pub update_errors: usize,
}

/// Orchestrates one check over a directory of batch files.
///
/// Owns the run-scoped identifier state; build a fresh `Runner` per run.
pub struct Runner<S, W> {
    cfg: Config,
    source: S,
    out: W,
    checker: Checker,
}

impl<S: DirectorySource, W: Write> Runner<S, W> {
    pub fn new(cfg: Config, source: S, out: W) -> Self {
        let checker = Checker::new(cfg.id_col, cfg.min_id);
        Self {
            cfg,
            source,
            out,
            checker,
        }
    }

    /// Process every eligible file and emit the summary line.
    ///
    /// Any listing, open, decode or output failure aborts the run; partial
    /// statistics are discarded.
    pub fn run(&mut self) -> RunResult<RunStats> {
        let entries = self
            .source
            .list_entries(&self.cfg.dir)
            .map_err(|source| RunError::ListDir {
                dir: self.cfg.dir.clone(),
                source,
            })?;

        let mut filenames: Vec<String> = entries
            .into_iter()
            .filter(|e| !e.is_dir)
            .filter(|e| Path::new(&e.name).extension().is_some_and(|ext| ext == "csv"))
            .map(|e| e.name)
            .collect();
        filenames.sort();

        let mut stats = RunStats::default();

        for filename in &filenames {
            let kind = FileKind::classify(filename, &self.cfg.insert_prefix, &self.cfg.update_prefix);
            let bucket = match kind {
                FileKind::Insert => &mut stats.insert_errors,
                FileKind::Update => &mut stats.update_errors,
                FileKind::Skip => {
                    debug!(file = %filename, "skipping file: no matching prefix");
                    continue;
                }
            };
            let file_errors = self.process_file(filename, kind)?;
            *bucket += file_errors;
        }

        writeln!(
            self.out,
            "insert errors: {} update errors: {}",
            stats.insert_errors, stats.update_errors
        )?;

        Ok(stats)
    }

    /// Process a single file, returning its flagged-row count.
    ///
    /// The first row is discarded as a header; an empty file is zero errors.
    /// The header counts as row 1, so the first data row reports as row 2.
    fn process_file(&mut self, filename: &str, kind: FileKind) -> RunResult<usize> {
        let path = self.cfg.dir.join(filename);
        let file = self
            .source
            .open(&path)
            .map_err(|source| RunError::OpenFile {
                file: filename.to_string(),
                source,
            })?;

        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(file);
        let mut records = reader.into_records();

        let mut row_num = 1usize;
        match records.next() {
            None => return Ok(0),
            Some(Err(source)) => {
                return Err(RunError::Decode {
                    file: filename.to_string(),
                    row: row_num,
                    source,
                })
            }
            Some(Ok(_header)) => {}
        }

        let mut file_errors = 0usize;
        for result in records {
            let record = result.map_err(|source| RunError::Decode {
                file: filename.to_string(),
                row: row_num + 1,
                source,
            })?;
            row_num += 1;

            if let Some(violation) = self.checker.check_row(&record, kind) {
                file_errors += 1;
                let fields: Vec<&str> = record.iter().collect();
                writeln!(
                    self.out,
                    "{}({}) - {} : {}",
                    filename,
                    row_num,
                    violation.reason(),
                    fields.join(",")
                )?;
            }
        }

        Ok(file_errors)
    }
}
