//! Stateful row validation engine.
//!
//! The engine owns the identifier state carried across every file of a run
//! and classifies each row through an ordered rule chain:
//!
//! 1. `repeat-offender` — any row whose identifier was already flagged,
//!    insert or update.
//! 2. `duplicate-insert` — insert rows whose identifier was already accepted
//!    by an insert file.
//! 3. `below-minimum` — insert rows whose identifier parses below the
//!    configured minimum.
//! 4. `accept` — insert rows record their identifier as seen; update rows
//!    pass unconditionally.
//!
//! First match wins. Duplicate detection deliberately precedes the minimum
//! check so a bad identifier appearing twice is reported once for the more
//! specific fault, and once flagged, every later appearance collapses to the
//! generic repeat reason.

use std::collections::HashSet;

use csv::StringRecord;
use tracing::{debug, warn};

// =============================================================================
// File classification
// =============================================================================

/// Role of a batch file, decided once per filename by prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Rows introduce new identifiers; subject to the full rule chain.
    Insert,
    /// Rows modify existing identifiers; unknown identifiers are ignored.
    Update,
    /// Neither prefix matched; the file is not processed.
    Skip,
}

impl FileKind {
    /// Classify a filename by the configured prefixes.
    pub fn classify(filename: &str, insert_prefix: &str, update_prefix: &str) -> FileKind {
        if filename.starts_with(insert_prefix) {
            FileKind::Insert
        } else if filename.starts_with(update_prefix) {
            FileKind::Update
        } else {
            FileKind::Skip
        }
    }
}

// =============================================================================
// Violations
// =============================================================================

/// Why a row was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The identifier was already flagged earlier in the run.
    RepeatOffender,
    /// Second occurrence of the identifier in an insert file.
    DuplicateInsert,
    /// The identifier parsed below the configured minimum.
    BelowMinimum,
}

impl Violation {
    /// Human-readable reason, part of the diagnostic line contract.
    pub fn reason(&self) -> &'static str {
        match self {
            Violation::RepeatOffender => "repeat appearance of a previously-errored subject",
            Violation::DuplicateInsert => "second occurrence in an insert file",
            Violation::BelowMinimum => "identifier below minimum",
        }
    }
}

// =============================================================================
// Run state
// =============================================================================

/// Identifier state accumulated across every file of one run.
///
/// Owned exclusively by the [`Checker`]; one instance per run, never reset
/// mid-run. `errored` is grow-only: once an identifier enters it, every
/// later row bearing it is flagged as a repeat offender.
#[derive(Debug, Default)]
struct RunState {
    /// Identifiers accepted by any insert file so far.
    seen_inserts: HashSet<String>,
    /// Identifiers flagged by any rule so far.
    errored: HashSet<String>,
}

// =============================================================================
// Rule chain
// =============================================================================

/// Outcome of a single rule against a row.
#[derive(Debug, PartialEq, Eq)]
enum RuleOutcome {
    /// The rule matched and flags the row; stop evaluating.
    Flag(Violation),
    /// The rule classified the row as ok; stop evaluating.
    Pass,
    /// The rule does not apply; try the next one.
    Next,
}

type Rule = fn(&mut Checker, &str, FileKind) -> RuleOutcome;

/// The rule chain, in precedence order. First match wins.
const RULE_CHAIN: [(&str, Rule); 4] = [
    ("repeat-offender", rules::repeat_offender),
    ("duplicate-insert", rules::duplicate_insert),
    ("below-minimum", rules::below_minimum),
    ("accept", rules::accept),
];

mod rules {
    use super::*;

    /// Rule 1: an already-flagged identifier is always re-flagged, on both
    /// insert and update rows. Does not mutate state.
    pub(super) fn repeat_offender(c: &mut Checker, id: &str, _kind: FileKind) -> RuleOutcome {
        if c.state.errored.contains(id) {
            RuleOutcome::Flag(Violation::RepeatOffender)
        } else {
            RuleOutcome::Next
        }
    }

    /// Rule 2: a second occurrence within insert files.
    pub(super) fn duplicate_insert(c: &mut Checker, id: &str, kind: FileKind) -> RuleOutcome {
        if kind == FileKind::Insert && c.state.seen_inserts.contains(id) {
            c.state.errored.insert(id.to_string());
            RuleOutcome::Flag(Violation::DuplicateInsert)
        } else {
            RuleOutcome::Next
        }
    }

    /// Rule 3: an insert identifier strictly below the minimum.
    ///
    /// An identifier that does not parse as i64 is never an error here: the
    /// rule is skipped with a diagnostic and evaluation continues.
    pub(super) fn below_minimum(c: &mut Checker, id: &str, kind: FileKind) -> RuleOutcome {
        if kind != FileKind::Insert {
            return RuleOutcome::Next;
        }
        match id.parse::<i64>() {
            Ok(value) if value < c.min_id => {
                c.state.errored.insert(id.to_string());
                RuleOutcome::Flag(Violation::BelowMinimum)
            }
            Ok(_) => RuleOutcome::Next,
            Err(err) => {
                warn!(id, error = %err, "identifier not parseable as i64, minimum check skipped");
                RuleOutcome::Next
            }
        }
    }

    /// Rule 4: acceptance. Insert rows record the identifier as seen; update
    /// rows for identifiers never seen in an insert file are ignored.
    pub(super) fn accept(c: &mut Checker, id: &str, kind: FileKind) -> RuleOutcome {
        if kind == FileKind::Insert {
            c.state.seen_inserts.insert(id.to_string());
        }
        RuleOutcome::Pass
    }
}

// =============================================================================
// Checker
// =============================================================================

/// The validation engine. One instance per run.
#[derive(Debug)]
pub struct Checker {
    id_col: usize,
    min_id: i64,
    state: RunState,
}

impl Checker {
    pub fn new(id_col: usize, min_id: i64) -> Self {
        Self {
            id_col,
            min_id,
            state: RunState::default(),
        }
    }

    /// Classify one row. Returns the violation if the row is flagged.
    ///
    /// A row too short to reach the identifier column passes silently with a
    /// warn-level diagnostic; the engine never validates overall row shape.
    pub fn check_row(&mut self, record: &StringRecord, kind: FileKind) -> Option<Violation> {
        let Some(id) = record.get(self.id_col) else {
            warn!(
                len = record.len(),
                required_idx = self.id_col,
                "row too short to reach identifier column"
            );
            return None;
        };

        for (name, rule) in RULE_CHAIN {
            match rule(self, id, kind) {
                RuleOutcome::Flag(violation) => {
                    debug!(rule = name, id = %id, "row flagged");
                    return Some(violation);
                }
                RuleOutcome::Pass => return None,
                RuleOutcome::Next => continue,
            }
        }
        None
    }
}
