//! Format checks for ledger text beyond what the bulk parser validates.

use std::fmt;

use serde::Serialize;

use super::{parse_ledger, record_id, HEADER};
use crate::error::Result;

/// What is wrong with a ledger line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    /// Records exist but the first line is not the generated header
    MissingHeader,
    /// Not a comment and not a canonical `<id> = <balance> # <login>` record
    Malformed,
    /// ID is not greater than the record before it
    OutOfOrder { previous: u64 },
}

/// A single problem found by [`check_ledger`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerIssue {
    /// 1-based line number
    pub line: usize,
    pub id: Option<u64>,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl fmt::Display for LedgerIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, self.id) {
            (IssueKind::MissingHeader, _) => {
                write!(f, "line {}: generated header missing", self.line)
            }
            (IssueKind::Malformed, _) => write!(f, "line {}: not a balance record", self.line),
            (IssueKind::OutOfOrder { previous }, Some(id)) => write!(
                f,
                "line {}: ID {} sorted after {}",
                self.line, id, previous
            ),
            (kind, None) => write!(f, "line {}: {:?}", self.line, kind),
        }
    }
}

/// Result of checking a ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LedgerReport {
    /// Number of balance records
    pub records: usize,
    pub issues: Vec<LedgerIssue>,
}

impl LedgerReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Split a canonical record line into its ID and balance.
fn canonical_record(line: &str) -> Option<(u64, i64)> {
    let id = record_id(line)?;
    let (_, rest) = line.split_once(" = ")?;
    let (balance, login) = rest.split_once(" # ")?;
    let balance: i64 = balance.parse().ok()?;
    if login.trim().is_empty()
        || login.trim() != login
        || format!("{} = {} # {}", id, balance, login) != line
    {
        return None;
    }
    Some((id, balance))
}

/// Check ledger text against the generated format.
///
/// The text must first pass [`parse_ledger`]; structural errors from it are
/// returned as-is. Format problems (header, canonical lines, ordering) are
/// collected into the report. Duplicate keys never get this far since TOML
/// rejects them, and non-canonical spellings such as `01` are malformed.
pub fn check_ledger(text: &str) -> Result<LedgerReport> {
    parse_ledger(text)?;

    let header = HEADER.trim_end_matches('\n');
    let mut report = LedgerReport::default();
    let mut previous: Option<u64> = None;

    for (index, line) in text.lines().enumerate() {
        let number = index + 1;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((id, _)) = canonical_record(line) else {
            report.issues.push(LedgerIssue {
                line: number,
                id: record_id(line),
                kind: IssueKind::Malformed,
            });
            continue;
        };
        report.records += 1;

        if let Some(prev) = previous.filter(|prev| *prev >= id) {
            report.issues.push(LedgerIssue {
                line: number,
                id: Some(id),
                kind: IssueKind::OutOfOrder { previous: prev },
            });
        }
        previous = Some(previous.map_or(id, |prev| prev.max(id)));
    }

    if report.records > 0 && text.lines().next() != Some(header) {
        report.issues.insert(
            0,
            LedgerIssue {
                line: 1,
                id: None,
                kind: IssueKind::MissingHeader,
            },
        );
    }

    Ok(report)
}
