//! The balance ledger: a flat TOML table of `<id> = <balance> # <login>` lines.
//!
//! Records are kept sorted by ascending numeric ID below a generated-file
//! header. Editing works on the text line by line so that comments, the header,
//! and every unrelated record survive byte for byte.

mod check;
mod parse;

use std::path::{Path, PathBuf};

use crate::identity::UserIdentity;

pub use check::{check_ledger, IssueKind, LedgerIssue, LedgerReport};
pub use parse::{balance_of, parse_ledger, BalanceTable};

/// Warning comment written at the top of every generated ledger.
pub const HEADER: &str = "# This file is @generated by the GBP actions. \
If you edit this, preserve the format, and ensure IDs are sorted in numerical order.\n";

/// Directory, relative to the base path, holding the ledger.
pub const BALANCES_DIR: &str = ".github";

/// Ledger file name inside [`BALANCES_DIR`].
pub const BALANCES_FILE_NAME: &str = "gbp-balances.toml";

/// Resolve the ledger path under `base`, or under the current directory.
pub fn balance_path(base: Option<&Path>) -> PathBuf {
    base.unwrap_or_else(|| Path::new("."))
        .join(BALANCES_DIR)
        .join(BALANCES_FILE_NAME)
}

/// Canonical record line for a user.
pub fn balance_line(user: &UserIdentity, balance: i64) -> String {
    format!("{} = {} # {}", user.id(), balance, user.login())
}

/// Leading user ID of a line: the token before the first space, if it is a
/// plain decimal number.
pub(crate) fn record_id(line: &str) -> Option<u64> {
    let token = line.split(' ').next()?;
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// IDs of every record line, in file order.
pub fn record_ids(text: &str) -> impl Iterator<Item = u64> + '_ {
    text.lines().filter_map(record_id)
}

/// Produce the ledger text with `user`'s balance set to `balance`.
///
/// - No existing text (or only whitespace): header plus the new line.
/// - Existing record(s) for the user: each is replaced by the new line.
/// - Otherwise the line is inserted before the first record with a larger ID,
///   or appended at the end.
///
/// Lines that do not start with a numeric ID are passed through untouched.
/// A written line takes the `\r\n` ending of the line it replaces or precedes,
/// and an append uses `\r\n` when the text already does.
pub fn apply_balance(existing: Option<&str>, user: &UserIdentity, balance: i64) -> String {
    let line = balance_line(user, balance);

    let text = match existing {
        Some(text) if !text.trim().is_empty() => text,
        _ => return format!("{}{}", HEADER, line),
    };

    // Lines are split on '\n' only, so a CRLF line keeps its trailing '\r'.
    let line_crlf = format!("{}\r", line);
    let with_ending = |neighbour: &str| {
        if neighbour.ends_with('\r') {
            line_crlf.as_str()
        } else {
            line.as_str()
        }
    };

    let prefix = format!("{} = ", user.id());
    let mut lines: Vec<&str> = text.split('\n').collect();

    let mut replaced = false;
    for slot in lines.iter_mut().filter(|slot| slot.starts_with(&prefix)) {
        *slot = with_ending(*slot);
        replaced = true;
    }
    if replaced {
        return lines.join("\n");
    }

    let insert_at = lines
        .iter()
        .position(|existing| record_id(existing).is_some_and(|id| id > user.id()));
    match insert_at {
        Some(index) => {
            let inserted = with_ending(lines[index]);
            lines.insert(index, inserted);
            lines.join("\n")
        }
        None if text.ends_with('\n') => format!("{}{}", text, line),
        None if text.contains("\r\n") => format!("{}\r\n{}", text, line),
        None => format!("{}\n{}", text, line),
    }
}
