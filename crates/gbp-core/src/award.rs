//! Load → compute → edit → persist for a single user.

use serde::Serialize;
use tracing::info;

use crate::config::PointsConfiguration;
use crate::error::{GbpError, Result};
use crate::identity::UserIdentity;
use crate::ledger::{apply_balance, balance_of, parse_ledger};
use crate::points::compute_points;
use crate::store::LedgerStore;

/// Outcome of awarding points to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Award {
    pub user_id: u64,
    /// Balance before this award (0 for a new user)
    pub previous: i64,
    /// Points computed from the labels
    pub delta: i64,
    /// Balance written to the ledger
    pub balance: i64,
}

/// Add the points for `labels` to `user`'s balance and persist the ledger.
///
/// The user's line is written even when the delta is zero.
///
/// # Errors
///
/// - `GbpError::Parse` / `GbpError::Validation` if the existing ledger is
///   corrupt; nothing is persisted in that case
/// - `GbpError::Other` if the new balance overflows
/// - `GbpError::Storage` if persisting fails
pub fn award_points<S: AsRef<str>>(
    store: &dyn LedgerStore,
    configuration: &PointsConfiguration,
    labels: &[S],
    user: &UserIdentity,
) -> Result<Award> {
    let delta = compute_points(configuration, labels);
    let existing = store.load();

    let previous = match existing.as_deref() {
        Some(text) => balance_of(&parse_ledger(text)?, user.id()).unwrap_or(0),
        None => 0,
    };
    let balance = previous.checked_add(delta).ok_or_else(|| {
        GbpError::Other(format!(
            "Balance overflow for user {}: {} + {}",
            user.id(),
            previous,
            delta
        ))
    })?;

    store.persist(&apply_balance(existing.as_deref(), user, balance))?;
    info!(user = %user, previous, delta, balance, "awarded points");

    Ok(Award {
        user_id: user.id(),
        previous,
        delta,
        balance,
    })
}

/// Overwrite `user`'s balance and persist the ledger.
///
/// # Errors
///
/// Returns `GbpError::Storage` if persisting fails.
pub fn set_balance(store: &dyn LedgerStore, user: &UserIdentity, balance: i64) -> Result<()> {
    let existing = store.load();
    store.persist(&apply_balance(existing.as_deref(), user, balance))?;
    info!(user = %user, balance, "set balance");
    Ok(())
}
