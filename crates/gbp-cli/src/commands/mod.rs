//! Command handlers, one module per subcommand family.

pub mod award;
pub mod balances;
pub mod check;
pub mod points;

use gbp_core::UserIdentity;

use crate::cli::UserArgs;
use crate::errors::from_core;

/// Build a validated identity from the `--user-id` / `--login` flags.
pub(crate) fn user_from_args(args: &UserArgs) -> anyhow::Result<UserIdentity> {
    UserIdentity::new(args.user_id, args.login.clone()).map_err(from_core)
}
