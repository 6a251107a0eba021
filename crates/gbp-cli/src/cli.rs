use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use gbp_core::VERSION;

use crate::constants::{BASE_PATH_ENV, CONFIG_ENV};

/// GBP - points from work-item labels, kept in a sorted TOML ledger
#[derive(Parser)]
#[command(name = "gbp")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Repository root holding `.github/gbp-balances.toml`
    #[arg(short, long, global = true, env = BASE_PATH_ENV, value_name = "DIR")]
    pub base_path: Option<String>,

    /// Path to the points configuration (default: <base>/.github/gbp.toml)
    #[arg(short, long, global = true, env = CONFIG_ENV, value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the points for a set of labels
    Points(PointsArgs),

    /// Add the points for a set of labels to a user's balance
    Award(AwardArgs),

    /// Overwrite a user's balance
    Set(SetArgs),

    /// Show all balances in the ledger
    Show(ShowArgs),

    /// Check the ledger format (header, ordering, canonical lines)
    Check(CheckArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Identity flags shared by commands that write a balance.
#[derive(Args)]
pub struct UserArgs {
    /// Numeric user ID
    #[arg(long, value_name = "ID")]
    pub user_id: u64,

    /// Display login written in the line comment
    #[arg(long, value_name = "LOGIN")]
    pub login: String,
}

/// Arguments for the `points` command
#[derive(Args)]
pub struct PointsArgs {
    /// Label applied to the work item (repeatable)
    #[arg(short, long = "label", value_name = "LABEL")]
    pub labels: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `award` command
#[derive(Args)]
pub struct AwardArgs {
    #[command(flatten)]
    pub user: UserArgs,

    /// Label applied to the work item (repeatable)
    #[arg(short, long = "label", value_name = "LABEL")]
    pub labels: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `set` command
#[derive(Args)]
pub struct SetArgs {
    #[command(flatten)]
    pub user: UserArgs,

    /// New balance
    #[arg(long, allow_negative_numbers = true)]
    pub balance: i64,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `check` command
#[derive(Args)]
pub struct CheckArgs {
    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_award() {
        let cli = Cli::try_parse_from([
            "gbp", "award", "--user-id", "42", "--login", "alice", "-l", "bug", "--label", "good-job",
        ])
        .unwrap();
        match cli.command {
            Commands::Award(args) => {
                assert_eq!(args.user.user_id, 42);
                assert_eq!(args.user.login, "alice");
                assert_eq!(args.labels, vec!["bug", "good-job"]);
            }
            _ => panic!("expected award"),
        }
    }

    #[test]
    fn test_parse_negative_balance() {
        let cli = Cli::try_parse_from([
            "gbp", "set", "--user-id", "1", "--login", "a", "--balance", "-7",
        ])
        .unwrap();
        match cli.command {
            Commands::Set(args) => assert_eq!(args.balance, -7),
            _ => panic!("expected set"),
        }
    }
}
