//! Command-line interface for the tic-tac-toe terminal game.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File to write logs to, overriding the config file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive (e.g. "debug"), overriding the config file
    #[arg(long)]
    pub log_filter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_overrides() {
        let cli = Cli::parse_from([
            "tictactoe",
            "--config",
            "custom.toml",
            "--log-filter",
            "debug",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(cli.log_filter.as_deref(), Some("debug"));
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
