//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

/// Flood-It - fill the board with one color before the turns run out
#[derive(Parser, Debug)]
#[command(name = "floodit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Seed for the board and palette generator (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file; filtered by RUST_LOG (default "info")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_unseeded_without_logging() {
        let cli = Cli::try_parse_from(["floodit"]).unwrap();
        assert_eq!(cli.seed, None);
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn parses_seed_and_log_file() {
        let cli = Cli::try_parse_from(["floodit", "--seed", "42", "--log-file", "flood.log"]).unwrap();
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.log_file, Some(PathBuf::from("flood.log")));
    }

    #[test]
    fn rejects_non_numeric_seed() {
        assert!(Cli::try_parse_from(["floodit", "--seed", "abc"]).is_err());
    }
}
