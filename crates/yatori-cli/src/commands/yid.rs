//! Generate random identifiers.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use yatori_core::config::AppConfig;
use yatori_core::error::AppError;
use yatori_link::IdentifierGenerator;

/// Arguments for the yid command
#[derive(Debug, Args)]
pub struct YidArgs {
    /// Identifier length, 1 to 64 (defaults to the configured yid_length)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..=64))]
    pub length: Option<u16>,

    /// Number of identifiers to generate, at most 10000
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=10_000))]
    pub count: u16,

    /// Prefix placed before each identifier
    #[arg(short, long)]
    pub prefix: Option<String>,
}

/// Identifier display row
#[derive(Debug, Serialize, Tabled)]
struct YidRow {
    /// Generated identifier
    yid: String,
}

/// Execute the yid command
pub fn execute(args: &YidArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let length = args.length.map_or(config.link.yid_length, usize::from);

    let generator = IdentifierGenerator::new();
    let rows: Vec<YidRow> = (0..args.count)
        .map(|_| YidRow {
            yid: generator.generate_prefixed(args.prefix.as_deref(), length),
        })
        .collect();

    output::print_rows(&rows, format)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::commands::{Cli, Commands};

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(["yatori", "yid"].into_iter().chain(args.iter().copied()))
    }

    #[test]
    fn test_accepts_bounds() {
        let cli = parse(&["--length", "64", "-n", "10000"]).expect("should parse");
        match cli.command {
            Commands::Yid(args) => {
                assert_eq!(args.length, Some(64));
                assert_eq!(args.count, 10_000);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_oversized_length_and_count() {
        assert!(parse(&["--length", "65"]).is_err());
        assert!(parse(&["--length", "0"]).is_err());
        assert!(parse(&["-n", "10001"]).is_err());
        assert!(parse(&["-n", "0"]).is_err());
    }
}
