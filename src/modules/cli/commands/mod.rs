//! CLI commands

mod completion;
mod init;
mod run;

pub use completion::CompletionCommand;
pub use init::InitCommand;
pub use run::RunCommand;

use clap::{Parser, Subcommand};

/// Breed inquiry - search service over the breed table
#[derive(Parser, Debug)]
#[command(name = "breed-inquiry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    ///
    /// This is a *global* option so it can be specified after subcommands,
    /// e.g. `breed-inquiry run -f breed-inquiry.yaml`.
    #[arg(
        short = 'f',
        long = "file",
        global = true,
        default_value = "breed-inquiry.yaml"
    )]
    pub config: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the breed inquiry server
    Run(RunCommand),

    /// Write a starter configuration file
    Init(InitCommand),

    /// Generate shell completion scripts
    #[command(hide = true)]
    Completion(CompletionCommand),
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Effective configuration path
    pub fn config_path(&self) -> &str {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        let cli = Cli::try_parse_from(["breed-inquiry", "run"]).unwrap();
        assert_eq!(cli.config_path(), "breed-inquiry.yaml");
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_with_config_after_subcommand() {
        let cli = Cli::try_parse_from(["breed-inquiry", "run", "-f", "custom.yaml", "-v"]).unwrap();
        assert_eq!(cli.config_path(), "custom.yaml");
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_run_port() {
        let cli = Cli::try_parse_from(["breed-inquiry", "run", "--port", "8081"]).unwrap();
        match cli.command {
            Commands::Run(cmd) => assert_eq!(cmd.port, Some(8081)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["breed-inquiry"]).is_err());
    }
}
