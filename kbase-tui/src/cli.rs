use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "kbase")]
#[command(about = "Terminal knowledge base for short tagged notes")]
pub struct Cli {
    /// Use this storage file instead of the configured one
    #[arg(long, global = true)]
    pub storage_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the notes stored on disk (default)
    Run,
    /// Run against seeded in-memory storage; nothing is written to disk
    Dev,
    /// Print config path and create default file if missing
    ConfigPath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["kbase"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.storage_path.is_none());
    }

    #[test]
    fn test_storage_path_after_subcommand() {
        let cli = Cli::try_parse_from(["kbase", "run", "--storage-path", "/tmp/s.json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Run)));
        assert_eq!(cli.storage_path, Some(PathBuf::from("/tmp/s.json")));
    }

    #[test]
    fn test_config_path_subcommand() {
        let cli = Cli::try_parse_from(["kbase", "config-path"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::ConfigPath)));
    }
}
