//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Schema-driven audit log service.
#[derive(Debug, Parser)]
#[command(name = "auditstore", version, about = "Audit log REST service")]
pub struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub bind: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8092)]
    pub port: u16,

    /// Path to the optional settings file
    #[arg(long, default_value = "local_settings.json")]
    pub config: PathBuf,

    /// Enable debug-level logging
    #[arg(long)]
    pub debug: bool,
}

/// Parses process arguments.
pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["auditstore"]);
        assert_eq!(cli.bind, "0.0.0.0");
        assert_eq!(cli.port, 8092);
        assert_eq!(cli.config, PathBuf::from("local_settings.json"));
        assert!(!cli.debug);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "auditstore",
            "--bind",
            "127.0.0.1",
            "--port",
            "9000",
            "--config",
            "/etc/auditstore.json",
            "--debug",
        ]);
        assert_eq!(cli.bind, "127.0.0.1");
        assert_eq!(cli.port, 9000);
        assert_eq!(cli.config, PathBuf::from("/etc/auditstore.json"));
        assert!(cli.debug);
    }
}
