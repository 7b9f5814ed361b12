use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "rollbook", about = "Faculty and student record-keeping service", version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "rollbook.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Initialize Rollbook data directory and configuration
    Init {
        /// Data directory path
        #[arg(long, default_value = "/var/lib/rollbook")]
        data_dir: String,
    },
    /// Start the record API server
    Serve {
        /// Port to listen on (overrides config and the PORT environment variable)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Bulk-import records from a CSV file
    Import {
        /// Record kind to import
        #[arg(long, value_enum)]
        kind: commands::import::RecordKind,
        /// Path to the CSV file
        file: String,
    },
    /// Show record counts and database information
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { data_dir } => {
            commands::init::run(&data_dir).await?;
        }
        Commands::Serve { port } => {
            commands::serve::run(&cli.config, port).await?;
        }
        Commands::Import { kind, file } => {
            commands::import::run(&cli.config, kind, &file).await?;
        }
        Commands::Status => {
            commands::status::run(&cli.config).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn cli_parse_init_defaults() {
        let cli = Cli::parse_from(["rollbook", "init"]);
        assert_eq!(cli.config, "rollbook.toml");
        match cli.command {
            Commands::Init { data_dir } => {
                assert_eq!(data_dir, "/var/lib/rollbook");
            }
            _ => panic!("expected Init command"),
        }
    }

    #[test]
    fn cli_parse_init_custom() {
        let cli = Cli::parse_from([
            "rollbook",
            "--config",
            "/etc/rollbook.toml",
            "init",
            "--data-dir",
            "/opt/rollbook",
        ]);
        assert_eq!(cli.config, "/etc/rollbook.toml");
        match cli.command {
            Commands::Init { data_dir } => {
                assert_eq!(data_dir, "/opt/rollbook");
            }
            _ => panic!("expected Init command"),
        }
    }

    #[test]
    fn cli_parse_serve_defaults() {
        let cli = Cli::parse_from(["rollbook", "serve"]);
        match cli.command {
            Commands::Serve { port } => {
                assert!(port.is_none());
            }
            _ => panic!("expected Serve command"),
        }
    }

    #[test]
    fn cli_parse_serve_custom_port() {
        let cli = Cli::parse_from(["rollbook", "serve", "--port", "3000"]);
        match cli.command {
            Commands::Serve { port } => {
                assert_eq!(port, Some(3000));
            }
            _ => panic!("expected Serve command"),
        }
    }

    #[test]
    fn cli_parse_import_faculty() {
        let cli = Cli::parse_from(["rollbook", "import", "--kind", "faculty", "records.csv"]);
        match cli.command {
            Commands::Import { kind, file } => {
                assert!(matches!(kind, commands::import::RecordKind::Faculty));
                assert_eq!(file, "records.csv");
            }
            _ => panic!("expected Import command"),
        }
    }

    #[test]
    fn cli_parse_import_students() {
        let cli = Cli::parse_from(["rollbook", "import", "--kind", "students", "r.csv"]);
        match cli.command {
            Commands::Import { kind, .. } => {
                assert!(matches!(kind, commands::import::RecordKind::Students));
            }
            _ => panic!("expected Import command"),
        }
    }

    #[test]
    fn cli_parse_import_rejects_unknown_kind() {
        let result = Cli::try_parse_from(["rollbook", "import", "--kind", "courses", "r.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_status() {
        let cli = Cli::parse_from(["rollbook", "status"]);
        assert!(matches!(cli.command, Commands::Status));
    }
}
