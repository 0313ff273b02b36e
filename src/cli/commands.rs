//! Process entry: parse arguments, load settings, run the server.

use tracing_subscriber::EnvFilter;

use crate::server::{HttpServer, ServerConfig};
use crate::settings::Settings;

use super::args::{parse_args, Cli};
use super::errors::CliResult;

/// Runs the service to completion.
pub fn run() -> CliResult<()> {
    let cli = parse_args();
    init_logging(cli.debug);

    let settings = Settings::load(&cli.config)?;
    tracing::info!(
        config = %cli.config.display(),
        allowed_filters = ?settings.allowed_filters,
        pagination_limit = settings.pagination_limit,
        "settings loaded"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(serve(&cli, settings))
}

async fn serve(cli: &Cli, settings: Settings) -> CliResult<()> {
    let config = ServerConfig {
        host: cli.bind.clone(),
        port: cli.port,
    };
    HttpServer::new(config, settings).start().await?;
    Ok(())
}

/// Initializes structured logging. `RUST_LOG` wins when set; otherwise
/// `--debug` selects the verbose default.
fn init_logging(debug: bool) {
    let fallback = if debug {
        "auditstore=debug,tower_http=debug"
    } else {
        "auditstore=info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second init (e.g. under tests) is harmless.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
