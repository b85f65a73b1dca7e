use std::process;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pdf_text::config::ServerConfig;

#[tokio::main]
async fn main() {
    let matches = ServerConfig::command().get_matches();

    let config = match ServerConfig::from_matches(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("pdf-text-server: {:#}", e);
            process::exit(1);
        }
    };

    // RUST_LOG wins; otherwise info, or errors only in quiet mode
    let default_filter = if config.quiet {
        "error"
    } else {
        "info,tower_http=debug"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    info!("Starting pdf-text-server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = pdf_text::http::serve(config).await {
        error!("Server failed: {:#}", e);
        process::exit(1);
    }
}
