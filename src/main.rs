//! # Static Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor de archivos HTTP/1.0.

use static_server::config::Config;
use static_server::error::StartupError;
use static_server::server::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "static_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("RedUnix static server v0.1.0");

    if let Err(e) = start(Config::new()) {
        tracing::error!(error = %e, "error fatal");
        std::process::exit(1);
    }
}

fn start(config: Config) -> Result<(), StartupError> {
    config.validate().map_err(StartupError::Config)?;
    config.print_summary();

    // Bloquea el thread principal atendiendo conexiones
    Server::new(config).run()
}
