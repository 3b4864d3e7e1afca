#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::todo)]
#![warn(clippy::panic)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(unreachable_pub)]
#![warn(missing_debug_implementations)]
#![warn(unused_qualifications)]
#![deny(unused_must_use)]

use healthd::api::{self, AppState};
use healthd::config::Config;
use healthd::services::health_service::HealthService;
use healthd::{adapters, telemetry};
use std::net::SocketAddr;
use tokio::sync::watch;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();
    let telemetry_guard = telemetry::init_telemetry(&config.telemetry)?;

    anyhow::ensure!(
        !config.checks.website_probe_enabled || config.checks.website_url.is_some(),
        "HEALTHD_WEBSITE_URL must be set when the website probe is enabled"
    );

    let pool = adapters::database::init_pool(&config.database_url)?;
    let health_service = HealthService::new(pool, config.checks.clone())?;

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    healthd::spawn_signal_handler(shutdown_tx);

    let app = api::router(AppState { health_service });

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(address = %addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.wait_for(|&s| s).await;
        })
        .await?;

    telemetry_guard.shutdown();
    Ok(())
}
