use anyhow::Context;
use clap::Parser;
use flightdeck_api::{config::FlightdeckApiConfig, context::ApiContext, server};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = FlightdeckApiConfig::parse();

    if !config.dump_openapi {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "flightdeck_api=info,flightdeck_db=info".into()),
            )
            .pretty()
            .init();
    }

    let context = ApiContext::new(config)
        .await
        .context("Failed to initialise API context")?;
    let config = context.config.clone();
    let (router, api) = server::make(context);

    if config.dump_openapi {
        let json = api.to_pretty_json()?;
        print!("{}", json);
        return Ok(());
    }

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    info!("Listening on http://{:?}", config.bind_addr);

    axum::serve(listener, router)
        .await
        .context("Failed to start server")
}
