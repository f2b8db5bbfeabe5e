mod api;
mod client;
mod constants;
mod error;
mod formatters;
mod models;
mod service;
mod weather;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use rmcp::ServiceExt;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::service::Weather;
use crate::weather::WeatherService;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// MCP server over stdio
    Mcp,
    /// REST API server
    Api,
    /// Both MCP (stdio) and REST API in one process
    Both,
}

#[derive(Debug, Parser)]
#[command(name = "nws-weather-server", about = "Weather alerts and forecasts from the National Weather Service")]
struct Args {
    /// Server mode
    #[arg(long, value_enum, default_value = "mcp")]
    mode: Mode,

    /// Host to bind the REST API server to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port for the REST API server
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

async fn run_mcp(service: WeatherService) -> Result<()> {
    tracing::info!("Starting MCP weather server on stdio");

    let server = Weather::new(service).serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("MCP server shutdown complete");
    Ok(())
}

async fn run_api(service: WeatherService, host: &str, port: u16) -> Result<()> {
    let listener = TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("REST API listening on {}", listener.local_addr()?);

    axum::serve(listener, api::router(service)).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nws_weather_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let service = WeatherService::new()?;

    match args.mode {
        Mode::Mcp => run_mcp(service).await?,
        Mode::Api => run_api(service, &args.host, args.port).await?,
        Mode::Both => {
            let api_service = service.clone();
            tokio::try_join!(run_mcp(service), run_api(api_service, &args.host, args.port))?;
        }
    }

    Ok(())
}
