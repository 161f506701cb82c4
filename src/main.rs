use anyhow::Context;
use std::sync::Arc;
use tera::Tera;
use tokio::net::TcpListener;

mod config;
mod data;
mod features;
mod handlers;
mod routes;
mod utils;
#[cfg(test)]
mod test_support;

use config::AppConfig;
use data::repositories::CocktailDbClient;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Invalid configuration")?;

    // Templates configuration
    let templates = Tera::new(&format!("{}/**/*.html", config.templates_dir))
        .context("Template parsing error")?;
    let templates = Arc::new(templates);

    // Upstream API client
    let client = CocktailDbClient::new(&config.api_url, config.upstream_timeout)
        .context("Failed to create HTTP client")?;

    let app = routes::build_router(client, templates, &config.css_dir);

    // Start server
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to address {}", config.bind_addr))?;

    log::info!(
        "Server running on http://{} (upstream {})",
        config.bind_addr,
        config.api_url
    );

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
