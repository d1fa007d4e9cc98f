// Engine main entry point
use engine::config::settings::EngineSettings;
use engine::services::catalog::CatalogService;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting Balcão de Vendas engine...");

    let settings = EngineSettings::default();
    let addr = settings.bind_addr();
    info!("Engine will listen on {}", addr);

    let service = Arc::new(CatalogService::new(settings)?);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, service.router()).await?;

    Ok(())
}
