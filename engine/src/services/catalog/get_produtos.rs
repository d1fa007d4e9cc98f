// Handler for GET /api/produtos
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use super::CatalogService;
use crate::error::EngineError;
use shared::models::ProdutosResponse;

pub async fn handle(
    State(svc): State<Arc<CatalogService>>,
) -> Result<Json<ProdutosResponse>, EngineError> {
    let items = svc.produtos().await?;
    tracing::info!(count = items.len(), "Serving product list");
    Ok(Json(ProdutosResponse {
        ok: true,
        items,
        error: None,
    }))
}
