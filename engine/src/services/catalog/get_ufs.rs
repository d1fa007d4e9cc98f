// Handler for GET /api/ufs
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use super::CatalogService;
use crate::error::EngineError;
use shared::models::UfsResponse;

pub async fn handle(
    State(svc): State<Arc<CatalogService>>,
) -> Result<Json<UfsResponse>, EngineError> {
    let tabela = svc.frete_table().await?;
    tracing::info!(count = tabela.ufs.len(), "Serving UF list");
    Ok(Json(UfsResponse {
        ok: true,
        ufs: tabela.ufs,
        error: None,
    }))
}
