// Handler for GET /api/frete?uf=<code>
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use super::CatalogService;
use crate::data::sheet::normalize_uf;
use crate::error::EngineError;
use shared::models::FreteResponse;

#[derive(Debug, Deserialize)]
pub struct FreteQuery {
    #[serde(default)]
    pub uf: String,
}

pub async fn handle(
    State(svc): State<Arc<CatalogService>>,
    Query(query): Query<FreteQuery>,
) -> Result<Json<FreteResponse>, EngineError> {
    let uf = normalize_uf(&query.uf);
    if uf.is_empty() {
        return Err(EngineError::UfMissing);
    }

    let tabela = svc.frete_table().await?;
    let valor = tabela
        .valores
        .get(&uf)
        .copied()
        .ok_or_else(|| EngineError::UfUnknown(uf.clone()))?;

    tracing::info!(uf = %uf, frete = valor, "Serving freight quote");
    Ok(Json(FreteResponse {
        ok: true,
        uf: Some(uf),
        frete: Some(valor),
        error: None,
    }))
}
