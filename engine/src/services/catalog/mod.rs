// engine/src/services/catalog/mod.rs
// Main module hub for the catalog service: holds the HTTP client, the TTL
// cache and the axum router, and declares the per-route handler modules.

use axum::routing::get;
use axum::Router;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::config::settings::EngineSettings;
use crate::data::sheet::{self, FreteTable};
use crate::data::store::CatalogStore;
use crate::error::EngineError;
use shared::models::Produto;

pub mod get_frete;
pub mod get_produtos;
pub mod get_ufs;

pub struct CatalogService {
    settings: EngineSettings,
    http: Client,
    store: RwLock<CatalogStore>,
}

impl CatalogService {
    pub fn new(settings: EngineSettings) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(CatalogService {
            settings,
            http,
            store: RwLock::new(CatalogStore::new()),
        })
    }

    pub fn router(self: Arc<Self>) -> Router {
        Router::new()
            .route("/api/ufs", get(get_ufs::handle))
            .route("/api/frete", get(get_frete::handle))
            .route("/api/produtos", get(get_produtos::handle))
            .with_state(self)
    }

    /// Current product list, served from cache while the entry is fresh.
    pub async fn produtos(&self) -> Result<Vec<Produto>, EngineError> {
        if let Some(produtos) = self
            .store
            .read()
            .await
            .fresh_produtos(self.settings.produtos_ttl_secs)
        {
            return Ok(produtos);
        }

        let rows = sheet::fetch_csv_rows(&self.http, &self.settings.produtos_csv_url()).await?;
        let produtos = sheet::parse_produtos(&rows);
        tracing::info!(count = produtos.len(), "Loaded product rows from the sheet");
        self.store.write().await.put_produtos(produtos.clone());
        Ok(produtos)
    }

    /// Freight table, served from cache while the entry is fresh.
    pub async fn frete_table(&self) -> Result<FreteTable, EngineError> {
        if let Some(tabela) = self
            .store
            .read()
            .await
            .fresh_frete(self.settings.frete_ttl_secs)
        {
            return Ok(tabela);
        }

        let rows = sheet::fetch_csv_rows(&self.http, &self.settings.frete_csv_url()).await?;
        let tabela = sheet::parse_frete(&rows);
        tracing::info!(ufs = tabela.ufs.len(), "Loaded freight rows from the sheet");
        self.store.write().await.put_frete(tabela.clone());
        Ok(tabela)
    }
}

#[cfg(test)]
mod tests {
    use super::get_frete::FreteQuery;
    use super::*;
    use axum::extract::{Query, State};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PRODUTOS_CSV: &str = "Código,Ref,Modelo,À vista,Cartão,Parcela em 10x\n\
        1,A,Phone X,\"900,00\",\"1.000,00\",\"100,00\"\n\
        2,B,Phone Y,\"1.800,00\",\"2.000,00\",\"200,00\"\n";
    const FRETE_CSV: &str = "Região,UF,Frete\n1,SP,\"50,00\"\n2,RJ,\"75,50\"\n";

    fn test_settings(server: &MockServer) -> EngineSettings {
        EngineSettings {
            sheet_base_url: server.uri(),
            ..EngineSettings::default()
        }
    }

    async fn mount_tab(server: &MockServer, settings: &EngineSettings, gid: &str, body: &str, hits: u64) {
        Mock::given(method("GET"))
            .and(path(format!("/{}/export", settings.sheet_id)))
            .and(query_param("gid", gid))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(hits)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_produtos_parses_sheet_and_serves_cache() {
        let server = MockServer::start().await;
        let settings = test_settings(&server);
        mount_tab(&server, &settings, &settings.gid_produtos, PRODUTOS_CSV, 1).await;

        let svc = CatalogService::new(settings).unwrap();

        let first = svc.produtos().await.unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].modelo, "Phone X");
        assert_eq!(first[0].cartao, 1000.0);

        // Second call lands inside the TTL: the mock's expect(1) verifies
        // the sheet was only fetched once.
        let second = svc.produtos().await.unwrap();
        assert_eq!(second, first);
    }

    #[tokio::test]
    async fn test_produtos_maps_http_failure_to_envelope_error() {
        let server = MockServer::start().await;
        let settings = test_settings(&server);
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let svc = CatalogService::new(settings).unwrap();
        let err = svc.produtos().await.unwrap_err();
        assert!(matches!(err, EngineError::SheetFetch { .. }));
    }

    #[tokio::test]
    async fn test_get_ufs_handler_returns_sorted_codes() {
        let server = MockServer::start().await;
        let settings = test_settings(&server);
        mount_tab(&server, &settings, &settings.gid_frete, FRETE_CSV, 1).await;

        let svc = Arc::new(CatalogService::new(settings).unwrap());
        let axum::Json(resp) = get_ufs::handle(State(svc)).await.unwrap();
        assert!(resp.ok);
        assert_eq!(resp.ufs, vec!["RJ".to_string(), "SP".to_string()]);
    }

    #[tokio::test]
    async fn test_get_frete_handler_normalizes_and_quotes() {
        let server = MockServer::start().await;
        let settings = test_settings(&server);
        mount_tab(&server, &settings, &settings.gid_frete, FRETE_CSV, 1).await;

        let svc = Arc::new(CatalogService::new(settings).unwrap());
        let query = Query(FreteQuery {
            uf: " sp ".to_string(),
        });
        let axum::Json(resp) = get_frete::handle(State(svc), query).await.unwrap();
        assert!(resp.ok);
        assert_eq!(resp.uf.as_deref(), Some("SP"));
        assert_eq!(resp.frete, Some(50.0));
    }

    #[tokio::test]
    async fn test_get_frete_handler_rejects_missing_uf() {
        let server = MockServer::start().await;
        let settings = test_settings(&server);
        let svc = Arc::new(CatalogService::new(settings).unwrap());

        let query = Query(FreteQuery { uf: String::new() });
        let err = get_frete::handle(State(svc), query).await.unwrap_err();
        assert!(matches!(err, EngineError::UfMissing));
    }

    #[tokio::test]
    async fn test_get_frete_handler_unknown_uf_is_not_found() {
        let server = MockServer::start().await;
        let settings = test_settings(&server);
        mount_tab(&server, &settings, &settings.gid_frete, FRETE_CSV, 1).await;

        let svc = Arc::new(CatalogService::new(settings).unwrap());
        let query = Query(FreteQuery {
            uf: "MG".to_string(),
        });
        let err = get_frete::handle(State(svc), query).await.unwrap_err();
        assert!(matches!(err, EngineError::UfUnknown(uf) if uf == "MG"));
    }

    #[tokio::test]
    async fn test_get_produtos_handler_wraps_items() {
        let server = MockServer::start().await;
        let settings = test_settings(&server);
        mount_tab(&server, &settings, &settings.gid_produtos, PRODUTOS_CSV, 1).await;

        let svc = Arc::new(CatalogService::new(settings).unwrap());
        let axum::Json(resp) = get_produtos::handle(State(svc)).await.unwrap();
        assert!(resp.ok);
        assert_eq!(resp.items.len(), 2);
        assert!(resp.error.is_none());
    }
}
