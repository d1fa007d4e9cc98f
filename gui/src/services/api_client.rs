// Typed HTTP client for the engine's catalog endpoints.

use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

use shared::models::{FreteResponse, ProdutosResponse, UfsResponse};

pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(ApiClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    // The `ok`/`error` envelope travels in the body on every status code,
    // so responses are decoded without checking the HTTP status first.

    pub async fn listar_ufs(&self) -> Result<UfsResponse> {
        let resp = self
            .http
            .get(format!("{}/api/ufs", self.base_url))
            .send()
            .await?;
        Ok(resp.json().await?)
    }

    pub async fn consultar_frete(&self, uf: &str) -> Result<FreteResponse> {
        let resp = self
            .http
            .get(format!("{}/api/frete", self.base_url))
            .query(&[("uf", uf)])
            .send()
            .await?;
        Ok(resp.json().await?)
    }

    pub async fn listar_produtos(&self) -> Result<ProdutosResponse> {
        let resp = self
            .http
            .get(format!("{}/api/produtos", self.base_url))
            .send()
            .await?;
        Ok(resp.json().await?)
    }
}
