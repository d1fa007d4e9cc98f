use serde::{Deserialize, Serialize};

/// One row of the product tab, as the counter screen displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Produto {
    pub modelo: String,
    /// Card (base) price. A sheet row without a parsable price carries 0.0,
    /// which renders as "R$ 0,00" exactly like the source sheet did.
    pub cartao: f64,
}

// Wire envelopes for the catalog endpoints. Application-level failures
// travel in the body (`ok: false` plus `error`), whatever the HTTP status.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UfsResponse {
    pub ok: bool,
    #[serde(default)]
    pub ufs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreteResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frete: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProdutosResponse {
    pub ok: bool,
    #[serde(default)]
    pub items: Vec<Produto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
