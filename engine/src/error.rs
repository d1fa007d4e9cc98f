use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

// Wire-visible messages are pt-BR: the envelope's `error` text is shown
// verbatim on the counter screen.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Falha ao buscar planilha: {source}")]
    SheetFetch {
        #[from]
        source: reqwest::Error,
    },

    #[error("Erro ao ler CSV da planilha: {source}")]
    CsvRead {
        #[from]
        source: csv::Error,
    },

    #[error("UF não informada")]
    UfMissing,

    #[error("UF '{0}' não encontrada")]
    UfUnknown(String),

    // Catch-all for anyhow errors when direct conversion is suitable
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EngineError {
    fn status(&self) -> StatusCode {
        match self {
            EngineError::UfMissing => StatusCode::BAD_REQUEST,
            EngineError::UfUnknown(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        tracing::error!("Mapping EngineError to HTTP response: {:?}", self);
        let body = Json(json!({ "ok": false, "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uf_errors_carry_wire_messages() {
        assert_eq!(EngineError::UfMissing.to_string(), "UF não informada");
        assert_eq!(
            EngineError::UfUnknown("XX".to_string()).to_string(),
            "UF 'XX' não encontrada"
        );
    }

    #[test]
    fn test_uf_errors_map_to_client_statuses() {
        assert_eq!(EngineError::UfMissing.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            EngineError::UfUnknown("XX".to_string()).status(),
            StatusCode::NOT_FOUND
        );
    }
}
