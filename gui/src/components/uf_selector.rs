// UF selector and its status line: loads the region list once at mount,
// then fetches a freight quote whenever a region is picked.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use std::sync::Arc;

use crate::services::api_client::ApiClient;
use crate::state::app_state::QuoteState;
use shared::money::format_decimal_br;

#[component]
pub fn UfSelector() -> Element {
    let state = use_context::<QuoteState>();
    let client = use_context::<Arc<ApiClient>>();

    let load_client = client.clone();
    use_future(move || {
        let client = load_client.clone();
        async move { carregar_ufs(state, client).await }
    });

    let ufs = state.ufs.read().clone();
    let status = state.uf_status.read().clone();

    rsx! {
        div { class: "uf-row",
            label { r#for: "ufSelect", "Frete por UF: " }
            select {
                id: "ufSelect",
                onchange: move |evt| {
                    let uf = evt.value();
                    // The placeholder performs no request and touches nothing.
                    if uf.is_empty() {
                        return;
                    }
                    let client = client.clone();
                    spawn(async move { aplicar_frete(state, client, uf).await });
                },
                option { value: "", "Selecione..." }
                for uf in ufs {
                    option { value: "{uf}", "{uf}" }
                }
            }
            span { class: "status", "{status}" }
        }
    }
}

/// Initial region load. On any failure the selector keeps only its
/// placeholder and the status line says so.
pub async fn carregar_ufs(mut state: QuoteState, client: Arc<ApiClient>) {
    state.uf_status.set("Carregando UFs...".to_string());
    match client.listar_ufs().await {
        Ok(resp) if resp.ok => {
            state.ufs.set(resp.ufs);
            state.uf_status.set(String::new());
        }
        Ok(_) => {
            tracing::warn!("UF list request returned a failure envelope");
            state
                .uf_status
                .set("Não foi possível carregar UFs agora.".to_string());
        }
        Err(e) => {
            tracing::warn!(error = %e, "UF list request failed");
            state
                .uf_status
                .set("Não foi possível carregar UFs agora.".to_string());
        }
    }
}

/// Freight lookup for a picked UF. Bumps the generation counter first so a
/// reply superseded by a newer pick is dropped when it lands.
pub async fn aplicar_frete(mut state: QuoteState, client: Arc<ApiClient>, uf: String) {
    let geracao = state.frete_geracao.with_mut(|g| {
        *g += 1;
        *g
    });
    state.uf_status.set("Buscando frete...".to_string());

    let resultado = client.consultar_frete(&uf).await;
    if *state.frete_geracao.peek() != geracao {
        tracing::debug!(uf = %uf, "Dropping superseded freight reply");
        return;
    }

    match resultado {
        Ok(resp) if resp.ok => {
            let valor = resp.frete.unwrap_or(0.0);
            // Writing the signal re-runs everything derived from the
            // freight field, the same recompute the typed edits trigger.
            state.frete.set(format_decimal_br(valor));
            state.uf_status.set(format!("Frete {} aplicado.", uf));
        }
        Ok(resp) => {
            state.uf_status.set(
                resp.error
                    .unwrap_or_else(|| "Erro ao buscar frete.".to_string()),
            );
        }
        Err(e) => {
            tracing::warn!(error = %e, uf = %uf, "Freight request failed");
            state.uf_status.set("Falha de rede.".to_string());
        }
    }
}
