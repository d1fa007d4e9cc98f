// Product table: loads the price list and renders one selectable row per
// product. Rows are pure output of current state, so editing the default
// discount re-renders the cash column without another fetch; the reload
// button is what goes back to the network.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use std::sync::Arc;

use crate::quote;
use crate::services::api_client::ApiClient;
use crate::state::app_state::{QuoteState, TableState};
use shared::money::format_brl;

#[component]
pub fn ProductTable() -> Element {
    let mut state = use_context::<QuoteState>();
    let client = use_context::<Arc<ApiClient>>();

    let load_client = client.clone();
    use_future(move || {
        let client = load_client.clone();
        async move { carregar_produtos(state, client).await }
    });

    let desconto_padrao = quote::parse_percent(&state.desconto_padrao.read());
    let table_state = state.produtos.read().clone();

    rsx! {
        div { class: "produtos",
            div { class: "campos",
                h2 { "Produtos" }
                button {
                    id: "btnRecarregar",
                    onclick: move |_| {
                        let client = client.clone();
                        spawn(async move { carregar_produtos(state, client).await });
                    },
                    "Recarregar"
                }
                label { r#for: "descontoPadrao", "Desconto à vista padrão (%): " }
                input {
                    id: "descontoPadrao",
                    r#type: "number",
                    value: "{state.desconto_padrao}",
                    oninput: move |evt| state.desconto_padrao.set(evt.value()),
                }
            }
            table { id: "tblProdutos",
                thead {
                    tr {
                        th { "" }
                        th { "Modelo" }
                        th { class: "num", "Cartão" }
                        th { class: "num", "À vista" }
                        th { class: "num", "10x sem juros" }
                    }
                }
                tbody {
                    {match table_state {
                        TableState::Loading => rsx! {
                            tr {
                                td { colspan: "5", class: "center muted", "Carregando..." }
                            }
                        },
                        TableState::Failed(msg) => rsx! {
                            tr {
                                td { colspan: "5", class: "erro", "{msg}" }
                            }
                        },
                        TableState::Ready(produtos) if produtos.is_empty() => rsx! {
                            tr {
                                td { colspan: "5", class: "aviso", "Nenhum produto na planilha." }
                            }
                        },
                        TableState::Ready(produtos) => rsx! {
                            {produtos.into_iter().enumerate().map(|(idx, produto)| {
                                let marcado =
                                    state.selecionado.read().as_ref() == Some(&produto);
                                let escolha = produto.clone();
                                rsx! {
                                    tr { key: "{idx}",
                                        td {
                                            input {
                                                r#type: "radio",
                                                name: "pSel",
                                                value: "{idx}",
                                                checked: marcado,
                                                onchange: move |_| {
                                                    state.selecionado.set(Some(escolha.clone()))
                                                },
                                            }
                                        }
                                        td { "{produto.modelo}" }
                                        td { class: "num", {format_brl(produto.cartao)} }
                                        td { class: "num",
                                            {format_brl(quote::cash_price(produto.cartao, desconto_padrao))}
                                        }
                                        td { class: "num",
                                            {format_brl(produto.cartao / quote::NUM_PARCELAS)}
                                        }
                                    }
                                }
                            })}
                        },
                    }}
                }
            }
        }
    }
}

/// Product load: shows the loading row, then replaces the table state with
/// rows, the empty-sheet warning or the failure text. The selection is left
/// as-is across reloads.
pub async fn carregar_produtos(mut state: QuoteState, client: Arc<ApiClient>) {
    let geracao = state.produtos_geracao.with_mut(|g| {
        *g += 1;
        *g
    });
    state.produtos.set(TableState::Loading);

    let resultado = client.listar_produtos().await;
    if *state.produtos_geracao.peek() != geracao {
        tracing::debug!("Dropping superseded product-list reply");
        return;
    }

    match resultado {
        Ok(resp) if resp.ok => {
            tracing::info!(count = resp.items.len(), "Product list loaded");
            state.produtos.set(TableState::Ready(resp.items));
        }
        Ok(resp) => {
            state.produtos.set(TableState::Failed(
                resp.error.unwrap_or_else(|| "Erro".to_string()),
            ));
        }
        Err(e) => {
            tracing::warn!(error = %e, "Product list request failed");
            state.produtos.set(TableState::Failed("Erro".to_string()));
        }
    }
}
