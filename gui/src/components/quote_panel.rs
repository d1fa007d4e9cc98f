// Quote panel: discount/freight inputs, the three derived totals and the
// copy/paste message block.
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::quote;
use crate::state::app_state::QuoteState;
use shared::money::parse_brl_or_zero;

#[component]
pub fn QuotePanel() -> Element {
    let mut state = use_context::<QuoteState>();

    // Derived from {selection, per-quote discount, freight}; re-runs on any
    // of their writes, including the programmatic one from the UF flow.
    let totals = use_memo(move || {
        quote::recompute(
            state.selecionado.read().as_ref(),
            quote::parse_percent(&state.desconto.read()),
            parse_brl_or_zero(&state.frete.read()),
        )
    });

    rsx! {
        div { class: "quote",
            h2 { "Orçamento" }
            div { class: "campos",
                label { r#for: "desconto", "Desconto (%): " }
                input {
                    id: "desconto",
                    r#type: "number",
                    value: "{state.desconto}",
                    oninput: move |evt| state.desconto.set(evt.value()),
                }
                label { r#for: "frete", "Frete: " }
                input {
                    id: "frete",
                    value: "{state.frete}",
                    oninput: move |evt| state.frete.set(evt.value()),
                }
            }
            div { class: "totais",
                div {
                    "Subtotal à vista: "
                    span { id: "subtotalAvista", {totals.read().avista.clone()} }
                }
                div {
                    "Total à vista + frete: "
                    span { id: "totalAvista", {totals.read().total.clone()} }
                }
                div {
                    "Parcela no 10x: "
                    span { id: "parcela10x", {totals.read().parcela_10x.clone()} }
                }
            }
            div { class: "mensagem",
                button {
                    id: "btnGerar",
                    // Discount and freight are re-read fresh here, never
                    // cached from the last recompute.
                    onclick: move |_| {
                        let msg = quote::build_message(
                            state.selecionado.peek().as_ref(),
                            quote::parse_percent(&state.desconto.peek()),
                            parse_brl_or_zero(&state.frete.peek()),
                        );
                        state.mensagem.set(msg);
                    },
                    "Gerar mensagem"
                }
                textarea {
                    id: "mensagem",
                    rows: "7",
                    value: "{state.mensagem}",
                }
            }
        }
    }
}
