// Shared GUI state: one explicit signal bundle provided via context, so
// event handlers receive it as a value instead of reaching for globals and
// the quote math stays testable without a live document.

use dioxus::prelude::*;
use shared::models::Produto;

/// Rendering states of the product table body.
#[derive(Debug, Clone, PartialEq)]
pub enum TableState {
    Loading,
    Failed(String),
    Ready(Vec<Produto>),
}

#[derive(Clone, Copy)]
pub struct QuoteState {
    pub produtos: Signal<TableState>,
    /// Current selection; only ever overwritten, never cleared.
    pub selecionado: Signal<Option<Produto>>,
    /// Default-discount field, applied to the table's cash column at render
    /// time. Distinct from `desconto` on purpose.
    pub desconto_padrao: Signal<String>,
    /// Per-quote discount field, read by recompute and the message.
    pub desconto: Signal<String>,
    /// Freight field text; the UF flow overwrites it with the quoted value.
    pub frete: Signal<String>,
    pub ufs: Signal<Vec<String>>,
    /// Status line next to the UF selector.
    pub uf_status: Signal<String>,
    /// Generated copy/paste message.
    pub mensagem: Signal<String>,
    // Stale-response guards: a reply is applied only while its generation
    // is still the latest for that flow.
    pub produtos_geracao: Signal<u64>,
    pub frete_geracao: Signal<u64>,
}

impl QuoteState {
    pub fn new() -> Self {
        QuoteState {
            produtos: Signal::new(TableState::Loading),
            selecionado: Signal::new(None),
            desconto_padrao: Signal::new("0".to_string()),
            desconto: Signal::new("0".to_string()),
            frete: Signal::new(String::new()),
            ufs: Signal::new(Vec::new()),
            uf_status: Signal::new(String::new()),
            mensagem: Signal::new(String::new()),
            produtos_geracao: Signal::new(0),
            frete_geracao: Signal::new(0),
        }
    }
}
