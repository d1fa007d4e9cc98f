// Pure quote math: the derived totals and the copy/paste message. Free of
// any UI types on purpose.

use shared::models::Produto;
use shared::money::format_brl;

/// Installment plan length; the sheet and the message both assume 10x.
pub const NUM_PARCELAS: f64 = 10.0;

/// The three derived price labels, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    pub avista: String,
    pub total: String,
    pub parcela_10x: String,
}

/// Lenient percent-field read: anything unparsable counts as zero.
pub fn parse_percent(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

pub fn cash_price(cartao: f64, desconto_pct: f64) -> f64 {
    cartao * (1.0 - desconto_pct / 100.0)
}

/// Totals for the current selection. No selection resets every label to the
/// zero amount, whatever the discount and freight fields hold. Idempotent;
/// no I/O.
pub fn recompute(selecionado: Option<&Produto>, desconto_pct: f64, frete: f64) -> Totals {
    let Some(produto) = selecionado else {
        let zero = format_brl(0.0);
        return Totals {
            avista: zero.clone(),
            total: zero.clone(),
            parcela_10x: zero,
        };
    };

    let avista = cash_price(produto.cartao, desconto_pct);
    let total = avista + frete;
    let parcela = produto.cartao / NUM_PARCELAS;

    Totals {
        avista: format_brl(avista),
        total: format_brl(total),
        parcela_10x: format_brl(parcela),
    }
}

/// Fixed-order multi-line quote for copy/paste. Discount and freight are
/// passed in fresh by the caller, never cached from an earlier recompute.
pub fn build_message(selecionado: Option<&Produto>, desconto_pct: f64, frete: f64) -> String {
    let Some(produto) = selecionado else {
        return "Selecione um produto.".to_string();
    };

    let avista = cash_price(produto.cartao, desconto_pct);
    let total = avista + frete;
    let parcela = produto.cartao / NUM_PARCELAS;

    [
        format!("Produto: {}", produto.modelo),
        format!("Preço no cartão: {}", format_brl(produto.cartao)),
        format!("À vista ({:.2}%): {}", desconto_pct, format_brl(avista)),
        format!("Frete: {}", format_brl(frete)),
        format!("Total à vista + frete: {}", format_brl(total)),
        format!(
            "10x sem juros: {} (total {})",
            format_brl(parcela),
            format_brl(produto.cartao)
        ),
    ]
    .join("\n")
}
