// Brazilian currency formatting and parsing, shared by the engine (sheet
// cells) and the GUI (freight field, displayed totals).

use once_cell::sync::Lazy;
use regex::Regex;

// First numeric run in a cell, used to salvage values out of noisy text
// like "aprox. 1.234,56 via PIX".
static NUMERIC_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+[.,]?[0-9]*)").expect("Invalid numeric regex"));

/// Formats an amount as "R$ X,YY": exactly two decimals, comma as the
/// decimal separator, no thousands separator. Always succeeds; non-finite
/// amounts are treated as zero.
pub fn format_brl(valor: f64) -> String {
    format!("R$ {}", format_decimal_br(valor))
}

/// Same as [`format_brl`] without the currency prefix; the form the freight
/// field holds ("50,00").
pub fn format_decimal_br(valor: f64) -> String {
    let v = if valor.is_finite() { valor } else { 0.0 };
    format!("{v:.2}").replace('.', ",")
}

/// Parses a Brazilian-formatted amount ("R$ 1.234,56", "1234,56", "50").
/// Strips the currency prefix, spaces and thousands dots, then converts the
/// decimal comma. When that fails, retries on the first numeric run found
/// in the raw text.
pub fn parse_brl(texto: &str) -> Option<f64> {
    let t = texto.trim();
    if t.is_empty() {
        return None;
    }
    let normalized = t
        .replace("R$", "")
        .replace(' ', "")
        .replace('.', "")
        .replace(',', ".");
    if let Ok(v) = normalized.parse::<f64>() {
        return Some(v);
    }
    let run = NUMERIC_RUN.find(texto)?;
    let salvaged = run.as_str().replace('.', "").replace(',', ".");
    salvaged.parse::<f64>().ok()
}

/// Field read for the GUI: unparsable or empty input degrades to zero, it
/// is never surfaced as an error.
pub fn parse_brl_or_zero(texto: &str) -> f64 {
    parse_brl(texto).unwrap_or(0.0)
}
