// Fetching and parsing of the published sales spreadsheet (CSV export).
// Layout: the product tab keeps the model name in column C and the card
// price in column E; the freight tab keeps the UF in column B and the value
// in column C. Both tabs open with a header row, and stretches of the data
// range sometimes repeat it.

use csv::{ReaderBuilder, StringRecord};
use reqwest::Client;
use shared::models::Produto;
use shared::money;
use std::collections::HashMap;

use crate::error::EngineError;

/// Every Brazilian UF, used when the freight tab yields no codes at all so
/// the selector still has something to offer.
pub const EXPECTED_UFS: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB",
    "PR", "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

// Column labels that identify a repeated header row inside the data range.
const HEADER_LABELS: [&str; 9] = [
    "código",
    "codigo",
    "modelo",
    "a vista",
    "à vista",
    "cartão",
    "cartao",
    "parcela em 10x",
    "link",
];

/// Freight values by UF plus the distinct, sorted UF list.
#[derive(Debug, Clone, Default)]
pub struct FreteTable {
    pub valores: HashMap<String, f64>,
    pub ufs: Vec<String>,
}

/// Downloads a sheet tab and parses every row. The export is headerless as
/// far as the reader is concerned (the header is just row zero) and rows
/// vary in length, so the reader runs flexible.
pub async fn fetch_csv_rows(client: &Client, url: &str) -> Result<Vec<StringRecord>, EngineError> {
    let text = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in rdr.records() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Product rows. Skips the header row, rows shorter than the product
/// columns, repeated header rows and rows without a model name. A price
/// cell that fails to parse becomes 0.0 rather than dropping the row.
pub fn parse_produtos(rows: &[StringRecord]) -> Vec<Produto> {
    rows.iter()
        .skip(1)
        .filter(|r| r.len() >= 6)
        .filter(|r| !is_repeated_header(r))
        .filter_map(|r| {
            let modelo = field(r, 2);
            if modelo.is_empty() {
                return None;
            }
            let cartao = money::parse_brl(field(r, 4)).unwrap_or(0.0);
            Some(Produto {
                modelo: modelo.to_string(),
                cartao,
            })
        })
        .collect()
}

/// Freight rows. Keeps only two-letter UFs with a parsable value; an empty
/// tab falls back to [`EXPECTED_UFS`]. The UF list comes out sorted.
pub fn parse_frete(rows: &[StringRecord]) -> FreteTable {
    let mut valores = HashMap::new();
    let mut ufs: Vec<String> = Vec::new();

    for r in rows.iter().skip(1) {
        if r.len() < 3 {
            continue;
        }
        let uf = normalize_uf(field(r, 1));
        if uf.chars().count() != 2 {
            continue;
        }
        if let Some(valor) = money::parse_brl(field(r, 2)) {
            valores.insert(uf.clone(), valor);
            if !ufs.contains(&uf) {
                ufs.push(uf);
            }
        }
    }

    if ufs.is_empty() {
        ufs = EXPECTED_UFS.iter().map(|s| s.to_string()).collect();
    }
    ufs.sort();

    FreteTable { valores, ufs }
}

/// Uppercases and strips spaces/hyphens; applied both to sheet cells and to
/// the `uf` query parameter so lookups agree.
pub fn normalize_uf(raw: &str) -> String {
    raw.trim().to_uppercase().replace([' ', '-'], "")
}

fn field<'a>(record: &'a StringRecord, idx: usize) -> &'a str {
    record.get(idx).unwrap_or("").trim()
}

fn is_repeated_header(record: &StringRecord) -> bool {
    record.iter().take(9).any(|cell| {
        let c = cell.trim().to_lowercase();
        HEADER_LABELS.contains(&c.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_from(csv_text: &str) -> Vec<StringRecord> {
        ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(csv_text.as_bytes())
            .records()
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_parse_produtos_reads_model_and_card_price() {
        let rows = rows_from(
            "Código,Ref,Modelo,À vista,Cartão,Parcela em 10x\n\
             1,A,Phone X,\"900,00\",\"1.000,00\",\"100,00\"\n\
             2,B,Phone Y,\"1.800,00\",\"2.000,00\",\"200,00\"\n",
        );
        let produtos = parse_produtos(&rows);
        assert_eq!(produtos.len(), 2);
        assert_eq!(produtos[0].modelo, "Phone X");
        assert_eq!(produtos[0].cartao, 1000.0);
        assert_eq!(produtos[1].modelo, "Phone Y");
        assert_eq!(produtos[1].cartao, 2000.0);
    }

    #[test]
    fn test_parse_produtos_skips_repeated_headers_and_short_rows() {
        let rows = rows_from(
            "Código,Ref,Modelo,À vista,Cartão,Parcela em 10x\n\
             1,A,Phone X,\"900,00\",\"1.000,00\",\"100,00\"\n\
             Código,Ref,Modelo,À vista,Cartão,Parcela em 10x\n\
             so,tres,colunas\n\
             2,B,Phone Y,\"1.800,00\",\"2.000,00\",\"200,00\"\n",
        );
        let produtos = parse_produtos(&rows);
        assert_eq!(produtos.len(), 2);
    }

    #[test]
    fn test_parse_produtos_skips_rows_without_model() {
        let rows = rows_from(
            "Código,Ref,Modelo,À vista,Cartão,Parcela em 10x\n\
             1,A,,\"900,00\",\"1.000,00\",\"100,00\"\n\
             2,B,Phone Y,\"1.800,00\",\"2.000,00\",\"200,00\"\n",
        );
        let produtos = parse_produtos(&rows);
        assert_eq!(produtos.len(), 1);
        assert_eq!(produtos[0].modelo, "Phone Y");
    }

    #[test]
    fn test_parse_produtos_unparsable_price_becomes_zero() {
        let rows = rows_from(
            "Código,Ref,Modelo,À vista,Cartão,Parcela em 10x\n\
             1,A,Phone X,\"900,00\",sob consulta,\"100,00\"\n",
        );
        let produtos = parse_produtos(&rows);
        assert_eq!(produtos.len(), 1);
        assert_eq!(produtos[0].cartao, 0.0);
    }

    #[test]
    fn test_parse_frete_normalizes_and_sorts() {
        let rows = rows_from(
            "Região,UF,Frete\n\
             1,\" sp \",\"50,00\"\n\
             2,RJ,\"75,50\"\n\
             3,r-j,\"80,00\"\n\
             4,SUL,\"10,00\"\n",
        );
        let tabela = parse_frete(&rows);
        assert_eq!(tabela.ufs, vec!["RJ".to_string(), "SP".to_string()]);
        assert_eq!(tabela.valores["SP"], 50.0);
        // Later rows for the same UF overwrite earlier ones.
        assert_eq!(tabela.valores["RJ"], 80.0);
        assert!(!tabela.valores.contains_key("SUL"));
    }

    #[test]
    fn test_parse_frete_empty_tab_falls_back_to_all_ufs() {
        let rows = rows_from("Região,UF,Frete\n");
        let tabela = parse_frete(&rows);
        assert_eq!(tabela.ufs.len(), 27);
        assert!(tabela.valores.is_empty());
        let mut sorted = tabela.ufs.clone();
        sorted.sort();
        assert_eq!(tabela.ufs, sorted);
    }

    #[test]
    fn test_normalize_uf() {
        assert_eq!(normalize_uf(" sp "), "SP");
        assert_eq!(normalize_uf("r-j"), "RJ");
        assert_eq!(normalize_uf(""), "");
    }
}
