// TTL-stamped cache for the spreadsheet-backed catalog. An empty entry is
// never considered fresh: a sheet that came back blank is retried on the
// next request instead of being served for the whole window.

use chrono::{DateTime, Duration, Utc};
use shared::models::Produto;

use super::sheet::FreteTable;

struct Cached<T> {
    fetched_at: DateTime<Utc>,
    value: T,
}

impl<T> Cached<T> {
    fn is_fresh(&self, ttl_secs: i64) -> bool {
        Utc::now() - self.fetched_at < Duration::seconds(ttl_secs)
    }
}

#[derive(Default)]
pub struct CatalogStore {
    produtos: Option<Cached<Vec<Produto>>>,
    frete: Option<Cached<FreteTable>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fresh_produtos(&self, ttl_secs: i64) -> Option<Vec<Produto>> {
        self.produtos
            .as_ref()
            .filter(|c| !c.value.is_empty() && c.is_fresh(ttl_secs))
            .map(|c| c.value.clone())
    }

    pub fn put_produtos(&mut self, produtos: Vec<Produto>) {
        self.produtos = Some(Cached {
            fetched_at: Utc::now(),
            value: produtos,
        });
    }

    pub fn fresh_frete(&self, ttl_secs: i64) -> Option<FreteTable> {
        self.frete
            .as_ref()
            .filter(|c| !c.value.valores.is_empty() && c.is_fresh(ttl_secs))
            .map(|c| c.value.clone())
    }

    pub fn put_frete(&mut self, tabela: FreteTable) {
        self.frete = Some(Cached {
            fetched_at: Utc::now(),
            value: tabela,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn produto(modelo: &str) -> Produto {
        Produto {
            modelo: modelo.to_string(),
            cartao: 100.0,
        }
    }

    #[test]
    fn test_fresh_entry_is_served_within_ttl() {
        let mut store = CatalogStore::new();
        store.put_produtos(vec![produto("X")]);
        assert!(store.fresh_produtos(300).is_some());
        assert!(store.fresh_produtos(-1).is_none());
    }

    #[test]
    fn test_empty_entry_is_never_fresh() {
        let mut store = CatalogStore::new();
        store.put_produtos(Vec::new());
        assert!(store.fresh_produtos(300).is_none());

        store.put_frete(FreteTable::default());
        assert!(store.fresh_frete(300).is_none());
    }

    #[test]
    fn test_missing_entry_is_not_fresh() {
        let store = CatalogStore::new();
        assert!(store.fresh_produtos(300).is_none());
        assert!(store.fresh_frete(300).is_none());
    }
}
