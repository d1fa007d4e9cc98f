// Engine settings; the defaults carry the production spreadsheet
// coordinates and the cache windows the endpoints serve from.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct EngineSettings {
    pub host: String,
    pub port: u16,
    /// Host serving the published spreadsheet; tests point this at a mock.
    pub sheet_base_url: String,
    pub sheet_id: String,
    pub gid_produtos: String,
    pub gid_frete: String,
    pub produtos_ttl_secs: i64,
    pub frete_ttl_secs: i64,
}

impl EngineSettings {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn produtos_csv_url(&self) -> String {
        self.csv_export_url(&self.gid_produtos)
    }

    pub fn frete_csv_url(&self) -> String {
        self.csv_export_url(&self.gid_frete)
    }

    fn csv_export_url(&self, gid: &str) -> String {
        format!(
            "{}/{}/export?format=csv&gid={}",
            self.sheet_base_url, self.sheet_id, gid
        )
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            host: "127.0.0.1".to_string(),
            port: 5001,
            sheet_base_url: "https://docs.google.com/spreadsheets/d".to_string(),
            sheet_id: "1Ycsc6ksvaO5EwOGq_w-N8awTKUyuo7awwu2IzRNfLVg".to_string(),
            gid_produtos: "0".to_string(),
            gid_frete: "117017797".to_string(),
            produtos_ttl_secs: 300,
            frete_ttl_secs: 1800,
        }
    }
}
