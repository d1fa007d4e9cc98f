// GUI components module
pub mod product_table;
pub mod quote_panel;
pub mod uf_selector;

pub use product_table::ProductTable;
pub use quote_panel::QuotePanel;
pub use uf_selector::UfSelector;
