// Root component: provides the shared state and the API client, then lays
// the counter screen out. The region and product loads fire in parallel
// from their own components at mount.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use std::sync::Arc;

use crate::components::{ProductTable, QuotePanel, UfSelector};
use crate::config::AppConfig;
use crate::services::api_client::ApiClient;
use crate::state::app_state::QuoteState;

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    use_context_provider(QuoteState::new);
    use_context_provider(move || {
        Arc::new(
            ApiClient::new(&config.api.base_url, config.api.timeout_secs)
                .expect("HTTP client construction with static options"),
        )
    });

    rsx! {
        div { class: "container",
            h1 { "Balcão de Vendas" }
            UfSelector {}
            ProductTable {}
            QuotePanel {}
        }
    }
}
