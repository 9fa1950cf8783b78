// crates/wingman-app/src/lib.rs
// Wingman Studio - Leptos WASM frontend (CSR)

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod pages;

pub use components::{Footer, Header, Layout, NotFound};
use pages::HomePage;

// Re-export shared types
pub use wingman_types::*;

// ============================================================================
// WASM Entry Point
// ============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    // Initialize logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Wingman Studio starting...");

    // Mount the app
    leptos::mount::mount_to_body(App);
}

// ============================================================================
// App Root
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Wingman"/>
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=HomePage/>
            </Routes>
        </Router>
    }
}
