// crates/wingman-app/src/components/generate/loading_dots.rs
// Animated dots shown on the generate button while a request is in flight

use leptos::prelude::*;

#[component]
pub fn LoadingDots() -> impl IntoView {
    view! {
        <span class="loading-dots">
            <span></span>
            <span></span>
            <span></span>
        </span>
    }
}
