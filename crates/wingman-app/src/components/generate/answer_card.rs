// crates/wingman-app/src/components/generate/answer_card.rs
// Clickable answer card that copies its text to the clipboard

use leptos::prelude::*;

#[component]
pub fn AnswerCard(text: String) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let text_clone = text.clone();

    let copy_answer = move |_| {
        let text = text_clone.clone();
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen_futures::spawn_local;
            spawn_local(async move {
                if let Some(window) = web_sys::window() {
                    let clipboard = window.navigator().clipboard();
                    let _ = wasm_bindgen_futures::JsFuture::from(
                        clipboard.write_text(&text)
                    ).await;
                    set_copied.set(true);
                    // Reset after 2 seconds
                    gloo_timers::future::TimeoutFuture::new(2000).await;
                    set_copied.set(false);
                }
            });
        }
    };

    view! {
        <div
            class=move || if copied.get() { "answer-card copied" } else { "answer-card" }
            on:click=copy_answer
        >
            <p>{text}</p>
            {move || copied.get().then(|| view! {
                <span class="answer-card-notice">"Copied to clipboard"</span>
            })}
        </div>
    }
}
