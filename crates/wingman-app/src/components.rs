// crates/wingman-app/src/components.rs
// Shared layout components

use leptos::prelude::*;

pub mod generate;

// ============================================================================
// Layout Components
// ============================================================================

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <Header/>
            <main class="flex-1 px-4">
                {children()}
            </main>
            <Footer/>
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <a href="/" class="site-wordmark">"Wingman"</a>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>
                "Built with "
                <a href="https://leptos.dev" target="_blank" rel="noreferrer">"Leptos"</a>
                ". Answers generated by "
                <a href="https://openai.com" target="_blank" rel="noreferrer">"OpenAI"</a>
                "."
            </p>
        </footer>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Layout>
            <div class="max-w-4xl mx-auto py-12 text-center">
                <h1 class="text-4xl font-bold text-error mb-4">"404"</h1>
                <p class="text-muted mb-8">"Page not found"</p>
                <a href="/" class="text-accent">"Go home"</a>
            </div>
        </Layout>
    }
}
