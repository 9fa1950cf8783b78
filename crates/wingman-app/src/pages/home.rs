// crates/wingman-app/src/pages/home.rs
// Generator page - persona picker, question box, streamed answer cards

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use wingman_types::{compose_prompt, split_answers, Persona};

use crate::api::stream_answers;
use crate::components::generate::{AnswerCard, DropDown, LoadingDots};
use crate::Layout;

#[component]
pub fn HomePage() -> impl IntoView {
    let (question, set_question) = signal(String::new());
    let (persona, set_persona) = signal(Persona::Passive);
    let (answers, set_answers) = signal(String::new());
    let (loading, set_loading) = signal(false);

    // Cards re-derive on every streamed chunk
    let cards = Memo::new(move |_| split_answers(&answers.get()));

    // Reference for scrolling down to the answers once a run finishes
    let answers_ref = NodeRef::<html::Div>::new();

    let generate_answer = move |_| {
        if loading.get() {
            return;
        }

        let prompt = compose_prompt(persona.get(), &question.get());
        set_answers.set(String::new());
        set_loading.set(true);

        spawn_local(async move {
            match stream_answers(&prompt, move |chunk| {
                set_answers.update(|buf| buf.push_str(chunk));
            })
            .await
            {
                Ok(_) => {
                    if let Some(el) = answers_ref.get() {
                        el.scroll_into_view();
                    }
                }
                Err(e) => log::error!("Generation failed: {}", e),
            }
            set_loading.set(false);
        });
    };

    view! {
        <Layout>
            <div class="generate-page">
                <h1 class="hero-title">"Never fumble the first line again"</h1>
                <p class="hero-subtitle">
                    "Pick a persona, ask away, and click any answer to copy it."
                </p>

                <div class="generate-form">
                    <div class="step-label">
                        <span class="step-number">"1"</span>
                        <p>
                            "Ask your question "
                            <span class="text-muted">"(or anything about breaking the ice)"</span>
                            "."
                        </p>
                    </div>
                    <textarea
                        rows=4
                        class="question-input"
                        placeholder="e.g. What is the best pickup line to use at the library at 6pm?"
                        prop:value=move || question.get()
                        on:input=move |ev| set_question.set(event_target_value(&ev))
                    ></textarea>

                    <div class="step-label">
                        <span class="step-number">"2"</span>
                        <p>"Pick a persona."</p>
                    </div>
                    <DropDown persona=persona set_persona=set_persona/>

                    {move || if loading.get() {
                        view! {
                            <button class="generate-btn" disabled=true>
                                <LoadingDots/>
                            </button>
                        }.into_any()
                    } else {
                        view! {
                            <button class="generate-btn" on:click=generate_answer>
                                "Wing me up →"
                            </button>
                        }.into_any()
                    }}
                </div>

                <hr class="divider"/>

                <div class="answers-section">
                    {move || {
                        (!answers.get().is_empty()).then(|| view! {
                            <div node_ref=answers_ref>
                                <h2 class="answers-title">"Wingman says:"</h2>
                            </div>
                            <div class="answers-list">
                                <For
                                    each=move || cards.get()
                                    key=|card| card.clone()
                                    children=move |card| {
                                        view! { <AnswerCard text=card/> }
                                    }
                                />
                            </div>
                        })
                    }}
                </div>
            </div>
        </Layout>
    }
}
