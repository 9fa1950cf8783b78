// crates/wingman-app/src/components/generate/dropdown.rs
// Persona picker

use leptos::prelude::*;
use wingman_types::Persona;

#[component]
pub fn DropDown(
    persona: ReadSignal<Persona>,
    set_persona: WriteSignal<Persona>,
) -> impl IntoView {
    view! {
        <select
            class="persona-select"
            prop:value=move || persona.get().to_string()
            on:change=move |ev| {
                if let Ok(p) = event_target_value(&ev).parse::<Persona>() {
                    set_persona.set(p);
                }
            }
        >
            {Persona::ALL
                .into_iter()
                .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                .collect_view()}
        </select>
    }
}
