//! Traditional verification: look the identity up in the central directory.

#[cfg(test)]
#[path = "traditional_card_test.rs"]
mod traditional_card_test;

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertVariant};
use crate::state::demo::DemoState;
use crate::state::directory;
use crate::state::verification::TraditionalOutcome;

pub(crate) fn known_ids_hint() -> String {
    let ids = directory::known_ids().collect::<Vec<_>>().join(", ");
    format!("Test with these IDs: {ids}")
}

/// Variant, title and description for a lookup outcome.
pub(crate) fn outcome_alert(outcome: &TraditionalOutcome) -> (AlertVariant, &'static str, String) {
    match outcome.record {
        Some(record) => (
            AlertVariant::Default,
            "✓ Verified",
            format!("Identity found in central database: {}", record.name),
        ),
        None => (
            AlertVariant::Destructive,
            "✗ Not Verified",
            "Identity not found in central database. Please check the ID and try again.".to_owned(),
        ),
    }
}

#[component]
pub fn TraditionalCard() -> impl IntoView {
    let demo = expect_context::<RwSignal<DemoState>>();

    let input = move || demo.with(|d| d.verification.traditional.input.clone());
    let outcome = move || demo.with(|d| d.verification.traditional.visible_outcome().cloned());

    let on_verify = move |_| demo.update(DemoState::verify_traditional);

    view! {
        <div class="card">
            <div class="card__content">
                <div class="panel__heading">
                    <span class="panel__icon" aria-hidden="true">"⛁"</span>
                    <span>"Central Database Verification"</span>
                </div>
                <p class="panel__hint">{known_ids_hint()}</p>
                <input
                    class="input"
                    type="text"
                    placeholder="Enter identity (e.g., john.doe)"
                    prop:value=input
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        demo.update(|d| d.set_traditional_input(value));
                    }
                />
                <button class="btn btn--block" on:click=on_verify>
                    "Verify Identity"
                </button>
                {move || {
                    outcome()
                        .map(|outcome| {
                            let (variant, title, description) = outcome_alert(&outcome);
                            view! {
                                <Alert variant=variant title=title>
                                    {description}
                                </Alert>
                            }
                        })
                }}
            </div>
        </div>
    }
}
