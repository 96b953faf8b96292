//! Blockchain verification: encode the payload and always accept it.

#[cfg(test)]
#[path = "blockchain_card_test.rs"]
mod blockchain_card_test;

use leptos::prelude::*;

use crate::components::alert::Alert;
use crate::state::demo::DemoState;

/// Property badges listed under a completed blockchain verification.
pub(crate) const PROPERTY_BADGES: [(&str, &str); 2] = [("🔒", "Immutable"), ("🛡", "Decentralized")];

pub(crate) fn hash_line(hash: &str) -> String {
    format!("Hash: {hash}")
}

#[component]
pub fn BlockchainCard() -> impl IntoView {
    let demo = expect_context::<RwSignal<DemoState>>();

    let input = move || demo.with(|d| d.verification.blockchain.input.clone());
    let result = move || demo.with(|d| d.verification.blockchain.visible_result().cloned());

    let on_verify = move |_| demo.update(DemoState::verify_blockchain);

    view! {
        <div class="card">
            <div class="card__content">
                <div class="panel__heading">
                    <span class="panel__icon" aria-hidden="true">"⛓"</span>
                    <span>"Blockchain Verification"</span>
                </div>
                <input
                    class="input"
                    type="text"
                    placeholder="Enter identity data"
                    prop:value=input
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        demo.update(|d| d.set_blockchain_input(value));
                    }
                />
                <button class="btn btn--block" on:click=on_verify>
                    "Verify on Blockchain"
                </button>
                {move || {
                    result()
                        .map(|result| {
                            view! {
                                <Alert title="✓ Blockchain Verification Complete">
                                    <p class="alert__hash">{hash_line(&result.hash)}</p>
                                    <div class="badge-grid">
                                        {PROPERTY_BADGES
                                            .into_iter()
                                            .map(|(icon, label)| {
                                                view! {
                                                    <div class="badge">
                                                        <span aria-hidden="true">{icon}</span>
                                                        <span>{label}</span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Alert>
                            }
                        })
                }}
            </div>
        </div>
    }
}
