//! Key generation and signing controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signing uses the payload typed on the blockchain verification tab, the
//! only free-text field besides the directory lookup.

use leptos::prelude::*;

use crate::components::alert::Alert;
use crate::state::demo::DemoState;

#[component]
pub fn CryptoTools() -> impl IntoView {
    let demo = expect_context::<RwSignal<DemoState>>();

    let key_pair = move || demo.with(|d| d.crypto.key_pair.clone());
    let signature = move || demo.with(|d| d.crypto.signature.clone());

    let on_generate = move |_| demo.update(|d| d.generate_keys(&mut rand::thread_rng()));
    let on_sign = move |_| demo.update(DemoState::sign_data);

    view! {
        <div class="card">
            <div class="card__content">
                <button class="btn btn--block" on:click=on_generate>
                    "Generate Key Pair"
                </button>
                {move || {
                    key_pair()
                        .map(|pair| {
                            view! {
                                <Alert title="🔑 Key Pair Generated">
                                    <p>"Public Key: " {pair.public_key}</p>
                                    <p class="muted">"Private Key: " {pair.private_key}</p>
                                </Alert>
                                <button class="btn btn--block" on:click=on_sign>
                                    "Sign Data"
                                </button>
                                <p class="panel__hint">
                                    "Signs the payload entered on the Blockchain Verification tab."
                                </p>
                            }
                        })
                }}
                {move || {
                    signature()
                        .map(|signature| {
                            view! {
                                <Alert title="Digital Signature">
                                    <code>{signature}</code>
                                </Alert>
                            }
                        })
                }}
            </div>
        </div>
    }
}
