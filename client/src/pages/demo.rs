//! The single demo screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the title card and feature bar, then exactly one of the three
//! views. Node generation runs once from a client-side effect after the
//! first render, mirroring a mount-time initialization.

use leptos::prelude::*;

use crate::components::crypto_tools::CryptoTools;
use crate::components::feature_bar::FeatureBar;
use crate::components::key_differences::KeyDifferences;
use crate::components::network_grid::NetworkGrid;
use crate::components::performance_chart::PerformanceChart;
use crate::components::verification_tabs::VerificationTabs;
use crate::state::demo::DemoState;
use crate::state::ui::Feature;
use crate::util::clock;

#[component]
pub fn DemoPage() -> impl IntoView {
    let demo = expect_context::<RwSignal<DemoState>>();

    Effect::new(move || {
        demo.update(|d| d.init_nodes(&mut rand::thread_rng(), clock::now_ms()));
    });

    // Only a feature change should swap the rendered view.
    let feature = Memo::new(move |_| demo.with(|d| d.feature));

    view! {
        <main class="demo-page">
            <div class="card">
                <header class="card__header">
                    <h1 class="card__title">"Advanced Identity Verification Comparison"</h1>
                </header>
                <div class="card__content">
                    <FeatureBar/>
                    {move || match feature.get() {
                        Feature::Verification => view! { <VerificationTabs/> }.into_any(),
                        Feature::Cryptography => {
                            view! {
                                <CryptoTools/>
                                <NetworkGrid/>
                            }
                                .into_any()
                        }
                        Feature::Analysis => {
                            view! {
                                <PerformanceChart/>
                                <KeyDifferences/>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </main>
    }
}
