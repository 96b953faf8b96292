//! Static list of qualitative differences between the two systems.

use leptos::prelude::*;

use crate::state::analysis::KEY_DIFFERENCES;

#[component]
pub fn KeyDifferences() -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__content">
                <h3 class="card__subtitle">"Key Differences"</h3>
                <ul class="key-differences">
                    {KEY_DIFFERENCES
                        .iter()
                        .map(|diff| {
                            view! {
                                <li class="key-differences__item">
                                    <strong>{diff.title}</strong>
                                    ": "
                                    {diff.claim}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
