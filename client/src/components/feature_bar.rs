//! Row of buttons selecting the active view.

#[cfg(test)]
#[path = "feature_bar_test.rs"]
mod feature_bar_test;

use leptos::prelude::*;

use crate::state::demo::DemoState;
use crate::state::ui::Feature;

pub(crate) fn feature_button_class(active: bool) -> &'static str {
    if active {
        "btn feature-bar__btn"
    } else {
        "btn btn--outline feature-bar__btn"
    }
}

#[component]
pub fn FeatureBar() -> impl IntoView {
    let demo = expect_context::<RwSignal<DemoState>>();

    view! {
        <div class="feature-bar">
            {Feature::ALL
                .into_iter()
                .map(|feature| {
                    let active = move || demo.with(|d| d.feature == feature);
                    view! {
                        <button
                            class=move || feature_button_class(active())
                            aria-pressed=move || active().to_string()
                            on:click=move |_| demo.update(|d| d.select_feature(feature))
                        >
                            {feature.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
