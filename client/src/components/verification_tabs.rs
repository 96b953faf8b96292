//! Verification view: tab strip over the traditional and blockchain cards.

use leptos::prelude::*;

use crate::components::blockchain_card::BlockchainCard;
use crate::components::traditional_card::TraditionalCard;
use crate::state::demo::DemoState;
use crate::state::verification::VerificationTab;

pub(crate) fn tab_class(active: bool) -> &'static str {
    if active {
        "tabs__trigger tabs__trigger--active"
    } else {
        "tabs__trigger"
    }
}

#[component]
pub fn VerificationTabs() -> impl IntoView {
    let demo = expect_context::<RwSignal<DemoState>>();

    // Memoized so typing into a card does not rebuild (and unfocus) it.
    let tab = Memo::new(move |_| demo.with(|d| d.verification.tab));

    view! {
        <div class="tabs">
            <div class="tabs__list" role="tablist">
                {VerificationTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                role="tab"
                                class=move || tab_class(tab.get() == t)
                                aria-selected=move || (tab.get() == t).to_string()
                                on:click=move |_| demo.update(|d| d.select_tab(t))
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="tabs__content" role="tabpanel">
                {move || match tab.get() {
                    VerificationTab::Traditional => view! { <TraditionalCard/> }.into_any(),
                    VerificationTab::Blockchain => view! { <BlockchainCard/> }.into_any(),
                }}
            </div>
        </div>
    }
}
