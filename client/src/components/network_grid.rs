//! Decorative grid of simulated network nodes with a consensus tally.

#[cfg(test)]
#[path = "network_grid_test.rs"]
mod network_grid_test;

use leptos::prelude::*;

use crate::state::demo::DemoState;
use crate::state::nodes::{ConsensusSummary, NetworkNode, NodeStatus};

pub(crate) fn node_class(status: NodeStatus) -> &'static str {
    match status {
        NodeStatus::Verified => "node node--verified",
        NodeStatus::Pending => "node node--pending",
    }
}

pub(crate) fn node_title(node: &NetworkNode) -> String {
    let status = match node.status {
        NodeStatus::Verified => "verified",
        NodeStatus::Pending => "pending",
    };
    format!("Node {} ({status})", node.id)
}

#[component]
pub fn NetworkGrid() -> impl IntoView {
    let demo = expect_context::<RwSignal<DemoState>>();

    let nodes = move || demo.with(|d| d.crypto.nodes.clone());
    let summary = move || demo.with(|d| ConsensusSummary::from_nodes(&d.crypto.nodes));

    view! {
        <div class="card">
            <div class="card__content">
                <div class="node-grid">
                    {move || {
                        nodes()
                            .into_iter()
                            .map(|node| {
                                view! {
                                    <div class=node_class(node.status) title=node_title(&node)>
                                        <span class="node__glyph" aria-hidden="true">"◉"</span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <div class="node-grid__summary">{move || summary().label()}</div>
            </div>
        </div>
    }
}
