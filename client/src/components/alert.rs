//! Alert box used for every verification and signing result.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use leptos::prelude::*;

/// Visual treatment of an alert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertVariant {
    #[default]
    Default,
    Destructive,
}

impl AlertVariant {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "alert",
            Self::Destructive => "alert alert--destructive",
        }
    }
}

/// Titled alert with arbitrary description content.
#[component]
pub fn Alert(
    #[prop(optional)] variant: AlertVariant,
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=variant.class() role="alert">
            <h5 class="alert__title">{title}</h5>
            <div class="alert__description">{children()}</div>
        </div>
    }
}
