//! Root application component with routing and the demo state context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::demo::DemoPage;
use crate::state::demo::DemoState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the demo controller for the lifetime of the page so every view's
/// state survives feature switches.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let demo = RwSignal::new(DemoState::default());
    provide_context(demo);

    view! {
        <Stylesheet id="leptos" href="/pkg/identity-compare.css"/>
        <Title text="Identity Verification Comparison"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DemoPage/>
            </Routes>
        </Router>
    }
}
