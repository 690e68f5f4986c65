//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::Stores;
use crate::state::session::SessionPhase;

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
/// Provides the shared `Stores` context and restores the stored session once
/// the browser has taken over.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let stores = Stores::new();
    provide_context(stores);

    // Effects only run in the browser, so SSR and the first hydrated frame
    // both render the loading state.
    Effect::new(move || crate::net::session::restore(stores));

    view! {
        <Stylesheet id="leptos" href="/pkg/campus.css"/>
        <Title text="Campus Quest"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SessionGate/>
            </Routes>
        </Router>
    }
}

/// Chooses between the spinner, the login page and the dashboard.
#[component]
fn SessionGate() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let phase = move || stores.session.with(|s| s.phase());

    view! {
        {move || match phase() {
            SessionPhase::LoadingProfile => {
                view! {
                    <div class="session-loading">
                        <span class="spinner" aria-label="Loading"></span>
                    </div>
                }
                    .into_any()
            }
            SessionPhase::Anonymous => view! { <LoginPage/> }.into_any(),
            SessionPhase::Authenticated => view! { <DashboardPage/> }.into_any(),
        }}
    }
}
