//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::RedirectToLogin;
use crate::pages::{
    admin_home::AdminHomePage, assessments::AssessmentsPage, case_detail::CaseDetailPage,
    dpia::DpiaPage, dpo_home::DpoHomePage, login::LoginPage, portal::PortalPage, users::UsersPage,
};
use crate::state::{auth::AuthState, ui::UiState};

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
/// Provides the auth and UI state contexts, kicks off the one-time session
/// revalidation, and sets up client-side routing. Route-level access control
/// lives in each page's `RouteGuard` wrapper; the fallback steers every
/// unknown path to the login route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::boot());
    let ui = RwSignal::new(UiState::restored());

    provide_context(auth);
    provide_context(ui);

    // One-shot boot identity check; never re-run on navigation.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(crate::state::auth::refresh(auth));
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/pdpl-console.css"/>
        <Title text="PDPL Console"/>

        <Router>
            <Routes fallback=|| view! { <RedirectToLogin/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("admin") view=AdminHomePage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("assessments"))
                    view=AssessmentsPage
                />
                <Route path=(StaticSegment("admin"), StaticSegment("dpia")) view=DpiaPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("users")) view=UsersPage/>
                <Route path=StaticSegment("dpo") view=DpoHomePage/>
                <Route path=StaticSegment("user") view=PortalPage/>
                <Route
                    path=(StaticSegment("user"), StaticSegment("cases"), ParamSegment("id"))
                    view=CaseDetailPage
                />
            </Routes>
        </Router>
    }
}
