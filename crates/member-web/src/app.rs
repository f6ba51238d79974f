//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::pages::{ChoosePlanPage, DashboardPage, HomePage, MembersPage};
use crate::session;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    session::provide_session();

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/dashboard") view=DashboardPage />
                    <Route path=path!("/members") view=MembersPage />
                    <Route path=path!("/choose-plan") view=ChoosePlanPage />
                </Routes>
            </main>
        </Router>
    }
}
