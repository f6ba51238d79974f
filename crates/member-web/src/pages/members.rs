//! Members Dashboard (auto-checkout variant)
//!
//! Same gated rendering as the manual dashboard, but eligible free users
//! are sent straight into hosted checkout instead of being shown an
//! upgrade button. While the redirect is being arranged (or after a
//! canceled checkout) the free user keeps the teaser view.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;
use member_core::{SITE, accent_tokens, theme_tokens};

use crate::components::{DashboardHeader, GatedContent, Nav, PaidContent, SuccessBanner};
use crate::flows;
use crate::session::use_session;

#[component]
pub fn MembersPage() -> impl IntoView {
    let session = use_session();
    let query = use_query_map();
    let message = RwSignal::new(None::<&'static str>);

    flows::use_success_signal("/members", message);
    flows::use_auto_checkout("/members");

    let accent = accent_tokens();
    let theme = theme_tokens();

    let paid = move || member_core::has_paid_access(session.user().as_ref());
    let canceled = move || query.with(|q| flows::signals_from(q)).canceled;

    view! {
        <div class=format!("min-h-screen {}", theme.page_bg)>
            <Nav />

            <div class="max-w-5xl mx-auto px-6 py-12">
                <DashboardHeader />

                <SuccessBanner message=message />

                <Show when=paid fallback=move || view! {
                    <div class="space-y-6">
                        <GatedContent />

                        <Show
                            when=canceled
                            fallback=move || view! {
                                <div class=format!("{} rounded-xl p-8 text-center", theme.card_bg)>
                                    <p class=format!("{} font-medium mb-1", theme.heading)>
                                        "Preparing secure checkout…"
                                    </p>
                                    <p class=format!("{} text-sm", theme.muted)>
                                        "You will be redirected in a moment."
                                    </p>
                                </div>
                            }
                        >
                            <div class=format!("{} rounded-xl p-8 text-center border-2 border-dashed border-zinc-700", theme.card_bg)>
                                <h3 class=format!("text-xl font-medium {} mb-2", theme.heading)>
                                    {SITE.upgrade.headline}
                                </h3>
                                <p class=format!("{} mb-6", theme.body)>{SITE.upgrade.description}</p>
                                <A href="/choose-plan">
                                    <span class=format!("inline-block px-8 py-3 rounded-lg font-medium {} text-white {} transition-colors", accent.bg, accent.bg_hover)>
                                        {SITE.upgrade.cta}
                                    </span>
                                </A>
                                <p class=format!("{} text-xs mt-3", theme.muted)>{SITE.upgrade.subtext}</p>
                            </div>
                        </Show>
                    </div>
                }>
                    <PaidContent />
                </Show>
            </div>
        </div>
    }
}
