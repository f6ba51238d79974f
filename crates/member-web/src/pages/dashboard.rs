//! Member Dashboard
//!
//! Manual upgrade variant: free users see the teaser view plus an upgrade
//! CTA routing to the plan chooser; paid users get the full content grid
//! and a billing portal button.

use leptos::prelude::*;
use leptos_router::components::A;
use member_core::{SITE, accent_tokens, theme_tokens};

use crate::components::{DashboardHeader, GatedContent, Nav, PaidContent, SuccessBanner};
use crate::flows;
use crate::session::use_session;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let message = RwSignal::new(None::<&'static str>);

    flows::use_success_signal("/dashboard", message);

    let accent = accent_tokens();
    let theme = theme_tokens();

    let paid = move || member_core::has_paid_access(session.user().as_ref());

    view! {
        <div class=format!("min-h-screen {}", theme.page_bg)>
            <Nav />

            <div class="max-w-5xl mx-auto px-6 py-12">
                <DashboardHeader>
                    <A href="/choose-plan">
                        <span class=format!("inline-block px-4 py-2 text-sm font-medium rounded-lg {} text-white {} transition-colors", accent.bg, accent.bg_hover)>
                            "Upgrade"
                        </span>
                    </A>
                </DashboardHeader>

                <SuccessBanner message=message />

                <Show when=paid fallback=move || view! {
                    <div class="space-y-6">
                        <GatedContent />

                        // Upgrade CTA
                        <div class=format!("{} rounded-xl p-8 text-center border-2 border-dashed border-zinc-700", theme.card_bg)>
                            <div class="max-w-md mx-auto">
                                <div class=format!("w-16 h-16 rounded-full {} {} flex items-center justify-center mx-auto mb-4", accent.bg_light, accent.text)>
                                    <svg class="w-8 h-8" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" viewBox="0 0 24 24">
                                        <path d="M13 10V3L4 14h7v7l9-11h-7z" />
                                    </svg>
                                </div>
                                <h3 class=format!("text-xl font-medium {} mb-2", theme.heading)>
                                    {SITE.upgrade.headline}
                                </h3>
                                <p class=format!("{} mb-6", theme.body)>{SITE.upgrade.description}</p>
                                <ul class="text-left space-y-2 mb-6 max-w-xs mx-auto">
                                    {SITE
                                        .upgrade
                                        .benefits
                                        .iter()
                                        .map(|benefit| view! {
                                            <li class=format!("flex items-center gap-2 {} text-sm", theme.body)>
                                                <svg class=format!("w-4 h-4 {} flex-shrink-0", accent.text) fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" viewBox="0 0 24 24">
                                                    <path d="M5 13l4 4L19 7" />
                                                </svg>
                                                {*benefit}
                                            </li>
                                        })
                                        .collect_view()}
                                </ul>
                                <A href="/choose-plan">
                                    <span class=format!("inline-block px-8 py-3 rounded-lg font-medium {} text-white {} transition-colors", accent.bg, accent.bg_hover)>
                                        {SITE.upgrade.cta}
                                    </span>
                                </A>
                                <p class=format!("{} text-xs mt-3", theme.muted)>{SITE.upgrade.subtext}</p>
                            </div>
                        </div>
                    </div>
                }>
                    <PaidContent />
                </Show>
            </div>
        </div>
    }
}
