//! Plan Chooser
//!
//! Pricing copy from the site configuration; the tiers themselves come
//! from the product catalog so prices stay in sync with the payment
//! provider. Paid tiers get a checkout button, the free tier links back to
//! the dashboard.

use leptos::prelude::*;
use leptos_router::components::A;
use member_core::{SITE, Tier, accent_tokens, theme_tokens};

use crate::api;
use crate::components::Nav;
use crate::flows;

#[component]
pub fn ChoosePlanPage() -> impl IntoView {
    let accent = accent_tokens();
    let theme = theme_tokens();

    let (tiers, set_tiers) = signal(Vec::<Tier>::new());
    let (loading, set_loading) = signal(true);

    leptos::task::spawn_local(async move {
        match api::list_tiers().await {
            Ok(fetched) => set_tiers.set(fetched),
            Err(e) => leptos::logging::error!("tier fetch failed: {e}"),
        }
        set_loading.set(false);
    });

    let checkout = move |tier: Tier| {
        leptos::task::spawn_local(async move {
            let success_url = api::return_url("/dashboard", "success");
            let cancel_url = api::return_url("/dashboard", "canceled");
            match api::create_checkout(&tier, &success_url, &cancel_url).await {
                Ok(Some(url)) => flows::navigate_external(&url),
                Ok(None) => leptos::logging::warn!("checkout response had no URL"),
                Err(e) => leptos::logging::error!("checkout failed: {e}"),
            }
        });
    };

    view! {
        <div class=format!("min-h-screen {}", theme.page_bg)>
            <Nav />

            <div class="max-w-5xl mx-auto px-6 py-16 text-center">
                <h1 class=format!("text-3xl font-light {} mb-2", theme.heading)>
                    {SITE.pricing.headline}
                </h1>
                <p class=format!("{} mb-12", theme.body)>{SITE.pricing.subheadline}</p>

                <Show when=move || loading.get()>
                    <p class=theme.muted>"Loading plans…"</p>
                </Show>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 max-w-3xl mx-auto">
                    <For
                        each=move || tiers.get()
                        key=|tier| tier.price_id.clone()
                        children=move |tier| {
                            let price = if tier.price == 0.0 {
                                "$0".to_string()
                            } else {
                                format!("${}", tier.price)
                            };
                            let name = tier.name.clone();
                            let is_paid = tier.is_paid();
                            view! {
                                <div class=format!("{} rounded-xl p-8 text-left", theme.card_bg)>
                                    <h2 class=format!("text-lg font-medium {} mb-2", theme.heading)>
                                        {name}
                                    </h2>
                                    <div class=format!("text-3xl font-light {} mb-6", theme.heading)>
                                        {price}
                                        <span class=format!("text-sm {}", theme.muted)>"/month"</span>
                                    </div>
                                    {if is_paid {
                                        view! {
                                            <button
                                                on:click=move |_| checkout(tier.clone())
                                                class=format!("w-full px-4 py-2 rounded-lg font-medium {} text-white {} transition-colors", accent.bg, accent.bg_hover)
                                            >
                                                "Subscribe"
                                            </button>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <A href="/dashboard">
                                                <span class=format!("block w-full px-4 py-2 rounded-lg font-medium text-center {} transition-colors", theme.button_secondary)>
                                                    "Get Started"
                                                </span>
                                            </A>
                                        }
                                            .into_any()
                                    }}
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
