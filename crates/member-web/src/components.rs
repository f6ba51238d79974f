//! UI Components

use leptos::children::ChildrenFn;
use leptos::prelude::*;
use leptos_router::components::A;
use member_core::{ContentItem, SITE, accent_tokens, partition_content, theme_tokens};

use crate::api;
use crate::flows;
use crate::session::use_session;

/// Inline SVG icon resolved by symbolic name; unknown names render a check
#[component]
pub fn Icon(name: &'static str, #[prop(default = "w-6 h-6")] class: &'static str) -> impl IntoView {
    let d = match name {
        "rocket" => "M15.59 14.37a6 6 0 01-5.84 7.38v-4.8m5.84-2.58a14.98 14.98 0 006.16-12.12A14.98 14.98 0 009.631 8.41m5.96 5.96a14.926 14.926 0 01-5.841 2.58m-.119-8.54a6 6 0 00-7.381 5.84h4.8m2.581-5.84a14.927 14.927 0 00-2.58 5.84m2.699 2.7c-.103.021-.207.041-.311.06a15.09 15.09 0 01-2.448-2.448 14.9 14.9 0 01.06-.312m-2.24 2.39a4.493 4.493 0 00-1.757 4.306 4.493 4.493 0 004.306-1.758M16.5 9a1.5 1.5 0 11-3 0 1.5 1.5 0 013 0z",
        "play" => "M14.752 11.168l-3.197-2.132A1 1 0 0010 9.87v4.263a1 1 0 001.555.832l3.197-2.132a1 1 0 000-1.664zM21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        "download" => "M4 16v1a3 3 0 003 3h10a3 3 0 003-3v-1m-4-4l-4 4m0 0l-4-4m4 4V4",
        "users" => "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z",
        "calendar" => "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z",
        "star" => "M11.049 2.927c.3-.921 1.603-.921 1.902 0l1.519 4.674a1 1 0 00.95.69h4.915c.969 0 1.371 1.24.588 1.81l-3.976 2.888a1 1 0 00-.363 1.118l1.518 4.674c.3.922-.755 1.688-1.538 1.118l-3.976-2.888a1 1 0 00-1.176 0l-3.976 2.888c-.783.57-1.838-.197-1.538-1.118l1.518-4.674a1 1 0 00-.363-1.118l-3.976-2.888c-.784-.57-.38-1.81.588-1.81h4.914a1 1 0 00.951-.69l1.519-4.674z",
        "user" => "M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z",
        "lightning" => "M13 10V3L4 14h7v7l9-11h-7z",
        "shield" => "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z",
        _ => "M5 13l4 4L19 7",
    };

    view! {
        <svg
            class=class
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            viewBox="0 0 24 24"
        >
            <path d=d />
        </svg>
    }
}

/// Top navigation bar
#[component]
pub fn Nav() -> impl IntoView {
    let theme = theme_tokens();

    view! {
        <nav class=format!("px-6 py-4 {}", theme.nav_bg)>
            <div class="max-w-5xl mx-auto flex items-center justify-between">
                <A href="/">
                    <span class=format!("text-lg font-medium {}", theme.heading)>
                        {match SITE.logo {
                            Some(src) => view! { <img src=src alt=SITE.app_name class="h-8" /> }.into_any(),
                            None => view! { {SITE.app_name} }.into_any(),
                        }}
                    </span>
                </A>
                <div class="flex items-center gap-6 text-sm">
                    <A href="/dashboard">
                        <span class=theme.link>"Dashboard"</span>
                    </A>
                    <A href="/choose-plan">
                        <span class=theme.link>"Plans"</span>
                    </A>
                </div>
            </div>
        </nav>
    }
}

/// Transient confirmation banner
#[component]
pub fn SuccessBanner(message: RwSignal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="mb-6 px-4 py-3 rounded-lg text-sm bg-emerald-100 border border-emerald-200 text-emerald-800">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

/// Welcome header shared by the dashboard variants: greeting, plan badge,
/// and the billing action. Paid users get the portal button; free users
/// get whatever upgrade action the variant passes as children (none for
/// the auto-checkout variant).
#[component]
pub fn DashboardHeader(#[prop(optional)] children: Option<ChildrenFn>) -> impl IntoView {
    let session = use_session();
    let accent = accent_tokens();
    let theme = theme_tokens();

    let paid = move || member_core::has_paid_access(session.user().as_ref());
    let plan_label = move || member_core::plan_of(session.user().as_ref()).to_uppercase();
    let welcome_name = move || {
        session
            .user()
            .map(|u| format!(", {}", u.display_name()))
            .unwrap_or_default()
    };

    let manage_billing = move |_| {
        leptos::task::spawn_local(async move {
            match api::open_portal(&api::current_href()).await {
                Ok(Some(url)) => flows::navigate_external(&url),
                Ok(None) => leptos::logging::warn!("portal response had no URL"),
                Err(e) => leptos::logging::error!("billing portal failed: {e}"),
            }
        });
    };

    view! {
        <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4 mb-8">
            <div>
                <h1 class=format!("text-2xl font-light {} mb-1", theme.heading)>
                    "Welcome" {welcome_name} "!"
                </h1>
                <p class=theme.body>"Your personal dashboard"</p>
            </div>
            <div class="flex gap-3">
                <span class=move || format!(
                    "px-3 py-1.5 text-sm font-medium rounded-lg {}",
                    if paid() {
                        format!("{} text-white", accent.bg)
                    } else {
                        "bg-zinc-700 text-zinc-300".to_string()
                    },
                )>
                    {plan_label}
                </span>
                <Show when=paid fallback=move || children.as_ref().map(|c| c())>
                    <button
                        on:click=manage_billing
                        class=format!("px-4 py-2 text-sm font-medium rounded-lg {} transition-colors", theme.button_secondary)
                    >
                        "Manage Billing"
                    </button>
                </Show>
            </div>
        </div>
    }
}

/// Accessible content card
#[component]
pub fn ContentCard(item: &'static ContentItem) -> impl IntoView {
    let accent = accent_tokens();
    let theme = theme_tokens();

    view! {
        <div class=format!("{} rounded-xl p-6 {} transition-all cursor-pointer", theme.card_bg, theme.card_hover)>
            <div class=format!("w-12 h-12 rounded-xl {} {} flex items-center justify-center mb-4", accent.bg_light, accent.text)>
                <Icon name=item.icon />
            </div>
            <h3 class=format!("text-lg font-medium mb-2 {}", theme.heading)>{item.title}</h3>
            <p class=format!("{} text-sm mb-4", theme.body)>{item.description}</p>
            <span class=format!("text-sm font-medium {}", accent.text)>
                {item.cta_label()} " →"
            </span>
        </div>
    }
}

/// Dimmed premium card with a lock overlay, shown to free users
#[component]
pub fn LockedCard(item: &'static ContentItem) -> impl IntoView {
    let theme = theme_tokens();

    view! {
        <div class=format!("{} rounded-xl p-6 opacity-60 relative overflow-hidden", theme.card_bg)>
            <div class="absolute top-4 right-4">
                <div class="w-8 h-8 rounded-full bg-zinc-800 flex items-center justify-center">
                    <svg class="w-4 h-4 text-zinc-500" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" viewBox="0 0 24 24">
                        <path d="M12 15v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6a2 2 0 002 2zm10-10V7a4 4 0 00-8 0v4h8z" />
                    </svg>
                </div>
            </div>
            <div class="w-12 h-12 rounded-xl bg-zinc-800 text-zinc-500 flex items-center justify-center mb-4">
                <Icon name=item.icon />
            </div>
            <h3 class=format!("text-lg font-medium mb-2 {}", theme.heading)>{item.title}</h3>
            <p class=format!("{} text-sm mb-4", theme.muted)>{item.description}</p>
            <span class="text-sm font-medium text-zinc-600">"Locked"</span>
        </div>
    }
}

/// Full content grid plus the featured section, for paid members
#[component]
pub fn PaidContent() -> impl IntoView {
    let theme = theme_tokens();

    view! {
        <div class="space-y-6">
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                {SITE
                    .member_content
                    .iter()
                    .map(|item| view! { <ContentCard item=item /> })
                    .collect_view()}
            </div>

            <div class=format!("{} rounded-xl p-8", theme.card_bg)>
                <h2 class=format!("text-xl font-medium {} mb-2", theme.heading)>"Featured Content"</h2>
                <p class=format!("{} mb-6", theme.body)>
                    "Replace this section with your main content - videos, downloads, articles, etc."
                </p>
                <div class=format!("{} rounded-xl p-12 text-center", theme.section_alt_bg)>
                    <div class="text-5xl mb-4">"🎬"</div>
                    <p class=format!("{} font-medium mb-2", theme.heading)>"Your Content Here"</p>
                    <p class=theme.muted>"Video player, download button, article, etc."</p>
                </div>
            </div>
        </div>
    }
}

/// Free preview cards plus locked premium cards
#[component]
pub fn GatedContent() -> impl IntoView {
    let theme = theme_tokens();
    let (free, premium) = partition_content(SITE.member_content);

    view! {
        <div class="space-y-6">
            <div>
                <h2 class=format!("text-sm font-medium {} uppercase tracking-wider mb-4", theme.muted)>
                    "Your Free Content"
                </h2>
                <div class="grid md:grid-cols-2 gap-6">
                    {free
                        .iter()
                        .map(|item| view! { <ContentCard item=item /> })
                        .collect_view()}
                </div>
            </div>

            <div>
                <h2 class=format!("text-sm font-medium {} uppercase tracking-wider mb-4", theme.muted)>
                    "Premium Content"
                    <span class="ml-2 px-2 py-0.5 text-xs bg-amber-500/20 text-amber-400 rounded">
                        "Upgrade to Unlock"
                    </span>
                </h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-2 gap-6">
                    {premium
                        .iter()
                        .map(|item| view! { <LockedCard item=item /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
