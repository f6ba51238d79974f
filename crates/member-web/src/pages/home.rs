//! Landing Page
//!
//! Rendered entirely from the `SITE` configuration: hero, social proof,
//! how-it-works, features, testimonials, pricing teaser, FAQ, final CTA,
//! footer.

use leptos::prelude::*;
use leptos_router::components::A;
use member_core::{SITE, accent_tokens, theme_tokens};

use crate::components::{Icon, Nav};

#[component]
pub fn HomePage() -> impl IntoView {
    let accent = accent_tokens();
    let theme = theme_tokens();

    view! {
        <div class=format!("min-h-screen {}", theme.page_bg)>
            <Nav />

            // Hero
            <header class="max-w-5xl mx-auto px-6 py-20 text-center">
                <h1 class=format!("text-4xl sm:text-5xl font-light {} mb-4", theme.heading)>
                    {SITE.hero.headline}
                </h1>
                <p class=format!("{} text-lg max-w-2xl mx-auto mb-8", theme.body)>
                    {SITE.hero.subheadline}
                </p>
                <A href="/choose-plan">
                    <span class=format!("inline-block px-8 py-3 rounded-lg font-medium {} text-white {} transition-colors", accent.bg, accent.bg_hover)>
                        {SITE.hero.cta}
                    </span>
                </A>
                <p class=format!("{} text-xs mt-3", theme.muted)>{SITE.hero.cta_subtext}</p>
                {SITE.hero.image.map(|src| view! {
                    <img src=src alt="" class="mt-12 rounded-xl mx-auto" />
                })}
            </header>

            // Social proof
            <Show when=|| SITE.social_proof.enabled>
                <section class="max-w-5xl mx-auto px-6 py-8 text-center">
                    <p class=format!("text-sm {} uppercase tracking-wider mb-6", theme.muted)>
                        {SITE.social_proof.headline}
                    </p>
                    <div class="flex items-center justify-center gap-10 flex-wrap">
                        {SITE
                            .social_proof
                            .logos
                            .iter()
                            .map(|logo| view! { <img src=logo.src alt=logo.name class="h-8 opacity-60" /> })
                            .collect_view()}
                    </div>
                </section>
            </Show>

            // How it works
            <section class=format!("{} py-16", theme.section_alt_bg)>
                <div class="max-w-5xl mx-auto px-6 text-center">
                    <h2 class=format!("text-2xl font-light {} mb-2", theme.heading)>
                        {SITE.how_it_works.headline}
                    </h2>
                    <p class=format!("{} mb-10", theme.body)>{SITE.how_it_works.subheadline}</p>
                    <div class="grid md:grid-cols-3 gap-8">
                        {SITE
                            .how_it_works
                            .steps
                            .iter()
                            .map(|step| view! {
                                <div>
                                    <div class=format!("w-12 h-12 rounded-full {} {} flex items-center justify-center mx-auto mb-4", accent.bg_light, accent.text)>
                                        <Icon name=step.icon />
                                    </div>
                                    <h3 class=format!("font-medium {} mb-2", theme.heading)>
                                        {step.number} ". " {step.title}
                                    </h3>
                                    <p class=format!("{} text-sm", theme.body)>{step.description}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Features
            <section class="max-w-5xl mx-auto px-6 py-16">
                <div class="text-center mb-10">
                    <h2 class=format!("text-2xl font-light {} mb-2", theme.heading)>
                        {SITE.features.headline}
                    </h2>
                    <p class=theme.body>{SITE.features.subheadline}</p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {SITE
                        .features
                        .items
                        .iter()
                        .map(|feature| view! {
                            <div class=format!("{} rounded-xl p-6 {} transition-all", theme.card_bg, theme.card_hover)>
                                <div class=format!("w-12 h-12 rounded-xl {} {} flex items-center justify-center mb-4", accent.bg_light, accent.text)>
                                    <Icon name=feature.icon />
                                </div>
                                <h3 class=format!("text-lg font-medium mb-2 {}", theme.heading)>{feature.title}</h3>
                                <p class=format!("{} text-sm", theme.body)>{feature.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            // Testimonials
            <Show when=|| SITE.testimonials.enabled>
                <section class=format!("{} py-16", theme.section_alt_bg)>
                    <div class="max-w-5xl mx-auto px-6 text-center">
                        <h2 class=format!("text-2xl font-light {} mb-2", theme.heading)>
                            {SITE.testimonials.headline}
                        </h2>
                        <p class=format!("{} mb-10", theme.body)>{SITE.testimonials.subheadline}</p>
                        <div class="grid md:grid-cols-3 gap-6 text-left">
                            {SITE
                                .testimonials
                                .items
                                .iter()
                                .map(|t| view! {
                                    <figure class=format!("{} rounded-xl p-6", theme.card_bg)>
                                        <blockquote class=format!("{} text-sm mb-4", theme.body)>
                                            "\u{201c}" {t.quote} "\u{201d}"
                                        </blockquote>
                                        <figcaption>
                                            <span class=format!("font-medium {}", theme.heading)>{t.name}</span>
                                            <span class=format!("{} text-sm", theme.muted)>" · " {t.role}</span>
                                        </figcaption>
                                    </figure>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </section>
            </Show>

            // Pricing teaser
            <section class="max-w-5xl mx-auto px-6 py-16 text-center">
                <h2 class=format!("text-2xl font-light {} mb-2", theme.heading)>
                    {SITE.pricing.headline}
                </h2>
                <p class=format!("{} mb-6", theme.body)>{SITE.pricing.subheadline}</p>
                <A href="/choose-plan">
                    <span class=format!("text-sm font-medium {} {}", accent.text, accent.text_hover)>
                        "See plans →"
                    </span>
                </A>
            </section>

            // FAQ
            <section class=format!("{} py-16", theme.section_alt_bg)>
                <div class="max-w-3xl mx-auto px-6">
                    <h2 class=format!("text-2xl font-light {} text-center mb-10", theme.heading)>
                        {SITE.faq.headline}
                    </h2>
                    <div class="space-y-6">
                        {SITE
                            .faq
                            .items
                            .iter()
                            .map(|item| view! {
                                <div class=format!("{} rounded-xl p-6", theme.card_bg)>
                                    <h3 class=format!("font-medium {} mb-2", theme.heading)>{item.question}</h3>
                                    <p class=format!("{} text-sm", theme.body)>{item.answer}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Final CTA
            <section class="max-w-5xl mx-auto px-6 py-20 text-center">
                <h2 class=format!("text-3xl font-light {} mb-2", theme.heading)>
                    {SITE.final_cta.headline}
                </h2>
                <p class=format!("{} mb-8", theme.body)>{SITE.final_cta.subheadline}</p>
                <A href="/choose-plan">
                    <span class=format!("inline-block px-8 py-3 rounded-lg font-medium {} text-white {} transition-colors", accent.bg, accent.bg_hover)>
                        {SITE.final_cta.cta}
                    </span>
                </A>
            </section>

            // Footer
            <footer class=format!("{} px-6 py-8", theme.footer_bg)>
                <div class="max-w-5xl mx-auto flex items-center justify-between text-sm">
                    <span class=theme.muted>{SITE.app_name} " · " {SITE.tagline}</span>
                    <div class="flex gap-4">
                        {SITE
                            .footer
                            .links
                            .iter()
                            .map(|link| view! {
                                <a href=link.href class=theme.link>{link.label}</a>
                            })
                            .collect_view()}
                    </div>
                </div>
            </footer>
        </div>
    }
}
