//! Site Configuration
//!
//! The single place to customize branding and copy. Every page reads from
//! [`SITE`]; nothing here is mutated at runtime. Pricing tiers are the one
//! exception to "everything is declared here": they come from the billing
//! API so prices stay in sync with the payment provider.

use crate::content::ContentItem;

/// Top-level site configuration
#[derive(Clone, Copy, Debug)]
pub struct SiteConfig {
    /// Brand name shown in the nav and page titles
    pub app_name: &'static str,
    /// Short brand descriptor
    pub tagline: &'static str,
    /// Logo asset path, or `None` for text-only branding
    pub logo: Option<&'static str>,
    /// Theme key: `"light"` or `"dark"` (unknown keys fall back to light)
    pub theme: &'static str,
    /// Accent key: emerald, sky, violet, rose, amber, or zinc
    /// (unknown keys fall back to emerald)
    pub accent_color: &'static str,
    pub hero: Hero,
    pub social_proof: SocialProof,
    pub testimonials: Testimonials,
    pub how_it_works: HowItWorks,
    pub features: Features,
    pub pricing: PricingCopy,
    pub faq: Faq,
    pub final_cta: FinalCta,
    pub footer: Footer,
    /// Fixed ordered member content; the first two entries are the free
    /// preview, the rest are premium
    pub member_content: &'static [ContentItem],
    pub upgrade: UpgradePrompt,
}

/// Landing hero section
#[derive(Clone, Copy, Debug)]
pub struct Hero {
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub cta: &'static str,
    pub cta_subtext: &'static str,
    pub image: Option<&'static str>,
}

/// Logo bar under the hero
#[derive(Clone, Copy, Debug)]
pub struct SocialProof {
    pub enabled: bool,
    pub headline: &'static str,
    pub logos: &'static [Logo],
}

#[derive(Clone, Copy, Debug)]
pub struct Logo {
    pub name: &'static str,
    pub src: &'static str,
}

/// Member success stories
#[derive(Clone, Copy, Debug)]
pub struct Testimonials {
    pub enabled: bool,
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub items: &'static [Testimonial],
}

#[derive(Clone, Copy, Debug)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

/// Three-step onboarding explainer
#[derive(Clone, Copy, Debug)]
pub struct HowItWorks {
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub steps: &'static [Step],
}

#[derive(Clone, Copy, Debug)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// What members get
#[derive(Clone, Copy, Debug)]
pub struct Features {
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub items: &'static [Feature],
}

#[derive(Clone, Copy, Debug)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Pricing section copy (the tiers themselves come from the API)
#[derive(Clone, Copy, Debug)]
pub struct PricingCopy {
    pub headline: &'static str,
    pub subheadline: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Faq {
    pub headline: &'static str,
    pub items: &'static [FaqItem],
}

#[derive(Clone, Copy, Debug)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct FinalCta {
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub cta: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Footer {
    pub links: &'static [FooterLink],
}

#[derive(Clone, Copy, Debug)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Upgrade prompt shown to free users in the dashboard
#[derive(Clone, Copy, Debug)]
pub struct UpgradePrompt {
    pub headline: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
    pub cta: &'static str,
    pub subtext: &'static str,
}

/// The site configuration. Edit this to rebrand.
pub static SITE: SiteConfig = SiteConfig {
    // Brand
    app_name: "My Membership",
    tagline: "Exclusive content for members",
    logo: None,
    theme: "light",
    accent_color: "violet",

    // Hero
    hero: Hero {
        headline: "Unlock Your Full Potential",
        subheadline: "Join thousands of members getting exclusive access to premium content, expert guidance, and a supportive community.",
        cta: "Join Now",
        cta_subtext: "Start free, upgrade anytime",
        image: None,
    },

    // Social proof (logo bar)
    social_proof: SocialProof {
        enabled: false,
        headline: "Featured in",
        logos: &[],
    },

    // Testimonials
    testimonials: Testimonials {
        enabled: true,
        headline: "What Members Are Saying",
        subheadline: "Join a community of people transforming their lives",
        items: &[
            Testimonial {
                quote: "This membership has completely changed how I approach my work. The resources are incredible.",
                name: "Sarah M.",
                role: "Designer",
            },
            Testimonial {
                quote: "Worth every penny. The community alone is invaluable, and the content keeps getting better.",
                name: "James K.",
                role: "Entrepreneur",
            },
            Testimonial {
                quote: "I was skeptical at first, but within a week I knew this was exactly what I needed.",
                name: "Maria L.",
                role: "Freelancer",
            },
        ],
    },

    // How it works
    how_it_works: HowItWorks {
        headline: "Get Started in Minutes",
        subheadline: "Three simple steps to full access",
        steps: &[
            Step {
                number: "1",
                title: "Create Account",
                description: "Sign up free and explore what's available.",
                icon: "user",
            },
            Step {
                number: "2",
                title: "Choose Your Plan",
                description: "Pick the membership level that fits your goals.",
                icon: "star",
            },
            Step {
                number: "3",
                title: "Access Everything",
                description: "Instantly unlock all content and resources.",
                icon: "rocket",
            },
        ],
    },

    // Features
    features: Features {
        headline: "What You Get Inside",
        subheadline: "Everything you need to succeed, all in one place",
        items: &[
            Feature {
                title: "Video Library",
                description: "Hours of exclusive tutorials and training content.",
                icon: "play",
            },
            Feature {
                title: "Downloads & Templates",
                description: "Ready-to-use resources you can start using today.",
                icon: "download",
            },
            Feature {
                title: "Private Community",
                description: "Connect with fellow members and get support.",
                icon: "users",
            },
            Feature {
                title: "Live Workshops",
                description: "Monthly sessions with Q&A and hands-on training.",
                icon: "calendar",
            },
            Feature {
                title: "Weekly Updates",
                description: "New content added regularly to keep you growing.",
                icon: "lightning",
            },
            Feature {
                title: "Direct Support",
                description: "Get answers to your questions from experts.",
                icon: "shield",
            },
        ],
    },

    // Pricing copy
    pricing: PricingCopy {
        headline: "Simple Pricing",
        subheadline: "Start free, upgrade when you need more",
    },

    // FAQ
    faq: Faq {
        headline: "Frequently Asked Questions",
        items: &[
            FaqItem {
                question: "What do I get with my membership?",
                answer: "Full access to our video library, downloadable resources, private community, and monthly live workshops. New content is added weekly.",
            },
            FaqItem {
                question: "Can I try before I buy?",
                answer: "Yes! Create a free account to explore preview content and see if the membership is right for you.",
            },
            FaqItem {
                question: "Can I cancel anytime?",
                answer: "Absolutely. Cancel your membership anytime with no questions asked. You'll keep access until the end of your billing period.",
            },
            FaqItem {
                question: "How often is new content added?",
                answer: "We add new videos, resources, and materials every week. Plus monthly live workshops with Q&A sessions.",
            },
        ],
    },

    // Final CTA
    final_cta: FinalCta {
        headline: "Ready to unlock your full potential?",
        subheadline: "Join thousands of members already inside.",
        cta: "Join Now",
    },

    // Footer
    footer: Footer { links: &[] },

    // Member content (dashboard)
    member_content: &[
        ContentItem {
            title: "Getting Started Guide",
            description: "Complete walkthrough to help you get the most out of your membership.",
            icon: "rocket",
            cta: Some("Start Learning"),
        },
        ContentItem {
            title: "Video Library",
            description: "Hours of exclusive video content covering advanced topics.",
            icon: "play",
            cta: Some("Watch Now"),
        },
        ContentItem {
            title: "Templates & Downloads",
            description: "Ready-to-use templates, checklists, and resources.",
            icon: "download",
            cta: Some("Download"),
        },
        ContentItem {
            title: "Private Community",
            description: "Connect with other members and get support.",
            icon: "users",
            cta: Some("Join Discussion"),
        },
        ContentItem {
            title: "Monthly Workshops",
            description: "Live sessions with Q&A and hands-on exercises.",
            icon: "calendar",
            cta: Some("View Schedule"),
        },
        ContentItem {
            title: "Bonus Materials",
            description: "Extra resources, case studies, and insider tips.",
            icon: "star",
            cta: Some("Explore"),
        },
    ],

    // Upgrade prompt
    upgrade: UpgradePrompt {
        headline: "Unlock Full Access",
        description: "Get instant access to all content, resources, and community features with a membership.",
        benefits: &[
            "All video content",
            "Downloadable resources",
            "Private community",
            "Monthly workshops",
        ],
        cta: "Become a Member",
        subtext: "Cancel anytime. No commitments.",
    },
};
