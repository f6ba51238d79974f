//! # member-core
//!
//! Branding configuration and membership gating logic for the site frontend.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       member-core                            │
//! │  ┌──────────┐  ┌─────────┐  ┌──────────┐  ┌──────────────┐  │
//! │  │  config  │  │  theme  │  │  content │  │     flow     │  │
//! │  │  (SITE)  │──│  tokens │  │ partition│──│  one-shot    │  │
//! │  └──────────┘  └─────────┘  └──────────┘  │  guards      │  │
//! │        └── model (User, Tier, gating) ────└──────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is pure and platform independent: the web crate owns
//! timers, HTTP, and navigation, and drives these types from the page
//! lifecycle. That keeps every gating and checkout decision testable with
//! plain `cargo test`.

pub mod config;
pub mod content;
pub mod error;
pub mod flow;
pub mod model;
pub mod theme;

pub use config::{SITE, SiteConfig};
pub use content::{ContentItem, FREE_PREVIEW_COUNT, partition_content};
pub use error::{FlowError, Result};
pub use flow::{CheckoutFlow, QuerySignals, SuccessFlow, select_paid_tier};
pub use model::{FREE_PLAN, Tier, TierList, User, has_paid_access, plan_of};
pub use theme::{AccentTokens, ThemeTokens, accent_hex, accent_tokens, theme_tokens};
