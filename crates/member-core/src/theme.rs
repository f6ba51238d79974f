//! Theme Tokens
//!
//! Static lookup tables mapping the configured accent and theme keys to
//! presentation token sets (utility class strings). A misconfigured key must
//! never take the page down, so lookups fall back to `emerald` / `light`
//! instead of failing.

use crate::config::SITE;

/// Accent color token set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccentTokens {
    pub bg: &'static str,
    pub bg_hover: &'static str,
    pub bg_light: &'static str,
    pub text: &'static str,
    pub text_hover: &'static str,
    pub border: &'static str,
    pub hex: &'static str,
}

/// Theme token set covering every surface the pages style
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeTokens {
    // Main backgrounds
    pub page_bg: &'static str,
    pub nav_bg: &'static str,
    pub card_bg: &'static str,
    pub section_alt_bg: &'static str,
    pub footer_bg: &'static str,
    // Text colors
    pub heading: &'static str,
    pub body: &'static str,
    pub muted: &'static str,
    // Interactive
    pub card_hover: &'static str,
    pub link: &'static str,
    // Dropdown (nav)
    pub dropdown_bg: &'static str,
    pub dropdown_divider: &'static str,
    pub dropdown_item: &'static str,
    pub button_hover: &'static str,
    pub danger_item: &'static str,
    pub progress_bg: &'static str,
    // Buttons
    pub button_disabled: &'static str,
    pub button_secondary: &'static str,
}

static EMERALD: AccentTokens = AccentTokens {
    bg: "bg-emerald-600",
    bg_hover: "hover:bg-emerald-500",
    bg_light: "bg-emerald-500/10",
    text: "text-emerald-600",
    text_hover: "hover:text-emerald-500",
    border: "border-emerald-600",
    hex: "#059669",
};

static SKY: AccentTokens = AccentTokens {
    bg: "bg-sky-600",
    bg_hover: "hover:bg-sky-500",
    bg_light: "bg-sky-500/10",
    text: "text-sky-600",
    text_hover: "hover:text-sky-500",
    border: "border-sky-600",
    hex: "#0284c7",
};

static VIOLET: AccentTokens = AccentTokens {
    bg: "bg-violet-600",
    bg_hover: "hover:bg-violet-500",
    bg_light: "bg-violet-500/10",
    text: "text-violet-600",
    text_hover: "hover:text-violet-500",
    border: "border-violet-600",
    hex: "#7c3aed",
};

static ROSE: AccentTokens = AccentTokens {
    bg: "bg-rose-600",
    bg_hover: "hover:bg-rose-500",
    bg_light: "bg-rose-500/10",
    text: "text-rose-600",
    text_hover: "hover:text-rose-500",
    border: "border-rose-600",
    hex: "#e11d48",
};

static AMBER: AccentTokens = AccentTokens {
    bg: "bg-amber-600",
    bg_hover: "hover:bg-amber-500",
    bg_light: "bg-amber-500/10",
    text: "text-amber-600",
    text_hover: "hover:text-amber-500",
    border: "border-amber-600",
    hex: "#d97706",
};

static ZINC: AccentTokens = AccentTokens {
    bg: "bg-zinc-800",
    bg_hover: "hover:bg-zinc-700",
    bg_light: "bg-zinc-500/10",
    text: "text-zinc-800",
    text_hover: "hover:text-zinc-700",
    border: "border-zinc-800",
    hex: "#27272a",
};

static LIGHT: ThemeTokens = ThemeTokens {
    page_bg: "bg-slate-50",
    nav_bg: "bg-white border-b border-slate-200",
    card_bg: "bg-white border border-slate-200",
    section_alt_bg: "bg-white",
    footer_bg: "bg-slate-100 border-t border-slate-200",
    heading: "text-slate-900",
    body: "text-slate-600",
    muted: "text-slate-400",
    card_hover: "hover:border-slate-300 hover:shadow-md",
    link: "text-slate-600 hover:text-slate-900",
    dropdown_bg: "bg-white border border-slate-200",
    dropdown_divider: "border-slate-200",
    dropdown_item: "text-slate-600 hover:text-slate-900 hover:bg-slate-100",
    button_hover: "hover:bg-slate-100",
    danger_item: "text-red-600 hover:text-red-700 hover:bg-red-50",
    progress_bg: "bg-slate-200",
    button_disabled: "bg-slate-200 text-slate-400",
    button_secondary: "border border-slate-300 text-slate-600 hover:text-slate-900 hover:border-slate-400",
};

static DARK: ThemeTokens = ThemeTokens {
    page_bg: "bg-zinc-950",
    nav_bg: "bg-zinc-950/80 backdrop-blur-md border-b border-zinc-800/50",
    card_bg: "bg-zinc-900/70 border border-zinc-700/50",
    section_alt_bg: "bg-zinc-900/40",
    footer_bg: "bg-zinc-950 border-t border-zinc-800",
    heading: "text-white",
    body: "text-zinc-300",
    muted: "text-zinc-500",
    card_hover: "hover:border-zinc-700",
    link: "text-zinc-500 hover:text-zinc-300",
    dropdown_bg: "bg-zinc-900 border border-zinc-800",
    dropdown_divider: "border-zinc-800",
    dropdown_item: "text-zinc-400 hover:text-zinc-100 hover:bg-zinc-800",
    button_hover: "hover:bg-zinc-900",
    danger_item: "text-red-400 hover:text-red-300 hover:bg-zinc-800",
    progress_bg: "bg-zinc-800",
    button_disabled: "bg-zinc-800 text-zinc-500",
    button_secondary: "border border-zinc-700 text-zinc-400 hover:text-zinc-200 hover:border-zinc-600",
};

/// Look up an accent token set by key, falling back to emerald
pub fn accent_tokens_for(key: &str) -> &'static AccentTokens {
    match key {
        "sky" => &SKY,
        "violet" => &VIOLET,
        "rose" => &ROSE,
        "amber" => &AMBER,
        "zinc" => &ZINC,
        _ => &EMERALD,
    }
}

/// Accent tokens for the configured accent color
pub fn accent_tokens() -> &'static AccentTokens {
    accent_tokens_for(SITE.accent_color)
}

/// Hex form of the configured accent color
pub fn accent_hex() -> &'static str {
    accent_tokens().hex
}

/// Look up a theme token set by key, falling back to light
pub fn theme_tokens_for(key: &str) -> &'static ThemeTokens {
    match key {
        "dark" => &DARK,
        _ => &LIGHT,
    }
}

/// Theme tokens for the configured theme
pub fn theme_tokens() -> &'static ThemeTokens {
    theme_tokens_for(SITE.theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_accent_resolves() {
        assert_eq!(accent_tokens_for("violet").hex, "#7c3aed");
        assert_eq!(accent_tokens_for("zinc").bg, "bg-zinc-800");
    }

    #[test]
    fn test_unknown_accent_falls_back_to_emerald() {
        assert_eq!(accent_tokens_for("chartreuse"), &EMERALD);
        assert_eq!(accent_tokens_for(""), &EMERALD);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_light() {
        assert_eq!(theme_tokens_for("solarized"), &LIGHT);
        assert_eq!(theme_tokens_for("dark"), &DARK);
    }

    #[test]
    fn test_configured_lookups_never_panic() {
        // The zero-argument forms read SITE; they must resolve whatever
        // the config says.
        let _ = accent_tokens();
        let _ = theme_tokens();
        assert!(!accent_hex().is_empty());
    }
}
