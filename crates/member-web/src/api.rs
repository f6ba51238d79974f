//! API Client
//!
//! Thin client over the external backend: user/session, product catalog,
//! and the hosted billing flows. Errors at this layer are plain strings;
//! callers log them and fall back to the existing view.

use member_core::{Tier, TierList, User};

fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

// reqwest needs absolute URLs even under WASM
fn api_url(path: &str) -> String {
    format!("{}{}", origin(), path)
}

/// Absolute URL of the page currently shown, used as a portal return target
pub fn current_href() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_else(origin)
}

/// Build a checkout return URL that routes back to `route` carrying the
/// given signal, e.g. `https://site/members?success=true`
pub fn return_url(route: &str, signal: &str) -> String {
    format!("{}{}?{}=true", origin(), route, signal)
}

/// Fetch the current user; `Ok(None)` is the anonymous state
pub async fn fetch_user() -> Result<Option<User>, String> {
    let client = reqwest::Client::new();

    let response = client
        .get(api_url("/api/user"))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    // Not logged in is a state, not a failure
    if matches!(response.status().as_u16(), 401 | 404) {
        return Ok(None);
    }

    if response.status().is_success() {
        let user: User = response.json().await.map_err(|e| e.to_string())?;
        Ok(Some(user))
    } else {
        Err(format!("user fetch failed: {}", response.status()))
    }
}

/// Fetch the pricing tier catalog
pub async fn list_tiers() -> Result<Vec<Tier>, String> {
    let client = reqwest::Client::new();

    let response = client
        .get(api_url("/api/products/tiers"))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        let list: TierList = response.json().await.map_err(|e| e.to_string())?;
        Ok(list.tiers)
    } else {
        Err(format!("tier fetch failed: {}", response.status()))
    }
}

/// Create a hosted checkout session for a tier.
///
/// Returns the redirect URL when the backend supplied one; `Ok(None)`
/// mirrors the `{url?}` contract and is a no-op for the caller.
pub async fn create_checkout(
    tier: &Tier,
    success_url: &str,
    cancel_url: &str,
) -> Result<Option<String>, String> {
    let client = reqwest::Client::new();

    let body = serde_json::json!({
        "tier": tier.name,
        "priceId": tier.price_id,
        "successUrl": success_url,
        "cancelUrl": cancel_url,
    });

    let response = client
        .post(api_url("/api/billing/checkout"))
        .json(&body)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        let data: serde_json::Value = response.json().await.map_err(|e| e.to_string())?;
        Ok(data["url"].as_str().map(str::to_string))
    } else {
        Err(format!("checkout creation failed: {}", response.status()))
    }
}

/// Open a billing portal session for the current customer
pub async fn open_portal(return_url: &str) -> Result<Option<String>, String> {
    let client = reqwest::Client::new();

    let body = serde_json::json!({ "returnUrl": return_url });

    let response = client
        .post(api_url("/api/billing/portal"))
        .json(&body)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        let data: serde_json::Value = response.json().await.map_err(|e| e.to_string())?;
        Ok(data["url"].as_str().map(str::to_string))
    } else {
        Err(format!("portal creation failed: {}", response.status()))
    }
}
