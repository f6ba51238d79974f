//! Dashboard Flow Drivers
//!
//! `member-core::flow` owns the decisions; this module wires them to the
//! page lifecycle: query parameters, cancellable timers, history rewrites,
//! and full-page navigation out of the app.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use leptos_router::params::ParamsMap;
use member_core::flow::{CheckoutFlow, QuerySignals, SuccessFlow};
use member_core::{FlowError, select_paid_tier};
use wasm_bindgen::JsValue;

use crate::api;
use crate::session::use_session;

/// Read the checkout signals out of a query map
pub fn signals_from(query: &ParamsMap) -> QuerySignals {
    QuerySignals::from_values(
        query.get("success").as_deref(),
        query.get("canceled").as_deref(),
    )
}

fn delay_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// Show the post-checkout confirmation exactly once per page load.
///
/// Consumes `?success=true`: sets the banner, strips the query from the
/// visible URL without a history entry, schedules the delayed user refresh
/// and banner clear, and cancels both timers if the view is torn down
/// first.
pub fn use_success_signal(route: &'static str, message: RwSignal<Option<&'static str>>) {
    let session = use_session();
    let query = use_query_map();
    let flow = StoredValue::new(SuccessFlow::new());
    let timers = StoredValue::new_local(Vec::<Timeout>::new());

    Effect::new(move |_| {
        let signals = query.with(|q| signals_from(q));
        let Some(transition) = flow.try_update_value(|f| f.observe(signals)).flatten() else {
            return;
        };

        message.set(Some(transition.message));
        strip_query(route);

        let refresh = Timeout::new(delay_millis(transition.refresh_delay), move || {
            session.refresh();
        });
        let clear = Timeout::new(delay_millis(transition.clear_delay), move || {
            let _ = flow.try_update_value(SuccessFlow::clear);
            message.set(None);
        });
        timers.update_value(|t| {
            t.push(refresh);
            t.push(clear);
        });
    });

    on_cleanup(move || {
        let _ = timers.try_update_value(|t| {
            for timer in t.drain(..) {
                timer.cancel();
            }
        });
    });
}

/// Send an eligible free user straight into hosted checkout.
///
/// The guard flips before any request leaves, so re-renders during the
/// in-flight attempt cannot start a second one; any failure logs, re-arms
/// the guard, and leaves the teaser view in place.
pub fn use_auto_checkout(route: &'static str) {
    let session = use_session();
    let query = use_query_map();
    let flow = StoredValue::new(CheckoutFlow::new());

    Effect::new(move |_| {
        let signals = query.with(|q| signals_from(q));
        let user = session.user();
        let eligible = flow
            .try_update_value(|f| f.try_begin(session.ready(), user.as_ref(), signals))
            .unwrap_or(false);
        if !eligible {
            return;
        }

        leptos::task::spawn_local(async move {
            if let Err(e) = begin_checkout(route).await {
                leptos::logging::error!("auto-checkout failed: {e}");
                // re-arm so a later mount or state change can retry
                let _ = flow.try_update_value(|f| f.reset());
            }
        });
    });
}

async fn begin_checkout(route: &str) -> Result<(), String> {
    let tiers = api::list_tiers().await?;
    let tier = select_paid_tier(&tiers).map_err(|e| e.to_string())?;

    let url = api::create_checkout(
        tier,
        &api::return_url(route, "success"),
        &api::return_url(route, "canceled"),
    )
    .await?;

    match url {
        Some(url) => {
            navigate_external(&url);
            Ok(())
        }
        None => Err(FlowError::MissingRedirectUrl.to_string()),
    }
}

/// Full-page navigation out of the app (hosted checkout, billing portal)
pub fn navigate_external(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

/// Rewrite the visible URL without adding a history entry
fn strip_query(route: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(route));
        }
    }
}
