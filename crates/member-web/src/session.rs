//! User Session Context
//!
//! Reactive handle on the externally owned user record. The record is
//! re-fetched wholesale, never patched; `ready` flips once the first fetch
//! resolves, logged in or not.

use leptos::prelude::*;
use member_core::User;

use crate::api;

#[derive(Clone, Copy)]
pub struct Session {
    user: RwSignal<Option<User>>,
    ready: RwSignal<bool>,
}

impl Session {
    pub fn user(&self) -> Option<User> {
        self.user.get()
    }

    pub fn ready(&self) -> bool {
        self.ready.get()
    }

    /// Re-fetch the user record from the API
    pub fn refresh(&self) {
        let user = self.user;
        let ready = self.ready;
        leptos::task::spawn_local(async move {
            match api::fetch_user().await {
                Ok(fetched) => user.set(fetched),
                Err(e) => leptos::logging::error!("user fetch failed: {e}"),
            }
            ready.set(true);
        });
    }
}

/// Install the session context and start the initial fetch
pub fn provide_session() {
    let session = Session {
        user: RwSignal::new(None),
        ready: RwSignal::new(false),
    };
    session.refresh();
    provide_context(session);
}

pub fn use_session() -> Session {
    expect_context::<Session>()
}
