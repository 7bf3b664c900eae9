//! Session resolution and the bridge into the gate feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! Resolution asks the identity provider who is signed in and then asks the
//! profile store whether that identity has a profile. The bridge republishes
//! every `SessionState` change and every router location change into the
//! shared `SessionFeed`, which is what mounted gates subscribe to.

use leptos::prelude::*;

use crate::state::session::{FeedHandle, SessionState};

/// Start (or restart) identity resolution.
///
/// Called at mount and after every identity change. A lookup that is
/// overtaken by a newer one is discarded when it completes.
pub fn start_resolution(session: RwSignal<SessionState>) {
    let generation = session.try_update(SessionState::begin_resolution).unwrap_or_default();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        let profile = match &user {
            Some(user) => crate::net::api::fetch_profile(&user.id).await.unwrap_or_else(|e| {
                log::warn!("profile lookup failed, treating as missing: {e}");
                None
            }),
            None => None,
        };
        let applied = session.try_update(|s| s.finish_resolution(generation, user, profile)).unwrap_or(false);
        if !applied {
            log::debug!("discarded stale session resolution {generation}");
        }
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = generation;
}

/// Log out with the identity provider and forget the local identity.
pub fn sign_out(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::net::api::logout().await;
        session.update(SessionState::clear);
    });

    #[cfg(not(feature = "hydrate"))]
    session.update(SessionState::clear);
}

/// Republish session and location changes into the gate feed.
///
/// Must be called inside the router so `pathname` tracks navigation.
pub fn install_feed_bridge(session: RwSignal<SessionState>, feed: FeedHandle, pathname: Memo<String>) {
    Effect::new(move || {
        let snapshot = session.with(SessionState::gate_session);
        feed.with_value(|f| f.replace(snapshot));
    });
    Effect::new(move || {
        let path = pathname.get();
        feed.with_value(|f| f.set_path(&path));
    });
}
