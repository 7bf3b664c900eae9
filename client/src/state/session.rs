//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionState` is the reactive view of what the identity provider and the
//! profile store have told us. Route gates do not read it directly: the
//! session bridge republishes it into the shared [`SessionFeed`], which the
//! gates subscribe to.
//!
//! A resolution is tagged with a generation number. Starting a new one
//! (login, logout, refresh) bumps the generation, and a lookup that finishes
//! under an older generation is discarded.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use gate::{Identity, Session, SessionFeed};
use leptos::prelude::StoredValue;
use leptos::reactive::owner::LocalStorage;

use crate::net::types::{Profile, User};

/// Shared feed handle provided via context. The feed itself is `!Send`, so
/// it lives in local arena storage owned by the root component.
pub type FeedHandle = StoredValue<SessionFeed, LocalStorage>;

/// Identity and profile state of the current user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub profile: Option<Profile>,
    pub resolving: bool,
    pub generation: u64,
}

impl Default for SessionState {
    /// Nothing is known at mount; the first resolution is pending.
    fn default() -> Self {
        Self { user: None, profile: None, resolving: true, generation: 0 }
    }
}

impl SessionState {
    /// Mark a new resolution as in flight and return its generation.
    pub fn begin_resolution(&mut self) -> u64 {
        self.generation += 1;
        self.resolving = true;
        self.user = None;
        self.profile = None;
        self.generation
    }

    /// Apply a finished lookup. Returns `false` (and changes nothing) when a
    /// newer resolution has started since `generation` was issued.
    pub fn finish_resolution(&mut self, generation: u64, user: Option<User>, profile: Option<Profile>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.profile = if user.is_some() { profile } else { None };
        self.user = user;
        self.resolving = false;
        true
    }

    /// Profile created during registration.
    pub fn set_profile(&mut self, profile: Profile) {
        if self.user.is_some() {
            self.profile = Some(profile);
        }
    }

    /// Identity known to be absent (after logout).
    pub fn clear(&mut self) {
        self.generation += 1;
        self.user = None;
        self.profile = None;
        self.resolving = false;
    }

    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        self.user.as_ref().map(|user| Identity::new(user.id.clone()))
    }

    #[must_use]
    pub fn profile_complete(&self) -> bool {
        self.user.is_some() && self.profile.is_some()
    }

    /// Project into the gate's session model. The path is filled in by the
    /// feed, which tracks the router location separately.
    #[must_use]
    pub fn gate_session(&self) -> Session {
        Session {
            identity: self.identity(),
            profile_complete: self.profile_complete(),
            resolving: self.resolving,
            current_path: String::new(),
        }
    }

    /// Organization name for headings, falling back to the user's label.
    #[must_use]
    pub fn organization_label(&self) -> Option<String> {
        match (&self.profile, &self.user) {
            (Some(profile), _) if !profile.organization.trim().is_empty() => Some(profile.organization.clone()),
            (_, Some(user)) => Some(user.display_label()),
            _ => None,
        }
    }
}
