//! Observed identity state for the current browser session.
//!
//! DESIGN
//! ======
//! `Session` is a projection of state owned by the identity provider and the
//! profile store. It is rebuilt from those sources on every change rather
//! than mutated in place by the gate.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Opaque authenticated principal reference issued by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Snapshot of what is currently known about the user and location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Present iff the user has completed authentication.
    pub identity: Option<Identity>,
    /// Whether a profile record exists. Ignored while `identity` is absent.
    pub profile_complete: bool,
    /// True while the identity/profile lookup is in flight.
    pub resolving: bool,
    /// Path the navigation layer is currently rendering.
    pub current_path: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::resolving("")
    }
}

impl Session {
    /// Session at process start: nothing known yet.
    #[must_use]
    pub fn resolving(current_path: impl Into<String>) -> Self {
        Self { identity: None, profile_complete: false, resolving: true, current_path: current_path.into() }
    }

    /// Resolved session with no authenticated user.
    #[must_use]
    pub fn anonymous(current_path: impl Into<String>) -> Self {
        Self { identity: None, profile_complete: false, resolving: false, current_path: current_path.into() }
    }

    /// Resolved session for an authenticated user.
    #[must_use]
    pub fn signed_in(identity: Identity, profile_complete: bool, current_path: impl Into<String>) -> Self {
        Self { identity: Some(identity), profile_complete, resolving: false, current_path: current_path.into() }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Profile existence, forced to `false` when no identity is present.
    #[must_use]
    pub fn has_profile(&self) -> bool {
        self.identity.is_some() && self.profile_complete
    }

    /// Same session observed at another path.
    #[must_use]
    pub fn at(&self, path: impl Into<String>) -> Self {
        Self { current_path: path.into(), ..self.clone() }
    }
}
