//! The gate decision procedure.
//!
//! Rules are evaluated in order and the first match wins:
//!
//! 1. resolving                                         -> Loading
//! 2. auth required, no identity                        -> Redirect(redirect target)
//! 3. identity, profile required, no profile, not on register -> Redirect(register)
//! 4. identity, profile, on login or register           -> Redirect(dashboard)
//! 5. identity, no profile, on login                    -> Redirect(register)
//! 6. otherwise                                         -> Render
//!
//! Rules 3-5 check the current path so a redirect never targets the page
//! that triggered it.

#[cfg(test)]
#[path = "decide_test.rs"]
mod decide_test;

use serde::{Deserialize, Serialize};

use crate::GateError;
use crate::session::Session;

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_REGISTER_PATH: &str = "/register";
pub const DEFAULT_DASHBOARD_PATH: &str = "/dashboard";

/// What a gate should do for the current session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Identity resolution in flight; show a placeholder.
    Loading,
    /// Navigate to the given path and render nothing.
    Redirect(String),
    /// Render the wrapped page.
    Render,
}

impl Action {
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Redirect(path) => Some(path),
            Self::Loading | Self::Render => None,
        }
    }
}

/// Per-route requirements declared by the routing table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteRequirements {
    pub require_auth: bool,
    pub require_profile: bool,
    /// Where unauthenticated users are sent. `None` means the login path.
    pub redirect_to: Option<String>,
}

impl RouteRequirements {
    /// Gate with no requirements (login pages).
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Authenticated users only; profile not needed (registration).
    #[must_use]
    pub fn auth_only() -> Self {
        Self { require_auth: true, ..Self::default() }
    }

    /// Authenticated users with a completed profile.
    #[must_use]
    pub fn member() -> Self {
        Self { require_auth: true, require_profile: true, redirect_to: None }
    }

    #[must_use]
    pub fn with_redirect(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = Some(path.into());
        self
    }
}

/// The three well-known paths the gate redirects between.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatePaths {
    login: String,
    register: String,
    dashboard: String,
}

impl Default for GatePaths {
    fn default() -> Self {
        Self {
            login: DEFAULT_LOGIN_PATH.to_owned(),
            register: DEFAULT_REGISTER_PATH.to_owned(),
            dashboard: DEFAULT_DASHBOARD_PATH.to_owned(),
        }
    }
}

impl GatePaths {
    /// Build a path set, rejecting relative or duplicated paths.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::RelativePath`] when a path does not start with
    /// `/` and [`GateError::DuplicatePath`] when two paths coincide.
    pub fn new(login: &str, register: &str, dashboard: &str) -> Result<Self, GateError> {
        let paths = [login, register, dashboard];
        for path in paths {
            if !path.starts_with('/') {
                return Err(GateError::RelativePath(path.to_owned()));
            }
        }
        for (i, a) in paths.iter().enumerate() {
            if paths[i + 1..].iter().any(|b| same_path(a, b)) {
                return Err(GateError::DuplicatePath((*a).to_owned()));
            }
        }
        Ok(Self { login: login.to_owned(), register: register.to_owned(), dashboard: dashboard.to_owned() })
    }

    #[must_use]
    pub fn login(&self) -> &str {
        &self.login
    }

    #[must_use]
    pub fn register(&self) -> &str {
        &self.register
    }

    #[must_use]
    pub fn dashboard(&self) -> &str {
        &self.dashboard
    }
}

/// Decide what a gate does for `session` on a route with `requirements`.
#[must_use]
pub fn decide(session: &Session, requirements: &RouteRequirements, paths: &GatePaths) -> Action {
    if session.resolving {
        return Action::Loading;
    }

    if session.identity.is_none() {
        if requirements.require_auth {
            let target = requirements.redirect_to.as_deref().unwrap_or(paths.login());
            return Action::Redirect(target.to_owned());
        }
        return Action::Render;
    }

    let path = session.current_path.as_str();
    let on_login = same_path(path, paths.login());
    let on_register = same_path(path, paths.register());

    if requirements.require_profile && !session.profile_complete && !on_register {
        return Action::Redirect(paths.register().to_owned());
    }
    if session.profile_complete && (on_login || on_register) {
        return Action::Redirect(paths.dashboard().to_owned());
    }
    if !session.profile_complete && on_login {
        return Action::Redirect(paths.register().to_owned());
    }
    Action::Render
}

/// Compare two paths ignoring any query or fragment and a trailing slash.
pub(crate) fn same_path(a: &str, b: &str) -> bool {
    trim_trailing_slash(strip_query(a)) == trim_trailing_slash(strip_query(b))
}

pub(crate) fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

pub(crate) fn trim_trailing_slash(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
