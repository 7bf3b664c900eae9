//! Per-instance gate state machine.
//!
//! A mounted gate moves between three states for as long as its route stays
//! mounted; there is no terminal state.
//!
//! ```text
//!             resolution done, rule 2-5 matches
//! Resolving ─────────────────────────────────────> Redirecting
//!     │                                              │    ^
//!     │ resolution done, no rule matches   next change│    │ rule newly matches
//!     v                                              v    │
//! Rendering <──────────────────────────────────── (re-evaluate)
//! ```
//!
//! The machine is what turns the pure [`decide`] result into at most one
//! navigation per session transition.

#[cfg(test)]
#[path = "machine_test.rs"]
mod machine_test;

use crate::decide::{Action, GatePaths, RouteRequirements, decide};
use crate::session::Session;

/// Lifecycle state of a mounted gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Resolving,
    Redirecting,
    Rendering,
}

impl GateState {
    fn for_action(action: &Action) -> Self {
        match action {
            Action::Loading => Self::Resolving,
            Action::Redirect(_) => Self::Redirecting,
            Action::Render => Self::Rendering,
        }
    }
}

/// Client-side route transition sink. Fire-and-forget.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path);
    }
}

/// Result of one gate evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub action: Action,
    /// Path to navigate to, set only when this evaluation is a new transition.
    pub navigate: Option<String>,
    pub state: GateState,
}

/// One mounted gate instance.
#[derive(Debug, Default)]
pub struct Gate {
    paths: GatePaths,
    state: GateState,
    last: Option<(Session, RouteRequirements, Action)>,
}

impl Gate {
    #[must_use]
    pub fn new(paths: GatePaths) -> Self {
        Self { paths, state: GateState::Resolving, last: None }
    }

    #[must_use]
    pub fn state(&self) -> GateState {
        self.state
    }

    #[must_use]
    pub fn paths(&self) -> &GatePaths {
        &self.paths
    }

    /// Run the decision procedure for `session`.
    ///
    /// Evaluating the same session and requirements again returns the
    /// previous action without a navigation request.
    pub fn evaluate(&mut self, session: &Session, requirements: &RouteRequirements) -> Outcome {
        if let Some((last_session, last_reqs, last_action)) = &self.last {
            if last_session == session && last_reqs == requirements {
                return Outcome { action: last_action.clone(), navigate: None, state: self.state };
            }
        }

        let action = decide(session, requirements, &self.paths);
        let next = GateState::for_action(&action);
        if next != self.state {
            log::debug!("gate {:?} -> {:?} at {}", self.state, next, session.current_path);
        }
        self.state = next;

        let navigate = action.redirect_target().map(str::to_owned);
        if let Some(target) = &navigate {
            log::debug!("gate redirect {} -> {target}", session.current_path);
        }

        self.last = Some((session.clone(), requirements.clone(), action.clone()));
        Outcome { action, navigate, state: next }
    }
}
