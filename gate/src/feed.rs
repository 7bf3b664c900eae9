//! Session change feed and the controller that binds a gate to it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider, the profile lookup, and the router each write into
//! one [`SessionFeed`]. Every mounted gate holds a [`GateController`] that
//! subscribes to the feed and re-runs the decision procedure on each
//! emission. Dropping the controller releases its [`Subscription`].
//!
//! Everything here is single-threaded (`Rc`/`RefCell`): all writes happen on
//! the UI thread in reaction to browser events.
//!
//! Writes issued while subscribers are being notified (a navigator that
//! updates the path synchronously, for example) are applied immediately but
//! delivered after the current round, so callbacks never observe a nested
//! borrow.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::decide::{Action, RouteRequirements};
use crate::machine::{Gate, Navigator};
use crate::session::{Identity, Session};

type Callback = Box<dyn FnMut(&Session)>;

#[derive(Default)]
struct FeedInner {
    session: Session,
    subscribers: Vec<(u64, Callback)>,
    next_id: u64,
    notifying: bool,
    pending: bool,
    dropped: Vec<u64>,
}

/// Shared, observable holder of the current [`Session`].
#[derive(Clone, Default)]
pub struct SessionFeed {
    inner: Rc<RefCell<FeedInner>>,
}

impl std::fmt::Debug for SessionFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("SessionFeed")
            .field("session", &inner.session)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl SessionFeed {
    #[must_use]
    pub fn new(initial: Session) -> Self {
        Self { inner: Rc::new(RefCell::new(FeedInner { session: initial, ..FeedInner::default() })) }
    }

    /// Current session snapshot.
    #[must_use]
    pub fn session(&self) -> Session {
        self.inner.borrow().session.clone()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Register `callback` for every future session change.
    ///
    /// The callback is not invoked for the current value; callers that need
    /// an initial evaluation read [`SessionFeed::session`] themselves.
    pub fn subscribe(&self, callback: impl FnMut(&Session) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Box::new(callback)));
        Subscription { feed: Rc::downgrade(&self.inner), id }
    }

    /// Identity changed (login, logout, token refresh): lookup in flight.
    pub fn begin_resolution(&self) {
        self.write(|s| Session { identity: None, profile_complete: false, resolving: true, ..s.clone() });
    }

    /// Identity and profile existence are both known.
    pub fn resolve(&self, identity: Option<Identity>, profile_complete: bool) {
        self.write(|s| Session {
            profile_complete: identity.is_some() && profile_complete,
            identity: identity.clone(),
            resolving: false,
            ..s.clone()
        });
    }

    /// Identity known to be absent.
    pub fn sign_out(&self) {
        self.resolve(None, false);
    }

    /// The router is now rendering `path`.
    pub fn set_path(&self, path: &str) {
        self.write(|s| s.at(path));
    }

    /// Replace identity fields wholesale while keeping the current path.
    pub fn replace(&self, session: Session) {
        self.write(|s| Session { current_path: s.current_path.clone(), ..session.clone() });
    }

    fn write(&self, next: impl Fn(&Session) -> Session) {
        {
            let mut inner = self.inner.borrow_mut();
            let updated = next(&inner.session);
            if updated == inner.session {
                return;
            }
            inner.session = updated;
            if inner.notifying {
                inner.pending = true;
                return;
            }
        }
        self.notify();
    }

    /// Run `f` as part of a notification round: writes it makes are applied
    /// at once and delivered after it returns.
    fn deferring(&self, f: impl FnOnce()) {
        let outer = std::mem::replace(&mut self.inner.borrow_mut().notifying, true);
        f();
        if outer {
            return;
        }
        let pending = {
            let mut inner = self.inner.borrow_mut();
            inner.notifying = false;
            // Unsubscribes during `f` already left the live list.
            inner.dropped.clear();
            std::mem::take(&mut inner.pending)
        };
        if pending {
            self.notify();
        }
    }

    fn notify(&self) {
        loop {
            let (session, mut subscribers) = {
                let mut inner = self.inner.borrow_mut();
                inner.notifying = true;
                inner.pending = false;
                (inner.session.clone(), std::mem::take(&mut inner.subscribers))
            };

            for (id, callback) in &mut subscribers {
                if self.inner.borrow().dropped.contains(id) {
                    continue;
                }
                callback(&session);
            }

            let (removed, pending) = {
                let mut inner = self.inner.borrow_mut();
                let dropped = std::mem::take(&mut inner.dropped);
                let (mut kept, removed): (Vec<_>, Vec<_>) =
                    subscribers.into_iter().partition(|(id, _)| !dropped.contains(id));
                // Subscribers added during the round landed in the live list.
                kept.append(&mut inner.subscribers);
                inner.subscribers = kept;
                inner.notifying = false;
                (removed, inner.pending)
            };
            // Callbacks may own subscriptions; drop them outside the borrow.
            drop(removed);
            if !pending {
                break;
            }
        }
    }

    fn unsubscribe(inner: &Rc<RefCell<FeedInner>>, id: u64) {
        let removed = {
            let mut inner = inner.borrow_mut();
            if inner.notifying {
                inner.dropped.push(id);
            }
            inner.subscribers.iter().position(|(sub_id, _)| *sub_id == id).map(|pos| inner.subscribers.remove(pos))
        };
        drop(removed);
    }
}

/// Handle for one feed subscription. Unsubscribes on drop.
#[derive(Debug)]
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    feed: Weak<RefCell<FeedInner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.feed.upgrade() {
            SessionFeed::unsubscribe(&inner, self.id);
        }
    }
}

/// A [`Gate`] subscribed to a [`SessionFeed`] for the lifetime of a route.
pub struct GateController {
    gate: Rc<RefCell<Gate>>,
    _subscription: Subscription,
}

impl std::fmt::Debug for GateController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GateController").field("gate", &self.gate.borrow()).finish_non_exhaustive()
    }
}

impl GateController {
    /// Evaluate `gate` against the feed's current session, then again on
    /// every change until the controller is dropped.
    ///
    /// `requirements` maps the session's current path to the route's
    /// requirements, or `None` for paths this gate does not own; the gate
    /// sits out those emissions. `on_action` receives every evaluation
    /// result.
    pub fn mount<R, N, A>(feed: &SessionFeed, gate: Gate, requirements: R, navigator: N, on_action: A) -> Self
    where
        R: Fn(&str) -> Option<RouteRequirements> + 'static,
        N: Navigator + 'static,
        A: FnMut(&Action) + 'static,
    {
        let gate = Rc::new(RefCell::new(gate));
        let on_action = Rc::new(RefCell::new(on_action));

        let step = {
            let gate = Rc::clone(&gate);
            Rc::new(move |session: &Session| {
                let Some(reqs) = requirements(&session.current_path) else {
                    return;
                };
                let outcome = gate.borrow_mut().evaluate(session, &reqs);
                (on_action.borrow_mut())(&outcome.action);
                // No borrow is held here, so a navigator that writes back
                // into the feed re-enters this closure safely.
                if let Some(target) = outcome.navigate {
                    navigator.navigate(&target);
                }
            })
        };

        let subscription = feed.subscribe({
            let step = Rc::clone(&step);
            move |session: &Session| step(session)
        });
        // The first evaluation counts as a round of its own so a callback that
        // writes into the feed is not re-entered while still running.
        feed.deferring(|| step(&feed.session()));
        Self { gate, _subscription: subscription }
    }

    #[must_use]
    pub fn state(&self) -> crate::machine::GateState {
        self.gate.borrow().state()
    }
}
