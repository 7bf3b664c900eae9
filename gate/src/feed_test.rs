use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::decide::GatePaths;
use crate::machine::GateState;

fn recorder() -> (Rc<RefCell<Vec<Session>>>, impl FnMut(&Session) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, move |session: &Session| sink.borrow_mut().push(session.clone()))
}

fn member_routes(path: &str) -> Option<RouteRequirements> {
    Some(match path {
        "/" | "/login" => RouteRequirements::none(),
        "/register" => RouteRequirements::auth_only(),
        _ => RouteRequirements::member(),
    })
}

// =============================================================
// SessionFeed
// =============================================================

#[test]
fn subscribers_receive_changes() {
    let feed = SessionFeed::new(Session::resolving("/"));
    let (seen, callback) = recorder();
    let _sub = feed.subscribe(callback);

    feed.resolve(Some(Identity::new("u1")), true);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], Session::signed_in(Identity::new("u1"), true, "/"));
}

#[test]
fn subscribe_does_not_replay_current_value() {
    let feed = SessionFeed::new(Session::anonymous("/"));
    let (seen, callback) = recorder();
    let _sub = feed.subscribe(callback);
    assert!(seen.borrow().is_empty());
}

#[test]
fn unchanged_write_notifies_nobody() {
    let feed = SessionFeed::new(Session::anonymous("/"));
    let (seen, callback) = recorder();
    let _sub = feed.subscribe(callback);

    feed.set_path("/");
    feed.sign_out();

    assert!(seen.borrow().is_empty());
}

#[test]
fn resolve_without_identity_clears_profile_flag() {
    let feed = SessionFeed::new(Session::resolving("/"));
    feed.resolve(None, true);
    assert!(!feed.session().profile_complete);
    assert!(!feed.session().resolving);
}

#[test]
fn begin_resolution_keeps_path_and_forgets_identity() {
    let feed = SessionFeed::new(Session::signed_in(Identity::new("u1"), true, "/contracts"));
    feed.begin_resolution();
    assert_eq!(feed.session(), Session::resolving("/contracts"));
}

#[test]
fn replace_keeps_current_path() {
    let feed = SessionFeed::new(Session::resolving("/clients"));
    feed.replace(Session::signed_in(Identity::new("u1"), false, "/ignored"));
    assert_eq!(feed.session().current_path, "/clients");
    assert!(feed.session().is_authenticated());
}

#[test]
fn dropped_subscription_stops_receiving() {
    let feed = SessionFeed::new(Session::resolving("/"));
    let (seen, callback) = recorder();
    let sub = feed.subscribe(callback);
    assert_eq!(feed.subscriber_count(), 1);

    drop(sub);
    feed.sign_out();

    assert_eq!(feed.subscriber_count(), 0);
    assert!(seen.borrow().is_empty());
}

#[test]
fn write_inside_notification_is_delivered_after_the_round() {
    let feed = SessionFeed::new(Session::anonymous("/"));
    let (seen, callback) = recorder();

    let writer_feed = feed.clone();
    let _redirect = feed.subscribe(move |session: &Session| {
        if session.current_path == "/old" {
            writer_feed.set_path("/new");
        }
    });
    let _recorder = feed.subscribe(callback);

    feed.set_path("/old");

    let paths: Vec<String> = seen.borrow().iter().map(|s| s.current_path.clone()).collect();
    assert_eq!(paths, vec!["/old".to_owned(), "/new".to_owned()]);
    assert_eq!(feed.session().current_path, "/new");
}

#[test]
fn subscription_dropped_during_round_is_skipped() {
    let feed = SessionFeed::new(Session::anonymous("/"));
    let (seen, callback) = recorder();
    let victim = Rc::new(RefCell::new(Some(feed.subscribe(callback))));

    let _killer = {
        let victim = Rc::clone(&victim);
        feed.subscribe(move |_: &Session| {
            victim.borrow_mut().take();
        })
    };
    // Recorder was registered first, so it sees the first change.
    feed.set_path("/a");
    feed.set_path("/b");

    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(feed.subscriber_count(), 1);
}

// =============================================================
// GateController
// =============================================================

#[test]
fn controller_evaluates_on_mount() {
    let feed = SessionFeed::new(Session::resolving("/dashboard"));
    let actions = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&actions);

    let controller = GateController::mount(
        &feed,
        Gate::new(GatePaths::default()),
        member_routes,
        |_: &str| {},
        move |action: &Action| sink.borrow_mut().push(action.clone()),
    );

    assert_eq!(*actions.borrow(), vec![Action::Loading]);
    assert_eq!(controller.state(), GateState::Resolving);
}

#[test]
fn controller_navigates_once_per_transition() {
    let feed = SessionFeed::new(Session::resolving("/contracts"));
    let navigations = Rc::new(RefCell::new(Vec::new()));
    let nav_sink = Rc::clone(&navigations);

    let controller = GateController::mount(
        &feed,
        Gate::new(GatePaths::default()),
        member_routes,
        move |path: &str| nav_sink.borrow_mut().push(path.to_owned()),
        |_: &Action| {},
    );

    feed.sign_out();
    // Same session again: no emission, no navigation.
    feed.sign_out();

    assert_eq!(*navigations.borrow(), vec!["/login".to_owned()]);
    assert_eq!(controller.state(), GateState::Redirecting);
}

#[test]
fn synchronous_navigator_settles_without_looping() {
    let feed = SessionFeed::new(Session::resolving("/login"));
    let navigations = Rc::new(RefCell::new(Vec::new()));
    let actions = Rc::new(RefCell::new(Vec::new()));

    let nav_sink = Rc::clone(&navigations);
    let nav_feed = feed.clone();
    let action_sink = Rc::clone(&actions);
    let controller = GateController::mount(
        &feed,
        Gate::new(GatePaths::default()),
        member_routes,
        move |path: &str| {
            nav_sink.borrow_mut().push(path.to_owned());
            nav_feed.set_path(path);
        },
        move |action: &Action| action_sink.borrow_mut().push(action.clone()),
    );

    feed.resolve(Some(Identity::new("u1")), true);

    assert_eq!(*navigations.borrow(), vec!["/dashboard".to_owned()]);
    assert_eq!(
        *actions.borrow(),
        vec![Action::Loading, Action::Redirect("/dashboard".to_owned()), Action::Render]
    );
    assert_eq!(controller.state(), GateState::Rendering);
    assert_eq!(feed.session().current_path, "/dashboard");
}

#[test]
fn action_callback_may_write_during_first_evaluation() {
    let feed = SessionFeed::new(Session::signed_in(Identity::new("u1"), true, "/dashboard"));
    let actions = Rc::new(RefCell::new(Vec::new()));
    let navigations = Rc::new(RefCell::new(Vec::new()));

    let writer = feed.clone();
    let action_sink = Rc::clone(&actions);
    let nav_sink = Rc::clone(&navigations);
    let controller = GateController::mount(
        &feed,
        Gate::new(GatePaths::default()),
        member_routes,
        move |path: &str| nav_sink.borrow_mut().push(path.to_owned()),
        move |action: &Action| {
            action_sink.borrow_mut().push(action.clone());
            writer.set_path("/contracts");
        },
    );

    assert_eq!(*actions.borrow(), vec![Action::Render, Action::Render]);
    assert!(navigations.borrow().is_empty());
    assert_eq!(controller.state(), GateState::Rendering);
    assert_eq!(feed.session().current_path, "/contracts");
}

#[test]
fn mounting_inside_a_notification_defers_to_that_round() {
    let feed = SessionFeed::new(Session::resolving("/contracts"));
    let mounted = Rc::new(RefCell::new(None));

    let slot = Rc::clone(&mounted);
    let inner_feed = feed.clone();
    let _sub = feed.subscribe(move |_: &Session| {
        if slot.borrow().is_some() {
            return;
        }
        let writer = inner_feed.clone();
        let controller = GateController::mount(
            &inner_feed,
            Gate::new(GatePaths::default()),
            member_routes,
            |_: &str| {},
            move |_: &Action| writer.set_path("/clients"),
        );
        *slot.borrow_mut() = Some(controller);
    });

    feed.resolve(Some(Identity::new("u1")), true);

    assert_eq!(feed.session().current_path, "/clients");
    let state = mounted.borrow().as_ref().map(GateController::state);
    assert_eq!(state, Some(GateState::Rendering));
}

#[test]
fn controller_without_profile_walks_to_registration() {
    let feed = SessionFeed::new(Session::resolving("/contracts"));
    let nav_feed = feed.clone();
    let controller = GateController::mount(
        &feed,
        Gate::new(GatePaths::default()),
        member_routes,
        move |path: &str| nav_feed.set_path(path),
        |_: &Action| {},
    );

    feed.resolve(Some(Identity::new("u1")), false);

    assert_eq!(feed.session().current_path, "/register");
    assert_eq!(controller.state(), GateState::Rendering);
}

#[test]
fn dropping_controller_unsubscribes() {
    let feed = SessionFeed::new(Session::resolving("/dashboard"));
    let controller =
        GateController::mount(&feed, Gate::new(GatePaths::default()), member_routes, |_: &str| {}, |_: &Action| {});
    assert_eq!(feed.subscriber_count(), 1);

    drop(controller);
    assert_eq!(feed.subscriber_count(), 0);
}

#[test]
fn revoked_identity_redirects_rendering_gate() {
    let feed = SessionFeed::new(Session::signed_in(Identity::new("u1"), true, "/clients"));
    let navigations = Rc::new(RefCell::new(Vec::new()));
    let nav_sink = Rc::clone(&navigations);
    let controller = GateController::mount(
        &feed,
        Gate::new(GatePaths::default()),
        member_routes,
        move |path: &str| nav_sink.borrow_mut().push(path.to_owned()),
        |_: &Action| {},
    );
    assert_eq!(controller.state(), GateState::Rendering);

    feed.sign_out();

    assert_eq!(controller.state(), GateState::Redirecting);
    assert_eq!(*navigations.borrow(), vec!["/login".to_owned()]);
}

#[test]
fn controller_sits_out_paths_it_does_not_own() {
    let feed = SessionFeed::new(Session::signed_in(Identity::new("u1"), true, "/clients"));
    let navigations = Rc::new(RefCell::new(Vec::new()));
    let actions = Rc::new(RefCell::new(Vec::new()));
    let nav_sink = Rc::clone(&navigations);
    let action_sink = Rc::clone(&actions);
    let controller = GateController::mount(
        &feed,
        Gate::new(GatePaths::default()),
        |path: &str| (path == "/clients").then(RouteRequirements::member),
        move |path: &str| nav_sink.borrow_mut().push(path.to_owned()),
        move |action: &Action| action_sink.borrow_mut().push(action.clone()),
    );

    // Leaving for the login page would bounce a signed-in member if this
    // gate still evaluated there.
    feed.set_path("/login");
    feed.sign_out();

    assert!(navigations.borrow().is_empty());
    assert_eq!(*actions.borrow(), vec![Action::Render]);
    assert_eq!(controller.state(), GateState::Rendering);
}
