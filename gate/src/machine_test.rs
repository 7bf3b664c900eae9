use std::cell::RefCell;

use super::*;
use crate::session::Identity;

fn user() -> Identity {
    Identity::new("user-1")
}

#[test]
fn new_gate_starts_resolving() {
    let gate = Gate::new(GatePaths::default());
    assert_eq!(gate.state(), GateState::Resolving);
}

#[test]
fn resolving_session_keeps_gate_resolving_without_navigation() {
    let mut gate = Gate::new(GatePaths::default());
    let outcome = gate.evaluate(&Session::resolving("/dashboard"), &RouteRequirements::member());
    assert_eq!(outcome.action, Action::Loading);
    assert_eq!(outcome.navigate, None);
    assert_eq!(outcome.state, GateState::Resolving);
}

#[test]
fn resolution_to_anonymous_moves_to_redirecting() {
    let mut gate = Gate::new(GatePaths::default());
    gate.evaluate(&Session::resolving("/dashboard"), &RouteRequirements::member());
    let outcome = gate.evaluate(&Session::anonymous("/dashboard"), &RouteRequirements::member());
    assert_eq!(outcome.state, GateState::Redirecting);
    assert_eq!(outcome.navigate.as_deref(), Some("/login"));
}

#[test]
fn resolution_with_profile_moves_to_rendering() {
    let mut gate = Gate::new(GatePaths::default());
    gate.evaluate(&Session::resolving("/dashboard"), &RouteRequirements::member());
    let outcome = gate.evaluate(&Session::signed_in(user(), true, "/dashboard"), &RouteRequirements::member());
    assert_eq!(outcome.action, Action::Render);
    assert_eq!(outcome.state, GateState::Rendering);
    assert_eq!(gate.state(), GateState::Rendering);
}

#[test]
fn unchanged_session_issues_no_duplicate_navigation() {
    let mut gate = Gate::new(GatePaths::default());
    let session = Session::anonymous("/contracts");
    let reqs = RouteRequirements::member();

    let first = gate.evaluate(&session, &reqs);
    let second = gate.evaluate(&session, &reqs);

    assert_eq!(first.navigate.as_deref(), Some("/login"));
    assert_eq!(second.action, first.action);
    assert_eq!(second.navigate, None);
    assert_eq!(second.state, GateState::Redirecting);
}

#[test]
fn revoked_identity_moves_rendering_to_redirecting() {
    let mut gate = Gate::new(GatePaths::default());
    let reqs = RouteRequirements::member();
    gate.evaluate(&Session::signed_in(user(), true, "/contracts"), &reqs);
    assert_eq!(gate.state(), GateState::Rendering);

    let outcome = gate.evaluate(&Session::anonymous("/contracts"), &reqs);
    assert_eq!(outcome.state, GateState::Redirecting);
    assert_eq!(outcome.navigate.as_deref(), Some("/login"));
}

#[test]
fn redirecting_returns_to_resolving_on_identity_change() {
    let mut gate = Gate::new(GatePaths::default());
    let reqs = RouteRequirements::none();
    gate.evaluate(&Session::signed_in(user(), true, "/login"), &reqs);
    assert_eq!(gate.state(), GateState::Redirecting);

    let outcome = gate.evaluate(&Session::resolving("/login"), &reqs);
    assert_eq!(outcome.state, GateState::Resolving);
    assert_eq!(outcome.navigate, None);
}

#[test]
fn changed_requirements_re_evaluate() {
    let mut gate = Gate::new(GatePaths::default());
    let session = Session::anonymous("/register");
    let first = gate.evaluate(&session, &RouteRequirements::none());
    let second = gate.evaluate(&session, &RouteRequirements::auth_only());
    assert_eq!(first.action, Action::Render);
    assert_eq!(second.navigate.as_deref(), Some("/login"));
}

#[test]
fn closures_are_navigators() {
    let seen = RefCell::new(Vec::new());
    let navigator = |path: &str| seen.borrow_mut().push(path.to_owned());
    navigator.navigate("/login");
    navigator.navigate("/dashboard");
    assert_eq!(*seen.borrow(), vec!["/login".to_owned(), "/dashboard".to_owned()]);
}
