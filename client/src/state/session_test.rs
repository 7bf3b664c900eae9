use super::*;

fn user() -> User {
    User { id: "u1".to_owned(), name: "Ada".to_owned(), email: None, wallet_address: None }
}

fn profile(organization: &str) -> Profile {
    Profile {
        user_id: "u1".to_owned(),
        name: "Ada".to_owned(),
        organization: organization.to_owned(),
        address: "1 Analytical Way".to_owned(),
        email: "ada@example.com".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_resolving_without_user() {
    let state = SessionState::default();
    assert!(state.resolving);
    assert!(state.user.is_none());
    assert_eq!(state.generation, 0);
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn finish_resolution_applies_current_generation() {
    let mut state = SessionState::default();
    let generation = state.begin_resolution();
    assert!(state.finish_resolution(generation, Some(user()), Some(profile("Acme"))));
    assert!(!state.resolving);
    assert!(state.profile_complete());
}

#[test]
fn stale_resolution_is_discarded() {
    let mut state = SessionState::default();
    let stale = state.begin_resolution();
    let current = state.begin_resolution();

    assert!(!state.finish_resolution(stale, Some(user()), None));
    assert!(state.resolving);
    assert!(state.user.is_none());

    assert!(state.finish_resolution(current, None, None));
    assert!(!state.resolving);
}

#[test]
fn resolution_after_logout_is_discarded() {
    let mut state = SessionState::default();
    let generation = state.begin_resolution();
    state.clear();
    assert!(!state.finish_resolution(generation, Some(user()), None));
    assert!(state.user.is_none());
    assert!(!state.resolving);
}

#[test]
fn profile_without_user_is_dropped() {
    let mut state = SessionState::default();
    let generation = state.begin_resolution();
    state.finish_resolution(generation, None, Some(profile("Acme")));
    assert!(state.profile.is_none());
    assert!(!state.profile_complete());
}

#[test]
fn begin_resolution_forgets_previous_identity() {
    let mut state = SessionState::default();
    let generation = state.begin_resolution();
    state.finish_resolution(generation, Some(user()), Some(profile("Acme")));

    state.begin_resolution();
    assert!(state.resolving);
    assert!(state.identity().is_none());
}

// =============================================================
// Gate projection
// =============================================================

#[test]
fn gate_session_projects_identity_and_profile() {
    let mut state = SessionState::default();
    let generation = state.begin_resolution();
    state.finish_resolution(generation, Some(user()), None);

    let session = state.gate_session();
    assert_eq!(session.identity, Some(Identity::new("u1")));
    assert!(!session.profile_complete);
    assert!(!session.resolving);

    state.set_profile(profile("Acme"));
    assert!(state.gate_session().profile_complete);
}

#[test]
fn set_profile_requires_user() {
    let mut state = SessionState::default();
    state.clear();
    state.set_profile(profile("Acme"));
    assert!(state.profile.is_none());
}

#[test]
fn organization_label_prefers_profile_organization() {
    let mut state = SessionState::default();
    let generation = state.begin_resolution();
    state.finish_resolution(generation, Some(user()), Some(profile("Acme Studio")));
    assert_eq!(state.organization_label().as_deref(), Some("Acme Studio"));

    state.profile = Some(profile("  "));
    assert_eq!(state.organization_label().as_deref(), Some("Ada"));

    state.clear();
    assert_eq!(state.organization_label(), None);
}
