use super::*;

#[test]
fn profile_endpoint_formats_expected_path() {
    assert_eq!(profile_endpoint("u123"), "/api/profiles/u123");
}

#[test]
fn public_contract_endpoint_formats_expected_path() {
    assert_eq!(public_contract_endpoint("tok-9"), "/api/public/contracts/tok-9");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("profile lookup", 500), "profile lookup failed: 500");
    assert_eq!(request_failed_message("create client", 422), "create client failed: 422");
}

#[test]
fn wallet_sign_in_url_is_same_origin() {
    assert!(WALLET_SIGN_IN_URL.starts_with('/'));
}

#[test]
fn current_user_is_absent_outside_the_browser() {
    let user = block_on_ready(fetch_current_user());
    assert_eq!(user, None);
}

#[test]
fn profile_lookup_is_unavailable_outside_the_browser() {
    let result = block_on_ready(fetch_profile("u1"));
    assert_eq!(result, Err("not available on server".to_owned()));
}

/// Poll a future that completes without awaiting anything.
fn block_on_ready<F: std::future::Future>(future: F) -> F::Output {
    use std::task::{Context, Poll, Waker};
    let mut future = std::pin::pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("future should complete immediately"),
    }
}
