//! REST helpers for the managed backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser session.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so identity and
//! profile lookup failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    ClientDraft, ClientSummary, ContractDraft, ContractSummary, Profile, ProfileDraft, PublicContract, User,
};

/// Hosted wallet sign-in flow run by the identity provider.
pub const WALLET_SIGN_IN_URL: &str = "/auth/wallet";

#[cfg(any(test, feature = "hydrate"))]
fn profile_endpoint(user_id: &str) -> String {
    format!("/api/profiles/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn public_contract_endpoint(token: &str) -> String {
    format!("/api/public/contracts/{token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

#[cfg(not(feature = "hydrate"))]
fn unavailable<T>() -> Result<T, String> {
    Err("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str, what: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url).send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(what, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    url: &str,
    body: &B,
    what: &str,
) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(what, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated, on failure, or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post("/api/auth/logout").send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}

/// Request an emailed sign-in code via `POST /api/auth/email/request-code`.
///
/// Returns the code when the provider is configured to echo it (development).
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn request_email_login_code(email: &str) -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct RequestCodeResponse {
            ok: bool,
            code: Option<String>,
        }
        let payload = serde_json::json!({ "email": email });
        let body: RequestCodeResponse =
            post_json("/api/auth/email/request-code", &payload, "request code").await?;
        if !body.ok {
            return Err("request code failed".to_owned());
        }
        Ok(body.code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        unavailable()
    }
}

/// Verify an emailed sign-in code via `POST /api/auth/email/verify-code`.
///
/// # Errors
///
/// Returns an error string if the request fails or the code is rejected.
pub async fn verify_email_login_code(email: &str, code: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct VerifyCodeResponse {
            ok: bool,
        }
        let payload = serde_json::json!({ "email": email, "code": code });
        let body: VerifyCodeResponse = post_json("/api/auth/email/verify-code", &payload, "verify code").await?;
        if !body.ok {
            return Err("verify code failed".to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code);
        unavailable()
    }
}

/// Look up the profile for `user_id`. `Ok(None)` means no profile exists.
///
/// # Errors
///
/// Returns an error string for transport failures and non-404 errors.
pub async fn fetch_profile(user_id: &str) -> Result<Option<Profile>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = profile_endpoint(user_id);
        let resp = gloo_net::http::Request::get(&url).send().await.map_err(|e| e.to_string())?;
        if resp.status() == 404 {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(request_failed_message("profile lookup", resp.status()));
        }
        resp.json::<Profile>().await.map(Some).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        unavailable()
    }
}

/// Create the signed-in user's profile via `POST /api/profiles`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn create_profile(draft: &ProfileDraft) -> Result<Profile, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/profiles", draft, "create profile").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        unavailable()
    }
}

/// List the signed-in user's contracts.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_contracts() -> Result<Vec<ContractSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/contracts", "contract list").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Create a draft contract.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn create_contract(draft: &ContractDraft) -> Result<ContractSummary, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/contracts", draft, "create contract").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        unavailable()
    }
}

/// List the signed-in user's clients.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_clients() -> Result<Vec<ClientSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/clients", "client list").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Create a client record.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn create_client(draft: &ClientDraft) -> Result<ClientSummary, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/clients", draft, "create client").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        unavailable()
    }
}

/// Fetch a contract by its share token (no session required).
///
/// # Errors
///
/// Returns an error string if the token is unknown or the request fails.
pub async fn fetch_public_contract(token: &str) -> Result<PublicContract, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&public_contract_endpoint(token), "contract lookup").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        unavailable()
    }
}
