//! Wallet sign-in page.
//!
//! Wallet custody and signing belong to the hosted identity flow; this page
//! only hands the browser over to it. The provider redirects back to the app
//! once the wallet is linked.

use leptos::prelude::*;

use crate::net::api::WALLET_SIGN_IN_URL;

#[component]
pub fn Web3LoginPage() -> impl IntoView {
    let redirecting = RwSignal::new(false);

    let on_connect = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        redirecting.set(true);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(WALLET_SIGN_IN_URL) {
                    log::warn!("wallet sign-in redirect failed: {e:?}");
                    redirecting.set(false);
                }
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in with a wallet"</h1>
                <p class="login-card__subtitle">
                    "You will be asked to sign a message with your wallet. No transaction is sent."
                </p>
                <a href=WALLET_SIGN_IN_URL class="login-button" on:click=on_connect>
                    {move || if redirecting.get() { "Opening wallet..." } else { "Connect wallet" }}
                </a>
                <div class="login-divider"></div>
                <a href="/login" class="login-link">"Use an email code instead"</a>
            </div>
        </div>
    }
}
