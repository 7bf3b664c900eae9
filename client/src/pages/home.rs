//! Public landing page.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let member = move || session.with(SessionState::profile_complete);

    view! {
        <section class="home-page">
            <h1>"Contracts your clients can sign and pay in one place."</h1>
            <p class="home-page__lede">
                "Draft a contract, send the client a link, collect the signature and the payment."
            </p>
            <Show
                when=member
                fallback=|| {
                    view! {
                        <div class="home-page__actions">
                            <a class="button button--primary" href="/login">"Sign in with email"</a>
                            <a class="button" href="/web3-login">"Sign in with a wallet"</a>
                        </div>
                    }
                }
            >
                <div class="home-page__actions">
                    <a class="button button--primary" href="/dashboard">"Go to dashboard"</a>
                </div>
            </Show>
        </section>
    }
}
