//! Top navigation bar.
//!
//! Shows member links and the signed-in user's label. Public visitors see
//! the sign-in link instead.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::session_sync::sign_out;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let signed_in = move || session.with(|s| s.user.is_some());
    let member = move || session.with(SessionState::profile_complete);
    let label = move || session.with(SessionState::organization_label).unwrap_or_default();

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-bar__brand">"Quill"</a>
            <Show when=member>
                <div class="nav-bar__links">
                    <a href="/dashboard">"Dashboard"</a>
                    <a href="/contracts">"Contracts"</a>
                    <a href="/clients">"Clients"</a>
                </div>
            </Show>
            <div class="nav-bar__session">
                <Show
                    when=signed_in
                    fallback=|| view! { <a href="/login" class="nav-bar__login">"Sign in"</a> }
                >
                    <span class="nav-bar__user">{label}</span>
                    <button class="nav-bar__logout" on:click=move |_| sign_out(session)>
                        "Log out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
