//! Profile registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached by signed-in users without a profile. Saving the profile updates
//! the session, after which the route gate sends the user to the dashboard.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::session::SessionState;
use crate::util::forms::validate_profile_draft;

/// Initial form values taken from what the identity provider already knows.
pub fn prefill(user: Option<&User>) -> (String, String) {
    match user {
        Some(user) => (user.name.clone(), user.email.clone().unwrap_or_default()),
        None => (String::new(), String::new()),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let (initial_name, initial_email) = session.with_untracked(|s| prefill(s.user.as_ref()));

    let name = RwSignal::new(initial_name);
    let organization = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let email = RwSignal::new(initial_email);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = match validate_profile_draft(&name.get(), &organization.get(), &address.get(), &email.get()) {
            Ok(draft) => draft,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Saving profile...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_profile(&draft).await {
                Ok(profile) => {
                    info.set(String::new());
                    session.update(|s| s.set_profile(profile));
                }
                Err(e) => info.set(format!("Could not save profile: {e}")),
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (draft, session);
    };

    view! {
        <div class="register-page">
            <form class="register-form" on:submit=on_submit>
                <h1>"Set up your profile"</h1>
                <p class="register-form__hint">"This appears on every contract you send."</p>
                <label class="field">
                    <span>"Your name"</span>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Organization"</span>
                    <input
                        type="text"
                        prop:value=move || organization.get()
                        on:input=move |ev| organization.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Business address"</span>
                    <textarea
                        rows="3"
                        prop:value=move || address.get()
                        on:input=move |ev| address.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="field">
                    <span>"Billing email"</span>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    "Save profile"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="form-message">{move || info.get()}</p>
                </Show>
            </form>
        </div>
    }
}
