//! Client directory with an inline add form.

use leptos::prelude::*;

use crate::net::types::ClientSummary;
use crate::util::forms::validate_client_draft;

#[component]
pub fn ClientsPage() -> impl IntoView {
    let clients = RwSignal::new(Vec::<ClientSummary>::new());
    let loading = RwSignal::new(true);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let organization = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_clients().await {
                Ok(list) => clients.set(list),
                Err(e) => info.set(format!("Could not load clients: {e}")),
            }
            loading.set(false);
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = match validate_client_draft(&name.get(), &email.get(), &organization.get()) {
            Ok(draft) => draft,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Saving client...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_client(&draft).await {
                Ok(client) => {
                    clients.update(|list| list.push(client));
                    name.set(String::new());
                    email.set(String::new());
                    organization.set(String::new());
                    info.set(String::new());
                }
                Err(e) => info.set(format!("Could not save client: {e}")),
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = draft;
    };

    view! {
        <section class="clients-page">
            <h1>"Clients"</h1>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading clients..."</p> }
            >
                <Show
                    when=move || !clients.with(Vec::is_empty)
                    fallback=move || view! { <p class="empty">"No clients yet."</p> }
                >
                    <ul class="client-list">
                        <For each=move || clients.get() key=|c| c.id.clone() let:client>
                            <li class="client-list__item">
                                <strong>{client.name}</strong>
                                <span>{client.email}</span>
                                <span class="client-list__org">{client.organization.unwrap_or_default()}</span>
                            </li>
                        </For>
                    </ul>
                </Show>
            </Show>
            <form class="client-form" on:submit=on_submit>
                <h2>"Add a client"</h2>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="billing@client.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Organization (optional)"
                    prop:value=move || organization.get()
                    on:input=move |ev| organization.set(event_target_value(&ev))
                />
                <button class="button" type="submit" disabled=move || busy.get()>
                    "Add client"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="form-message">{move || info.get()}</p>
                </Show>
            </form>
        </section>
    }
}
