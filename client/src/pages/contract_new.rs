//! New-contract form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::ClientSummary;
use crate::util::forms::validate_contract_draft;

#[component]
pub fn ContractNewPage() -> impl IntoView {
    let navigate = use_navigate();

    let clients = RwSignal::new(Vec::<ClientSummary>::new());
    let title = RwSignal::new(String::new());
    let client_id = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let currency = RwSignal::new("USD".to_owned());
    let due_date = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_clients().await {
                Ok(list) => clients.set(list),
                Err(e) => info.set(format!("Could not load clients: {e}")),
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = match validate_contract_draft(
            &title.get(),
            &client_id.get(),
            &amount.get(),
            &currency.get(),
            &due_date.get(),
        ) {
            Ok(draft) => draft,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating contract...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_contract(&draft).await {
                    Ok(_) => navigate("/contracts", leptos_router::NavigateOptions::default()),
                    Err(e) => {
                        info.set(format!("Could not create contract: {e}"));
                        busy.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        let _ = (draft, &navigate);
    };

    view! {
        <section class="contract-new-page">
            <form class="contract-form" on:submit=on_submit>
                <h1>"New contract"</h1>
                <label class="field">
                    <span>"Title"</span>
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Client"</span>
                    <select on:change=move |ev| client_id.set(event_target_value(&ev))>
                        <option value="">"Choose a client"</option>
                        <For each=move || clients.get() key=|c| c.id.clone() let:client>
                            <option value={client.id}>{client.name}</option>
                        </For>
                    </select>
                </label>
                <Show when=move || clients.with(Vec::is_empty)>
                    <p class="field__hint">
                        "No clients yet. " <a href="/clients">"Add one first."</a>
                    </p>
                </Show>
                <div class="field-row">
                    <label class="field">
                        <span>"Amount"</span>
                        <input
                            type="text"
                            inputmode="decimal"
                            placeholder="1250.00"
                            prop:value=move || amount.get()
                            on:input=move |ev| amount.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field field--narrow">
                        <span>"Currency"</span>
                        <input
                            type="text"
                            maxlength="3"
                            prop:value=move || currency.get()
                            on:input=move |ev| currency.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="field">
                    <span>"Due date"</span>
                    <input
                        type="date"
                        prop:value=move || due_date.get()
                        on:input=move |ev| due_date.set(event_target_value(&ev))
                    />
                </label>
                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    "Create contract"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="form-message">{move || info.get()}</p>
                </Show>
            </form>
        </section>
    }
}
