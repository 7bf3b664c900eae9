//! Contract list page with a status filter.

#[cfg(test)]
#[path = "contracts_test.rs"]
mod contracts_test;

use leptos::prelude::*;

use crate::net::types::{ContractStatus, ContractSummary, format_amount};
use crate::state::contracts::{ContractsState, with_status};

/// Reload the contract inventory into `contracts`.
pub fn load_contracts(contracts: RwSignal<ContractsState>) {
    contracts.update(|s| {
        s.loading = true;
        s.error = None;
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_contracts().await;
        contracts.update(|s| {
            s.loading = false;
            match result {
                Ok(items) => s.items = items,
                Err(e) => {
                    log::warn!("contract list failed: {e}");
                    s.error = Some(e);
                }
            }
        });
    });
}

/// Parse the `<select>` value used by the status filter.
pub fn parse_status_filter(raw: &str) -> Option<ContractStatus> {
    match raw {
        "draft" => Some(ContractStatus::Draft),
        "sent" => Some(ContractStatus::Sent),
        "signed" => Some(ContractStatus::Signed),
        "paid" => Some(ContractStatus::Paid),
        "void" => Some(ContractStatus::Void),
        _ => None,
    }
}

/// CSS modifier for a status badge.
pub fn status_class(status: ContractStatus) -> &'static str {
    match status {
        ContractStatus::Draft => "status status--draft",
        ContractStatus::Sent => "status status--sent",
        ContractStatus::Signed => "status status--signed",
        ContractStatus::Paid => "status status--paid",
        ContractStatus::Void => "status status--void",
    }
}

#[component]
pub fn ContractsPage() -> impl IntoView {
    let contracts = expect_context::<RwSignal<ContractsState>>();
    let filter = RwSignal::new(None::<ContractStatus>);

    Effect::new(move || load_contracts(contracts));

    let visible = move || {
        contracts.with(|s| match filter.get() {
            Some(status) => with_status(&s.items, status),
            None => s.items.clone(),
        })
    };

    view! {
        <section class="contracts-page">
            <header class="page-header">
                <h1>"Contracts"</h1>
                <select on:change=move |ev| filter.set(parse_status_filter(&event_target_value(&ev)))>
                    <option value="all">"All"</option>
                    <option value="draft">"Draft"</option>
                    <option value="sent">"Sent"</option>
                    <option value="signed">"Signed"</option>
                    <option value="paid">"Paid"</option>
                    <option value="void">"Void"</option>
                </select>
                <a class="button button--primary" href="/contracts/new">"New contract"</a>
            </header>
            <Show when=move || contracts.with(|s| s.error.is_some())>
                <p class="form-message">{move || contracts.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !contracts.with(|s| s.loading)
                fallback=move || view! { <p>"Loading contracts..."</p> }
            >
                <Show
                    when=move || !visible().is_empty()
                    fallback=move || view! { <p class="empty">"No contracts yet."</p> }
                >
                    <table class="contract-table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Client"</th>
                                <th>"Amount"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=visible key=|c| c.id.clone() let:contract>
                                <ContractRow contract/>
                            </For>
                        </tbody>
                    </table>
                </Show>
            </Show>
        </section>
    }
}

#[component]
fn ContractRow(contract: ContractSummary) -> impl IntoView {
    view! {
        <tr>
            <td>{contract.title}</td>
            <td>{contract.client_name}</td>
            <td>{format_amount(contract.amount_cents, &contract.currency)}</td>
            <td><span class={status_class(contract.status)}>{contract.status.label()}</span></td>
        </tr>
    }
}
