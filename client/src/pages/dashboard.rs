//! Member dashboard: contract pipeline and money totals.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing route for signed-in members. Loads the contract inventory on
//! mount and shows per-status counts plus outstanding and collected amounts
//! grouped by currency.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::net::types::{ContractStatus, format_amount};
use crate::pages::contracts::load_contracts;
use crate::state::contracts::{ContractsState, summarize, with_status};
use crate::state::session::SessionState;

/// Render a currency map as display lines, or a zero line when empty.
pub fn money_lines(amounts: &BTreeMap<String, i64>) -> Vec<String> {
    if amounts.is_empty() {
        return vec!["0.00".to_owned()];
    }
    amounts.iter().map(|(currency, cents)| format_amount(*cents, currency)).collect()
}

/// Dashboard heading for the signed-in member.
pub fn greeting(organization: Option<&str>) -> String {
    match organization.map(str::trim).filter(|o| !o.is_empty()) {
        Some(name) => format!("Welcome back, {name}"),
        None => "Welcome back".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let contracts = expect_context::<RwSignal<ContractsState>>();

    Effect::new(move || load_contracts(contracts));

    let heading = move || greeting(session.with(SessionState::organization_label).as_deref());
    let totals = Memo::new(move |_| contracts.with(|s| summarize(&s.items)));
    let awaiting = move || contracts.with(|s| with_status(&s.items, ContractStatus::Signed));

    view! {
        <section class="dashboard-page">
            <h1>{heading}</h1>
            <Show when=move || contracts.with(|s| s.error.is_some())>
                <p class="form-message">{move || contracts.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <div class="dashboard-stats">
                <StatCard label="Drafts" value=Signal::derive(move || totals.with(|t| t.drafts))/>
                <StatCard
                    label="Awaiting signature"
                    value=Signal::derive(move || totals.with(|t| t.awaiting_signature))
                />
                <StatCard
                    label="Awaiting payment"
                    value=Signal::derive(move || totals.with(|t| t.awaiting_payment))
                />
                <StatCard label="Paid" value=Signal::derive(move || totals.with(|t| t.paid))/>
            </div>
            <div class="dashboard-money">
                <MoneyCard
                    label="Outstanding"
                    lines=Signal::derive(move || totals.with(|t| money_lines(&t.outstanding)))
                />
                <MoneyCard
                    label="Collected"
                    lines=Signal::derive(move || totals.with(|t| money_lines(&t.collected)))
                />
            </div>
            <h2>"Waiting on payment"</h2>
            <ul class="dashboard-list">
                <For each=awaiting key=|c| c.id.clone() let:contract>
                    <li>
                        <span>{contract.title}</span>
                        " · "
                        <span>{contract.client_name}</span>
                        " · "
                        <span>{format_amount(contract.amount_cents, &contract.currency)}</span>
                    </li>
                </For>
            </ul>
            <a class="button button--primary" href="/contracts/new">"New contract"</a>
        </section>
    }
}

#[component]
fn StatCard(label: &'static str, value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{move || value.get()}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}

#[component]
fn MoneyCard(label: &'static str, lines: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <div class="money-card">
            <span class="money-card__label">{label}</span>
            <For each=move || lines.get() key=|line| line.clone() let:line>
                <span class="money-card__value">{line}</span>
            </For>
        </div>
    }
}
