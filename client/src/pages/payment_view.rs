//! Token-addressed payment page.
//!
//! Payment is collected by the external provider; this page shows what is
//! owed and where the contract stands.

#[cfg(test)]
#[path = "payment_view_test.rs"]
mod payment_view_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::{ContractStatus, format_amount};
use crate::pages::client_view::{PublicLookup, track_token};

/// Status line shown above the amount.
pub fn payment_notice(status: ContractStatus) -> &'static str {
    match status {
        ContractStatus::Draft => "This contract has not been sent yet.",
        ContractStatus::Sent => "Sign the contract before paying.",
        ContractStatus::Signed => "Payment is due.",
        ContractStatus::Paid => "Paid in full. Thank you!",
        ContractStatus::Void => "This contract was voided and cannot be paid.",
    }
}

#[component]
pub fn PaymentViewPage() -> impl IntoView {
    let (token, lookup) = track_token();
    let contract_href = move || format!("/client/{}", token.get());

    view! {
        <section class="payment-page">
            {move || match lookup.get() {
                PublicLookup::Loading => view! { <p>"Loading payment details..."</p> }.into_any(),
                PublicLookup::Failed(message) => view! { <p class="form-message">{message}</p> }.into_any(),
                PublicLookup::Found(contract) => view! {
                    <div class="payment-card">
                        <h1>{contract.title}</h1>
                        <p class="payment-card__notice">{payment_notice(contract.status)}</p>
                        <p class="payment-card__amount">
                            {format_amount(contract.amount_cents, &contract.currency)}
                        </p>
                        <p class="payment-card__payee">"Payable to " {contract.freelancer_name}</p>
                    </div>
                }
                .into_any(),
            }}
            <a class="payment-page__back" href=contract_href>"View contract"</a>
        </section>
    }
}
