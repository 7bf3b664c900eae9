//! Token-addressed contract view for the freelancer's client.
//!
//! Public route: no session is needed. The token in the path is the only
//! credential, and the store resolves it to a read-only contract.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::net::types::{ContractStatus, PublicContract, format_amount};

/// Lookup state shared by the token-addressed pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicLookup {
    Loading,
    Found(PublicContract),
    Failed(String),
}

/// Fetch the contract behind `token` into `lookup`.
pub fn load_public_contract(token: String, lookup: RwSignal<PublicLookup>) {
    lookup.set(PublicLookup::Loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let next = match crate::net::api::fetch_public_contract(&token).await {
            Ok(contract) => PublicLookup::Found(contract),
            Err(e) => {
                log::warn!("public contract lookup failed: {e}");
                PublicLookup::Failed("This link is invalid or has expired.".to_owned())
            }
        };
        lookup.set(next);
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = token;
}

/// Read the `:token` path parameter and keep `lookup` in sync with it.
pub fn track_token() -> (Memo<String>, RwSignal<PublicLookup>) {
    let params = use_params_map();
    let token = Memo::new(move |_| params.with(|p| p.get("token").unwrap_or_default()));
    let lookup = RwSignal::new(PublicLookup::Loading);
    Effect::new(move || load_public_contract(token.get(), lookup));
    (token, lookup)
}

#[component]
pub fn ClientViewPage() -> impl IntoView {
    let (token, lookup) = track_token();
    let pay_href = move || format!("/payment/{}", token.get());

    view! {
        <section class="public-contract">
            {move || match lookup.get() {
                PublicLookup::Loading => view! { <p>"Loading contract..."</p> }.into_any(),
                PublicLookup::Failed(message) => view! { <p class="form-message">{message}</p> }.into_any(),
                PublicLookup::Found(contract) => {
                    let payable = contract.status == ContractStatus::Signed;
                    view! {
                        <article class="public-contract__body">
                            <h1>{contract.title}</h1>
                            <p class="public-contract__parties">
                                {contract.freelancer_name} " for " {contract.client_name}
                            </p>
                            <p class="public-contract__amount">
                                {format_amount(contract.amount_cents, &contract.currency)}
                            </p>
                            <p class="public-contract__due">
                                {contract.due_date.map(|d| format!("Due {d}")).unwrap_or_default()}
                            </p>
                            <pre class="public-contract__terms">{contract.body}</pre>
                            <p class="public-contract__status">{contract.status.label()}</p>
                            <Show when=move || payable>
                                <a class="button button--primary" href=pay_href>"Pay now"</a>
                            </Show>
                        </article>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
