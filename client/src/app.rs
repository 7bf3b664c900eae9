//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns every shared context: the reactive session, the gate feed the
//! session is mirrored into, the contract inventory and the route table.
//! Gated pages are wrapped in [`AuthGate`]; public pages are mounted bare.
//! The not-found fallback is gated too, since unknown paths are member-only.

use gate::{GatePaths, RouteTable, Session, SessionFeed};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::hooks::use_location;
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_gate::AuthGate;
use crate::components::nav_bar::NavBar;
use crate::pages::{
    client_view::ClientViewPage, clients::ClientsPage, contract_new::ContractNewPage, contracts::ContractsPage,
    dashboard::DashboardPage, home::HomePage, login::LoginPage, payment_view::PaymentViewPage,
    register::RegisterPage, web3_login::Web3LoginPage,
};
use crate::state::contracts::ContractsState;
use crate::state::session::{FeedHandle, SessionState};
use crate::util::session_sync::{install_feed_bridge, start_resolution};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let feed: FeedHandle = StoredValue::new_local(SessionFeed::new(Session::default()));
    let contracts = RwSignal::new(ContractsState::default());

    provide_context(session);
    provide_context(feed);
    provide_context(contracts);
    provide_context(RouteTable::standard());
    provide_context(GatePaths::default());

    // Effects only run in the browser; SSR renders gated pages as loading.
    Effect::new(move || start_resolution(session));

    view! {
        <Title text="Quill"/>

        <Router>
            <SessionSync/>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| view! { <AuthGate>"Page not found."</AuthGate> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("client"), ParamSegment("token")) view=ClientViewPage/>
                    <Route path=(StaticSegment("payment"), ParamSegment("token")) view=PaymentViewPage/>
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <AuthGate><LoginPage/></AuthGate> }
                    />
                    <Route
                        path=StaticSegment("web3-login")
                        view=|| view! { <AuthGate><Web3LoginPage/></AuthGate> }
                    />
                    <Route
                        path=StaticSegment("register")
                        view=|| view! { <AuthGate><RegisterPage/></AuthGate> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <AuthGate><DashboardPage/></AuthGate> }
                    />
                    <Route
                        path=StaticSegment("contracts")
                        view=|| view! { <AuthGate><ContractsPage/></AuthGate> }
                    />
                    <Route
                        path=(StaticSegment("contracts"), StaticSegment("new"))
                        view=|| view! { <AuthGate><ContractNewPage/></AuthGate> }
                    />
                    <Route
                        path=StaticSegment("clients")
                        view=|| view! { <AuthGate><ClientsPage/></AuthGate> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// Mirrors session and location changes into the gate feed. Rendered inside
/// the router so the location is available.
#[component]
fn SessionSync() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let feed = expect_context::<FeedHandle>();
    let location = use_location();
    install_feed_bridge(session, feed, location.pathname);
}
