//! Route access gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a page-level view. On mount the gate subscribes a
//! [`GateController`] to the shared session feed; every session or location
//! change re-runs the decision procedure, and the resulting action picks
//! between a loading placeholder, nothing (while a redirect is in flight),
//! and the wrapped page.
//!
//! The controller lives in this component's owner, so unmounting the route
//! drops it and releases the feed subscription.

use gate::{Action, Gate, GateController, GatePaths, RouteRequirements, RouteTable};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::FeedHandle;

/// Gate a page on the current session.
///
/// Requirements default to the route table entry for the path the gate was
/// mounted on; `require_auth`, `require_profile` and `redirect_to` override
/// individual fields.
#[component]
pub fn AuthGate(
    children: ChildrenFn,
    #[prop(optional)] require_auth: Option<bool>,
    #[prop(optional)] require_profile: Option<bool>,
    #[prop(optional, into)] redirect_to: Option<String>,
) -> impl IntoView {
    let feed = expect_context::<FeedHandle>();
    let table = use_context::<RouteTable>().unwrap_or_default();
    let paths = use_context::<GatePaths>().unwrap_or_default();
    let location = use_location();
    let navigate = use_navigate();

    let action = RwSignal::new(Action::Loading);
    let controller = StoredValue::new_local(None::<GateController>);

    Effect::new(move || {
        if controller.with_value(Option::is_some) {
            return;
        }
        let mounted_path = location.pathname.get_untracked();
        let base = table.requirements_for(&mounted_path).unwrap_or_else(RouteRequirements::none);
        let requirements = RouteRequirements {
            require_auth: require_auth.unwrap_or(base.require_auth),
            require_profile: require_profile.unwrap_or(base.require_profile),
            redirect_to: redirect_to.clone().or(base.redirect_to),
        };
        let table = table.clone();
        let owned_path = mounted_path.clone();
        let lookup =
            move |path: &str| table.same_route(path, &owned_path).then(|| requirements.clone());

        let navigate = navigate.clone();
        let navigator = move |target: &str| navigate(target, NavigateOptions { replace: true, ..Default::default() });

        let on_action = move |next: &Action| {
            if action.with_untracked(|current| current != next) {
                action.set(next.clone());
            }
        };

        feed.with_value(|f| f.set_path(&mounted_path));
        let mounted = feed.with_value(|f| GateController::mount(f, Gate::new(paths.clone()), lookup, navigator, on_action));
        controller.set_value(Some(mounted));
    });

    move || match action.get() {
        Action::Loading => view! {
            <div class="gate-loading" aria-busy="true">
                <span class="gate-loading__spinner"></span>
                "Loading..."
            </div>
        }
        .into_any(),
        Action::Redirect(_) => ().into_any(),
        Action::Render => children().into_any(),
    }
}
