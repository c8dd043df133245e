//! VM Dashboard App
//!
//! Root component: builds the session, runs the session gate and switches
//! between the login and dashboard panels.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{LoginForm, TitleBar, VmPanelView, VmTree};
use crate::config::DashboardConfig;
use crate::context::DashboardSession;
use crate::store::{DashboardState, DashboardStateStoreFields};
use crate::theme::{apply_theme, load_theme};

#[component]
pub fn App() -> impl IntoView {
    let theme = load_theme();
    apply_theme(theme);

    let config = DashboardConfig::from_document();
    web_sys::console::log_1(&format!("[APP] Starting with {:?}", config).into());

    let store = Store::new(DashboardState::new(theme));
    let session = DashboardSession::new(store, config);

    // Provide store and session to all children
    provide_context(store);
    provide_context(session);

    // Skip the login form when a session already exists
    session.bootstrap();

    let logged_in = move || store.logged_in().get();

    view! {
        <div class="background" class:blurred=move || !logged_in()></div>

        <Show when=logged_in fallback=|| view! { <LoginForm /> }>
            <div id="dashboard" class="dashboard">
                <TitleBar />
                <div class="dashboard-body">
                    <VmTree />
                    <VmPanelView />
                </div>
            </div>
        </Show>
    }
}
