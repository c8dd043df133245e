//! Title Bar Component
//!
//! Welcome text plus the theme toggle and logout controls.

use leptos::prelude::*;

use crate::context::use_session;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};
use crate::theme::Theme;

#[component]
pub fn TitleBar() -> impl IntoView {
    let session = use_session();
    let store = use_dashboard_store();

    let theme_icon = move || match store.theme().get() {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    };

    view! {
        <header class="dashboard-titlebar">
            <span id="welcome" class="welcome">
                {move || format!("Welcome, {}", store.user().get())}
            </span>
            <div class="titlebar-controls">
                <button class="titlebar-btn theme" title="Toggle theme" on:click=move |_| session.toggle_theme()>
                    {theme_icon}
                </button>
                <button class="titlebar-btn logout" title="Logout" on:click=move |_| session.logout()>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
