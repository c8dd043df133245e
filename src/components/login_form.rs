//! Login Form Component

use leptos::prelude::*;

use crate::context::use_session;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

/// Username/password form; submits on button click or Enter
#[component]
pub fn LoginForm() -> impl IntoView {
    let session = use_session();
    let store = use_dashboard_store();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        session.login(username.get_untracked(), password.get_untracked());
    };

    view! {
        <div id="login-container" class="login-container">
            <form class="login-form" on:submit=on_submit>
                <h2>"Sign in"</h2>
                <input
                    id="username"
                    type="text"
                    placeholder="Username"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    id="password"
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit">"Login"</button>
                <p id="login-error" class="login-error">
                    {move || store.login_error().get().unwrap_or_default()}
                </p>
            </form>
        </div>
    }
}
