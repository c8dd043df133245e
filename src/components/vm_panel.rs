//! VM Detail Panel Component
//!
//! Name, live status, power controls and the console link for the
//! selected VM.

use leptos::prelude::*;

use crate::context::use_session;
use crate::models::VmAction;
use crate::panel::console_url;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn VmPanelView() -> impl IntoView {
    let session = use_session();
    let store = use_dashboard_store();
    let config = session.config();
    let hostname = window().location().hostname().unwrap_or_default();

    // Re-render the body only when a different VM is selected
    let shown_name = Memo::new(move |_| {
        store.panel().with(|panel| panel.as_ref().map(|p| p.name.clone()))
    });
    let status_text = move || {
        store
            .panel()
            .with(|panel| panel.as_ref().map(|p| p.status.clone()).unwrap_or_default())
    };

    view! {
        <section id="vm-panel" class="vm-panel">
            {move || match shown_name.get() {
                None => view! { <p class="vm-panel-empty">"Select a VM"</p> }.into_any(),
                Some(name) => {
                    let href = console_url(&config, &hostname, &name);
                    let buttons = VmAction::ALL
                        .into_iter()
                        .map(|action| {
                            let vm = name.clone();
                            view! {
                                <button
                                    class="vm-action"
                                    on:click=move |_| session.control_vm(vm.clone(), action)
                                >
                                    {action.label()}
                                </button>
                            }
                        })
                        .collect_view();
                    view! {
                        <h3>{name}</h3>
                        <p>"Status: " <span id="vm-status">{status_text}</span></p>
                        <div class="vm-actions">{buttons}</div>
                        <a class="vm-console" href=href target="_blank" rel="noopener">"Open noVNC"</a>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
