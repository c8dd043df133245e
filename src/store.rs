//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Vm, VmList, VmStatus};
use crate::panel::{apply_status, VmPanel};
use crate::theme::Theme;

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Set once a protected fetch or login succeeds
    pub logged_in: bool,
    /// User name reported by `GET /vms`
    pub user: String,
    /// Last full listing; the tree is rebuilt whenever this changes
    pub vms: Vec<Vm>,
    /// VM shown in the detail panel
    pub panel: Option<VmPanel>,
    /// Inline message under the login form
    pub login_error: Option<String>,
    pub theme: Theme,
}

impl DashboardState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Switch to the dashboard panel
pub fn store_enter_dashboard(store: &DashboardStore) {
    store.login_error().set(None);
    store.logged_in().set(true);
}

/// Replace user and VM listing after a full load
pub fn store_set_listing(store: &DashboardStore, list: VmList) {
    store.user().set(list.user);
    store.vms().set(list.vms);
}

/// Show a VM in the detail panel
pub fn store_show_panel(store: &DashboardStore, panel: VmPanel) {
    store.panel().set(Some(panel));
}

/// Name of the VM currently in the detail panel, without tracking
pub fn store_displayed_name(store: &DashboardStore) -> Option<String> {
    store
        .panel()
        .with_untracked(|panel| panel.as_ref().map(|p| p.name.clone()))
}

/// Apply a status update; no-op unless the panel shows that VM
pub fn store_apply_status(store: &DashboardStore, update: &VmStatus) -> bool {
    let mut panel = store.panel().get_untracked();
    if !apply_status(&mut panel, update) {
        return false;
    }
    store.panel().set(panel);
    true
}

pub fn store_set_login_error(store: &DashboardStore, message: &str) {
    store.login_error().set(Some(message.to_string()));
}
