//! Dashboard Session
//!
//! Client session object provided via Leptos Context API. Owns the store,
//! the config, and the live-update handles, and carries the controller
//! actions the components call.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::config::{DashboardConfig, UpdateMode};
use crate::models::{ControlReply, VmAction};
use crate::panel::VmPanel;
use crate::store::{
    store_apply_status, store_enter_dashboard, store_set_listing, store_set_login_error,
    store_show_panel, DashboardStore, DashboardStateStoreFields,
};
use crate::theme::{apply_theme, save_theme};
use crate::updater::{start_polling, PushChannel};

pub const LOGIN_FAILED_MESSAGE: &str = "Invalid credentials.";

/// App-wide session handle provided via context
#[derive(Clone, Copy)]
pub struct DashboardSession {
    pub store: DashboardStore,
    config: StoredValue<DashboardConfig>,
    /// Open push channel (push mode only)
    channel: StoredValue<Option<PushChannel>, LocalStorage>,
    /// Poll timer (poll mode only)
    poller: StoredValue<Option<Interval>, LocalStorage>,
}

impl DashboardSession {
    pub fn new(store: DashboardStore, config: DashboardConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
            channel: StoredValue::new_local(None),
            poller: StoredValue::new_local(None),
        }
    }

    pub fn config(&self) -> DashboardConfig {
        self.config.get_value()
    }

    // ========================
    // Session Gate
    // ========================

    /// Enter the dashboard directly if the browser already has a session
    pub fn bootstrap(self) {
        spawn_local(async move {
            let config = self.config();
            if commands::probe_session(&config).await {
                web_sys::console::log_1(&"[SESSION] Existing session found".into());
                self.enter_dashboard();
            }
        });
    }

    pub fn login(self, username: String, password: String) {
        spawn_local(async move {
            let config = self.config();
            match commands::login(&config, &username, &password).await {
                Ok(()) => self.enter_dashboard(),
                Err(e) => {
                    web_sys::console::log_1(&format!("[SESSION] Login rejected: {}", e).into());
                    store_set_login_error(&self.store, LOGIN_FAILED_MESSAGE);
                }
            }
        });
    }

    /// Logout always ends in a full reload, which drops timers and sockets
    pub fn logout(self) {
        spawn_local(async move {
            if let Err(e) = commands::logout(&self.config()).await {
                web_sys::console::warn_1(&format!("[SESSION] Logout request failed: {}", e).into());
            }
            if let Err(e) = window().location().reload() {
                web_sys::console::error_1(&e);
            }
        });
    }

    fn enter_dashboard(self) {
        store_enter_dashboard(&self.store);
        self.load_dashboard();
    }

    /// Fetch the listing, rebuild the tree, start live updates
    fn load_dashboard(self) {
        spawn_local(async move {
            match commands::list_vms(&self.config()).await {
                Ok(list) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} VMs for {}", list.vms.len(), list.user).into(),
                    );
                    store_set_listing(&self.store, list);
                    self.start_updates();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Failed to load VMs: {}", e).into());
                }
            }
        });
    }

    // ========================
    // Status Updater
    // ========================

    fn updates_running(&self) -> bool {
        self.poller.with_value(|p| p.is_some()) || self.channel.with_value(|c| c.is_some())
    }

    fn start_updates(self) {
        if self.updates_running() {
            return;
        }
        let config = self.config();
        match config.update_mode {
            UpdateMode::Poll => {
                let interval = start_polling(self.store, config);
                self.poller.set_value(Some(interval));
            }
            UpdateMode::Push => match PushChannel::open(self.store, &config) {
                Ok(channel) => self.channel.set_value(Some(channel)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[PUSH] {}", e).into());
                }
            },
        }
    }

    // ========================
    // Detail Panel
    // ========================

    /// Re-fetch the listing and show `name` in the panel
    pub fn show_vm(self, name: String) {
        spawn_local(async move {
            match commands::list_vms(&self.config()).await {
                Ok(list) => match VmPanel::from_listing(&list.vms, &name) {
                    Some(panel) => store_show_panel(&self.store, panel),
                    None => web_sys::console::warn_1(
                        &format!("[PANEL] {} is no longer listed", name).into(),
                    ),
                },
                Err(e) => {
                    web_sys::console::error_1(&format!("[PANEL] Failed to load {}: {}", name, e).into());
                }
            }
        });
    }

    /// Send a power action over the push channel if one is open, else over HTTP
    pub fn control_vm(self, vm: String, action: VmAction) {
        let sent = self.channel.with_value(|channel| {
            channel.as_ref().map(|c| c.send_control(&vm, action))
        });
        match sent {
            Some(Ok(())) => {}
            Some(Err(e)) => alert_error(&e.to_string()),
            None => spawn_local(async move {
                match commands::control_vm(&self.config(), &vm, action).await {
                    Ok(reply) => handle_control_reply(&self.store, reply),
                    Err(e) => alert_error(&e.to_string()),
                }
            }),
        }
    }

    // ========================
    // Theme
    // ========================

    pub fn toggle_theme(&self) {
        let theme = self.store.theme().get_untracked().toggled();
        self.store.theme().set(theme);
        apply_theme(theme);
        save_theme(theme);
    }
}

/// Shared reply handling for HTTP and push control results
pub fn handle_control_reply(store: &DashboardStore, reply: ControlReply) {
    match reply {
        ControlReply::Error { error } => alert_error(&error),
        ControlReply::Updated(update) => {
            store_apply_status(store, &update);
        }
    }
}

fn alert_error(message: &str) {
    if window().alert_with_message(&format!("Error: {}", message)).is_err() {
        web_sys::console::error_1(&format!("[APP] Error: {}", message).into());
    }
}

/// Get the session from context
pub fn use_session() -> DashboardSession {
    use_context::<DashboardSession>().expect("DashboardSession should be provided")
}
