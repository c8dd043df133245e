//! Status Updater
//!
//! Keeps the detail panel's status text live, either by polling `GET /vms`
//! on a fixed interval or through a WebSocket push channel. Both paths end
//! in `store_apply_status`, which ignores updates for VMs not on display.

use gloo_timers::callback::Interval;
use leptos::prelude::window;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};

use crate::commands;
use crate::config::DashboardConfig;
use crate::context::handle_control_reply;
use crate::error::{ApiError, ApiResult};
use crate::models::{ControlArgs, PushEnvelope, PushEvent, VmAction, VmList, VmStatus};
use crate::store::{store_apply_status, store_displayed_name, DashboardStore};

// ========================
// Polling
// ========================

/// Status to apply after a poll, if the displayed VM is still listed
pub fn poll_update(displayed: Option<&str>, list: &VmList) -> Option<VmStatus> {
    let name = displayed?;
    list.vms.iter().find(|vm| vm.name == name).map(VmStatus::from)
}

/// Start the poll timer. The returned handle must be kept alive.
pub fn start_polling(store: DashboardStore, config: DashboardConfig) -> Interval {
    web_sys::console::log_1(
        &format!("[POLL] Refreshing every {}ms", config.poll_interval_ms).into(),
    );
    Interval::new(config.poll_interval_ms, move || {
        // Nothing to refresh while the panel is empty
        let Some(name) = store_displayed_name(&store) else {
            return;
        };
        let config = config.clone();
        spawn_local(async move {
            match commands::list_vms(&config).await {
                Ok(list) => {
                    if let Some(update) = poll_update(Some(&name), &list) {
                        store_apply_status(&store, &update);
                    }
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("[POLL] Refresh failed: {}", e).into());
                }
            }
        });
    })
}

// ========================
// Push Channel
// ========================

/// `ws://` or `wss://` URL for the push path, following the page scheme
pub fn push_url(protocol: &str, host: &str, path: &str) -> String {
    let scheme = if protocol.trim_end_matches(':') == "https" { "wss" } else { "ws" };
    format!("{}://{}{}", scheme, host, path)
}

/// Decode one text frame and apply it
fn dispatch_frame(store: &DashboardStore, text: &str) {
    let event = serde_json::from_str::<PushEnvelope>(text).and_then(PushEnvelope::into_event);
    match event {
        Ok(PushEvent::VmUpdate(reply)) => handle_control_reply(store, reply),
        Ok(PushEvent::Unknown(name)) => {
            web_sys::console::log_1(&format!("[PUSH] Ignoring event {}", name).into());
        }
        Err(e) => {
            web_sys::console::warn_1(&format!("[PUSH] Bad frame: {}", e).into());
        }
    }
}

/// Open WebSocket plus the callbacks bound to it
pub struct PushChannel {
    ws: WebSocket,
    _on_open: Closure<dyn FnMut(Event)>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_error: Closure<dyn FnMut(Event)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
}

impl PushChannel {
    pub fn open(store: DashboardStore, config: &DashboardConfig) -> ApiResult<Self> {
        let location = window().location();
        let protocol = location.protocol().unwrap_or_default();
        let host = location
            .host()
            .map_err(|e| ApiError::Channel(format!("no page host: {:?}", e)))?;
        let url = push_url(&protocol, &host, &config.push_path);

        let ws = WebSocket::new(&url)
            .map_err(|e| ApiError::Channel(format!("open {} failed: {:?}", url, e)))?;

        let on_open = Closure::wrap(Box::new(move |_e: Event| {
            web_sys::console::log_1(&"[PUSH] Connected".into());
        }) as Box<dyn FnMut(Event)>);
        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));

        let on_message = Closure::wrap(Box::new(move |e: MessageEvent| {
            match e.data().as_string() {
                Some(text) => dispatch_frame(&store, &text),
                None => web_sys::console::warn_1(&"[PUSH] Ignoring binary frame".into()),
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        // WebSocket error events carry no message
        let on_error = Closure::wrap(Box::new(move |_e: Event| {
            web_sys::console::error_1(&"[PUSH] Connection error".into());
        }) as Box<dyn FnMut(Event)>);
        ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        // No reconnect; a reload opens a fresh channel
        let on_close = Closure::wrap(Box::new(move |e: CloseEvent| {
            web_sys::console::warn_1(&format!("[PUSH] Closed (code {})", e.code()).into());
        }) as Box<dyn FnMut(CloseEvent)>);
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));

        Ok(Self {
            ws,
            _on_open: on_open,
            _on_message: on_message,
            _on_error: on_error,
            _on_close: on_close,
        })
    }

    /// Emit a `control_vm` event. The result arrives as a `vm_update` event.
    pub fn send_control(&self, vm: &str, action: VmAction) -> ApiResult<()> {
        let envelope = PushEnvelope::control(&ControlArgs {
            vm: vm.to_string(),
            action,
        })?;
        let frame = serde_json::to_string(&envelope)?;
        self.ws
            .send_with_str(&frame)
            .map_err(|e| ApiError::Channel(format!("send failed: {:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Vm;

    fn listing() -> VmList {
        VmList {
            user: "admin".into(),
            vms: vec![
                Vm { name: "web1".into(), status: "stopped".into(), tags: vec!["prod".into()] },
                Vm { name: "db1".into(), status: "running".into(), tags: vec![] },
            ],
        }
    }

    #[test]
    fn test_poll_without_panel_yields_nothing() {
        assert_eq!(poll_update(None, &listing()), None);
    }

    #[test]
    fn test_poll_for_unlisted_vm_yields_nothing() {
        assert_eq!(poll_update(Some("web9"), &listing()), None);
    }

    #[test]
    fn test_poll_applies_changed_status() {
        let update = poll_update(Some("web1"), &listing()).unwrap();
        assert_eq!(update, VmStatus { name: "web1".into(), status: "stopped".into() });

        let mut panel = Some(crate::panel::VmPanel { name: "web1".into(), status: "running".into() });
        assert!(crate::panel::apply_status(&mut panel, &update));
        assert_eq!(panel.unwrap().status, "stopped");
    }

    #[test]
    fn test_push_url_follows_page_scheme() {
        assert_eq!(push_url("https:", "panel.lan", "/ws"), "wss://panel.lan/ws");
        assert_eq!(push_url("http:", "localhost:5000", "/ws"), "ws://localhost:5000/ws");
    }
}
