//! Frontend Models
//!
//! Data structures matching the panel server's JSON.

use serde::{Deserialize, Serialize};

/// VM record as listed by `GET /vms`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vm {
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// `GET /vms` response body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VmList {
    pub user: String,
    pub vms: Vec<Vm>,
}

/// Updated VM state returned by a control action or pushed by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VmStatus {
    pub name: String,
    pub status: String,
}

impl From<&Vm> for VmStatus {
    fn from(vm: &Vm) -> Self {
        Self {
            name: vm.name.clone(),
            status: vm.status.clone(),
        }
    }
}

/// Power action accepted by `/control_vm`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VmAction {
    Start,
    Stop,
    Restart,
}

impl VmAction {
    pub const ALL: [VmAction; 3] = [VmAction::Start, VmAction::Stop, VmAction::Restart];

    pub fn label(self) -> &'static str {
        match self {
            VmAction::Start => "Start",
            VmAction::Stop => "Stop",
            VmAction::Restart => "Restart",
        }
    }
}

/// Reply to a control action: either an error message or the updated VM.
///
/// `Error` is listed first so a body carrying an `error` field never
/// decodes as a status update.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ControlReply {
    Error { error: String },
    Updated(VmStatus),
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Serialize)]
pub struct LoginArgs<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlArgs {
    pub vm: String,
    pub action: VmAction,
}

// ========================
// Push Channel Frames
// ========================

pub const EVENT_VM_UPDATE: &str = "vm_update";
pub const EVENT_CONTROL_VM: &str = "control_vm";

/// Push channel frame: `{"event": <name>, "data": <payload>}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushEnvelope {
    pub event: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Decoded server-to-client push event
#[derive(Debug, Clone, PartialEq)]
pub enum PushEvent {
    VmUpdate(ControlReply),
    Unknown(String),
}

impl PushEnvelope {
    pub fn control(args: &ControlArgs) -> Result<Self, serde_json::Error> {
        Ok(Self {
            event: EVENT_CONTROL_VM.to_string(),
            data: serde_json::to_value(args)?,
        })
    }

    pub fn into_event(self) -> Result<PushEvent, serde_json::Error> {
        match self.event.as_str() {
            EVENT_VM_UPDATE => Ok(PushEvent::VmUpdate(serde_json::from_value(self.data)?)),
            _ => Ok(PushEvent::Unknown(self.event)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vm_list_defaults_missing_tags() {
        let body = json!({
            "user": "admin",
            "vms": [
                { "name": "web1", "status": "running", "tags": ["prod", "frontend"] },
                { "name": "scratch", "status": "stopped", "vmid": 104 }
            ]
        });
        let list: VmList = serde_json::from_value(body).unwrap();
        assert_eq!(list.user, "admin");
        assert_eq!(list.vms[0].tags, vec!["prod", "frontend"]);
        assert!(list.vms[1].tags.is_empty());
    }

    #[test]
    fn test_control_args_wire_shape() {
        let args = ControlArgs { vm: "web1".into(), action: VmAction::Restart };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({ "vm": "web1", "action": "restart" })
        );
    }

    #[test]
    fn test_control_reply_error_wins() {
        let reply: ControlReply =
            serde_json::from_value(json!({ "error": "VM web9 not found" })).unwrap();
        assert_eq!(reply, ControlReply::Error { error: "VM web9 not found".into() });

        let reply: ControlReply =
            serde_json::from_value(json!({ "name": "web1", "status": "stopped" })).unwrap();
        assert_eq!(
            reply,
            ControlReply::Updated(VmStatus { name: "web1".into(), status: "stopped".into() })
        );
    }

    #[test]
    fn test_push_envelope_events() {
        let frame = r#"{"event":"vm_update","data":{"name":"db1","status":"running"}}"#;
        let envelope: PushEnvelope = serde_json::from_str(frame).unwrap();
        assert_eq!(
            envelope.into_event().unwrap(),
            PushEvent::VmUpdate(ControlReply::Updated(VmStatus {
                name: "db1".into(),
                status: "running".into(),
            }))
        );

        let envelope: PushEnvelope = serde_json::from_str(r#"{"event":"hello"}"#).unwrap();
        assert_eq!(envelope.into_event().unwrap(), PushEvent::Unknown("hello".into()));
    }

    #[test]
    fn test_control_envelope() {
        let args = ControlArgs { vm: "web1".into(), action: VmAction::Stop };
        let envelope = PushEnvelope::control(&args).unwrap();
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({ "event": "control_vm", "data": { "vm": "web1", "action": "stop" } })
        );
    }
}
