//! VM Detail Panel Model

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::DashboardConfig;
use crate::models::{Vm, VmStatus};

/// Characters escaped in a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// What the detail panel is currently displaying
#[derive(Debug, Clone, PartialEq)]
pub struct VmPanel {
    pub name: String,
    pub status: String,
}

impl VmPanel {
    /// Locate `name` in a fresh listing
    pub fn from_listing(vms: &[Vm], name: &str) -> Option<Self> {
        vms.iter().find(|vm| vm.name == name).map(|vm| Self {
            name: vm.name.clone(),
            status: vm.status.clone(),
        })
    }
}

/// Apply a status update to the panel.
///
/// Only touches the status text, and only when the panel is showing the VM
/// the update names. Returns whether anything changed.
pub fn apply_status(panel: &mut Option<VmPanel>, update: &VmStatus) -> bool {
    match panel {
        Some(shown) if shown.name == update.name => {
            if shown.status == update.status {
                return false;
            }
            shown.status = update.status.clone();
            true
        }
        _ => false,
    }
}

/// Remote console link for a VM
pub fn console_url(config: &DashboardConfig, hostname: &str, vm_name: &str) -> String {
    format!(
        "{}://{}{}/{}",
        config.console_scheme,
        hostname,
        config.console_path,
        utf8_percent_encode(vm_name, PATH_SEGMENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(name: &str, status: &str) -> VmStatus {
        VmStatus { name: name.into(), status: status.into() }
    }

    fn showing(name: &str, status: &str) -> Option<VmPanel> {
        Some(VmPanel { name: name.into(), status: status.into() })
    }

    #[test]
    fn test_update_applies_to_displayed_vm() {
        let mut panel = showing("web1", "running");
        assert!(apply_status(&mut panel, &status("web1", "stopped")));
        assert_eq!(panel, showing("web1", "stopped"));
    }

    #[test]
    fn test_update_for_other_vm_is_noop() {
        let mut panel = showing("web2", "stopped");
        assert!(!apply_status(&mut panel, &status("web1", "stopped")));
        assert_eq!(panel, showing("web2", "stopped"));

        let mut empty = None;
        assert!(!apply_status(&mut empty, &status("web1", "running")));
        assert_eq!(empty, None);
    }

    #[test]
    fn test_same_status_reports_no_change() {
        let mut panel = showing("db1", "running");
        assert!(!apply_status(&mut panel, &status("db1", "running")));
    }

    #[test]
    fn test_from_listing() {
        let vms = vec![
            Vm { name: "web1".into(), status: "running".into(), tags: vec![] },
            Vm { name: "db1".into(), status: "stopped".into(), tags: vec!["prod".into()] },
        ];
        assert_eq!(VmPanel::from_listing(&vms, "db1"), showing("db1", "stopped"));
        assert_eq!(VmPanel::from_listing(&vms, "gone"), None);
    }

    #[test]
    fn test_console_url() {
        let config = DashboardConfig::default();
        assert_eq!(console_url(&config, "panel.lan", "web1"), "https://panel.lan/novnc/web1");
        assert_eq!(
            console_url(&config, "panel.lan", "lab vm/2"),
            "https://panel.lan/novnc/lab%20vm%2F2"
        );
    }
}
