//! Dashboard Configuration
//!
//! The hosting page injects settings through meta tags:
//!
//! ```html
//! <meta name="vm-dashboard:update-mode" content="push">
//! <meta name="vm-dashboard:poll-interval-ms" content="5000">
//! ```
//!
//! Anything missing or unparsable keeps its default.

use leptos::prelude::document;

const META_PREFIX: &str = "vm-dashboard:";

/// How the detail panel's status is kept live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    Poll,
    Push,
}

impl UpdateMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "poll" | "polling" => Some(UpdateMode::Poll),
            "push" | "websocket" => Some(UpdateMode::Push),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Prefix for API paths; empty means same origin
    pub api_base: String,
    pub update_mode: UpdateMode,
    pub poll_interval_ms: u32,
    pub push_path: String,
    pub console_scheme: String,
    pub console_path: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            update_mode: UpdateMode::Poll,
            poll_interval_ms: 5_000,
            push_path: "/ws".to_string(),
            console_scheme: "https".to_string(),
            console_path: "/novnc".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Build from a key lookup (keys without the meta prefix)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(base) = get("api-base") {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(mode) = get("update-mode").and_then(|v| UpdateMode::parse(&v)) {
            config.update_mode = mode;
        }
        if let Some(ms) = get("poll-interval-ms").and_then(|v| v.parse::<u32>().ok()) {
            if ms > 0 {
                config.poll_interval_ms = ms;
            }
        }
        if let Some(path) = get("push-path") {
            config.push_path = with_leading_slash(&path);
        }
        if let Some(scheme) = get("console-scheme") {
            config.console_scheme = scheme.trim_end_matches("://").to_string();
        }
        if let Some(path) = get("console-path") {
            // "/" means the console lives at the host root
            let path = path.trim_end_matches('/');
            config.console_path = if path.is_empty() {
                String::new()
            } else {
                with_leading_slash(path)
            };
        }
        config
    }

    /// Read `<meta name="vm-dashboard:*">` tags from the current document
    pub fn from_document() -> Self {
        let doc = document();
        Self::from_lookup(|key| {
            let selector = format!("meta[name=\"{}{}\"]", META_PREFIX, key);
            doc.query_selector(&selector)
                .ok()
                .flatten()
                .and_then(|el| el.get_attribute("content"))
        })
    }

    /// Absolute-or-relative URL for an API path such as `/vms`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

fn with_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_no_meta() {
        let config = DashboardConfig::from_lookup(|_| None);
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.poll_interval_ms, 5_000);
        assert_eq!(config.update_mode, UpdateMode::Poll);
        assert_eq!(config.api_url("/vms"), "/vms");
    }

    #[test]
    fn test_overrides() {
        let config = DashboardConfig::from_lookup(lookup(&[
            ("api-base", "https://panel.example/"),
            ("update-mode", "Push"),
            ("poll-interval-ms", "2000"),
            ("push-path", "events"),
            ("console-scheme", "http://"),
            ("console-path", "/console/"),
        ]));
        assert_eq!(config.api_url("/vms"), "https://panel.example/vms");
        assert_eq!(config.update_mode, UpdateMode::Push);
        assert_eq!(config.poll_interval_ms, 2_000);
        assert_eq!(config.push_path, "/events");
        assert_eq!(config.console_scheme, "http");
        assert_eq!(config.console_path, "/console");
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let config = DashboardConfig::from_lookup(lookup(&[
            ("update-mode", "carrier-pigeon"),
            ("poll-interval-ms", "soon"),
            ("push-path", "   "),
        ]));
        assert_eq!(config.update_mode, UpdateMode::Poll);
        assert_eq!(config.poll_interval_ms, 5_000);
        assert_eq!(config.push_path, "/ws");

        let config = DashboardConfig::from_lookup(lookup(&[("poll-interval-ms", "0")]));
        assert_eq!(config.poll_interval_ms, 5_000);
    }

    #[test]
    fn test_root_console_path() {
        let config = DashboardConfig::from_lookup(lookup(&[("console-path", "/")]));
        assert_eq!(config.console_path, "");
        assert_eq!(
            crate::panel::console_url(&config, "panel.lan", "web1"),
            "https://panel.lan/web1"
        );
    }
}
