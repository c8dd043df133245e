//! UI Components
//!
//! Leptos components for the login and dashboard panels.

mod login_form;
mod title_bar;
mod vm_tree;
mod vm_panel;

pub use login_form::LoginForm;
pub use title_bar::TitleBar;
pub use vm_tree::VmTree;
pub use vm_panel::VmPanelView;
