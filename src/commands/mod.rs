//! HTTP Command Wrappers
//!
//! Frontend bindings to the panel server's JSON API, organized by domain.

mod session;
mod vm;

// Re-export all public items
pub use session::*;
pub use vm::*;
