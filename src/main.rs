#![allow(warnings)]
//! VM Dashboard Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod models;
mod panel;
mod store;
mod theme;
mod tree;
mod updater;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
