//! Inventory Frontend Entry Point

mod config;
mod persist;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(config::log_level());
    mount_to_body(App);
}
