//! Site Behaviors Entry Point

mod app;
mod behaviors;
mod config;
mod context;
mod dom;
mod logging;
mod store;

#[cfg(feature = "landing")]
mod commands;
#[cfg(feature = "landing")]
mod error;

#[cfg(feature = "directory")]
mod base_path;
#[cfg(feature = "directory")]
mod filter;
#[cfg(feature = "directory")]
mod models;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
