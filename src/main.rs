//! Landing Page Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod models;
mod theme;

use app::HomePage;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(HomePage);
}
