//! Roadmap Studio
//!
//! A local-first project planning tool with a modal creation flow for
//! roadmaps and milestones.

mod app;
mod components;
mod constants;
mod state;
mod utils;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Roadmap Studio")
                .with_inner_size(LogicalSize::new(1100.0, 760.0))
                .with_resizable(true),
        )
        .with_menu(None); // Disable default menu bar

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
