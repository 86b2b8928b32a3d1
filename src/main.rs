#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

const DEFAULT_API_URL: &str = "http://127.0.0.1:8787";

/// Base URL of the OTP backend, set from the command line
static API_URL: OnceLock<String> = OnceLock::new();

/// Get the backend base URL (set from command line or default)
pub fn get_api_url() -> String {
    API_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Orbgate - OTP login portal
#[derive(Parser, Debug)]
#[command(name = "orbgate-desktop")]
#[command(about = "Orbgate - animated OTP login portal")]
struct Args {
    /// Base URL of the OTP backend
    #[arg(long)]
    api_url: Option<String>,

    /// Window title override
    #[arg(long)]
    title: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let _ = API_URL.set(args.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()));
    let title = args.title.unwrap_or_else(|| "Orbgate".to_string());

    tracing::info!("Starting portal against backend {}", get_api_url());

    // Wide window so the orb field has room to drift
    let window_width = 1080.0;
    let window_height = 760.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
