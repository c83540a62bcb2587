#![cfg_attr(
    all(target_os = "windows", feature = "desktop"),
    windows_subsystem = "windows"
)]

use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(feature = "desktop"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use route_temp_planner::{
        cli::{self, Cli},
        config::Config,
        domain::init_local_offset,
    };

    // Reading the local offset is only sound while single-threaded.
    init_local_offset();

    let args = Cli::parse();
    init_tracing();
    cli::validate_args(&args)?;

    let config = Config::try_from_env()?;
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(cli::run(args, config))
}

#[cfg(feature = "desktop")]
fn main() {
    use dioxus::prelude::*;
    use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};
    use route_temp_planner::{app, domain::init_local_offset, util::version::APP_NAME};

    init_local_offset();
    init_tracing();

    // Wayland explicit-sync crashes on some drivers; fall back to GL unless the caller opts in.
    if std::env::var("WAYLAND_DISPLAY").is_ok() && std::env::var("WGPU_BACKEND").is_err() {
        std::env::set_var("WGPU_BACKEND", "gl");
    }

    // WebKit's DMABUF renderer opts into explicit sync; disable it unless the user overrides.
    if std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    LaunchBuilder::new()
        .with_cfg(
            DesktopConfig::new().with_window(WindowBuilder::new().with_title(APP_NAME)),
        )
        .launch(app::App);
}
