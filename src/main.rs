#![windows_subsystem = "windows"]
//! Ripple Tiles - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use eframe::egui;
use ripple_tiles::app::App;
use ripple_tiles::constants::*;
use ripple_tiles::settings::Settings;
use ripple_tiles::utils;
use tracing::info;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "ripple-tiles.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ripple_tiles=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = utils::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Ripple Tiles starting");

    let settings = Settings::load(&data_dir);
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => egui::vec2(w, h),
        _ => egui::vec2(960.0, 640.0),
    };

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size)
        .with_min_inner_size([320.0, 240.0])
        .with_title(APP_NAME);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, settings)))),
    )
}
