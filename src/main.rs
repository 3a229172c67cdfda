#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use dice_roller::config::Config;
use dice_roller::App;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;
    use dice_roller::strings::Strings;
    use tracing_subscriber::EnvFilter;

    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    tracing::info!(?config, "starting");

    let title = Strings::for_locale(config.locale()).app_name();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([360.0, 640.0])
            .with_min_inner_size([240.0, 320.0]),
        follow_system_theme: true,
        ..Default::default()
    };
    eframe::run_native(
        title,
        native_options,
        Box::new(move |cc| Box::new(App::new(cc, &config))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Panics and tracing events end up in the browser console:
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = Config::default();
    tracing::info!(?config, "starting");

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let start_result = eframe::WebRunner::new()
            .start(
                "the_canvas_id",
                web_options,
                Box::new(move |cc| Box::new(App::new(cc, &config))),
            )
            .await;
        if let Err(err) = start_result {
            tracing::error!(?err, "failed to start eframe");
        }
    });
}
