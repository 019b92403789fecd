//! Window and rendering module
//! 
//! This module opens the egg timer window and draws it from the application state.

pub mod app;
pub mod egg;

use tracing::info;

use crate::config::Config;
pub use app::EggTimerApp;

/// Title of the timer window
pub const WINDOW_TITLE: &str = "Egg timer";

/// Open the window and run the event loop until it is closed
pub fn run(config: Config) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([config.width, config.height]),
        ..Default::default()
    };

    info!("Opening {}x{} window", config.width, config.height);
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(EggTimerApp::new(cc, &config)))),
    )
}
