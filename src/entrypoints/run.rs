use super::metadata::log_version_info;
use super::profiling::setup_logging;
use crate::app::RunningPathViewerApp;
use crate::app::settings::Settings;
use crate::data::{DataError, Track};
use std::sync::Arc;

/// Errors that stop the program before or while the window is running
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Failed to load track: {0}")]
    Load(#[from] DataError),

    #[error("Failed to run the window: {0}")]
    Window(#[from] eframe::Error),
}

/// Native entry point. The track is loaded before the window opens; a load
/// failure ends the program without showing the window.
pub fn native_main() -> Result<(), StartupError> {
    setup_logging();
    log_version_info();

    let settings = Settings::from_cli();
    let track = Arc::new(Track::load(&settings.gpx_file)?);
    if track.is_empty() {
        tracing::warn!(
            "{} has no timestamped points, every view will be empty",
            settings.gpx_file.display()
        );
    }

    let title = format!(
        "Running Path Viewer - {}",
        settings
            .gpx_file
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
    );
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Ok(Box::new(RunningPathViewerApp::new(&settings, track, cc)))),
    )?;
    Ok(())
}
