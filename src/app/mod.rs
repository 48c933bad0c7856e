//! Application module
//!
//! A single window with the control form on the left, optional statistics on the
//! right and the plot filling the rest. Rendering only happens when the form is
//! submitted; the plot keeps showing the last successful view in between.

mod plot;
pub mod settings;
pub mod state;
mod ui_panels;

use crate::app::settings::Settings;
use crate::app::state::AppState;
use crate::data::Track;
use eframe::egui;
use std::sync::Arc;

/// Main application structure
pub struct RunningPathViewerApp {
    /// Application state (track, controls, last view)
    state: AppState,
}

impl RunningPathViewerApp {
    pub fn new(settings: &Settings, track: Arc<Track>, _cc: &eframe::CreationContext<'_>) -> Self {
        let mut state = AppState::new(settings, track);

        if settings.no_initial_render {
            tracing::info!("Waiting for the first \"Update Plot\"");
        } else {
            state.trigger_render();
        }

        Self { state }
    }
}

impl eframe::App for RunningPathViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        profiling::finish_frame!();

        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                if ui_panels::controls_panel(ui, &mut self.state) {
                    self.state.trigger_render();
                }
            });

        if self.state.ui_settings.show_stats {
            egui::SidePanel::right("statistics")
                .default_width(240.0)
                .show(ctx, |ui| {
                    ui_panels::statistics_panel(ui, &self.state);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| match &self.state.view {
            Some(view) => plot::show_view(ui, view, &self.state.ui_settings),
            None => plot::empty_plot(ui),
        });
    }
}
