//! UI panels for the application
//!
//! This module provides the control form (time window, zoom, rotation and the
//! render trigger) and the statistics panel.

use crate::app::state::AppState;
use crate::data::ViewParameters;
use egui::{Color32, RichText, Ui};

/// Render the control form. Returns true when "Update Plot" was clicked.
pub fn controls_panel(ui: &mut Ui, state: &mut AppState) -> bool {
    ui.heading("View");
    ui.separator();

    ui.label("Start Time (HH:MM)");
    ui.text_edit_singleline(&mut state.params.start_time);
    ui.add_space(4.0);

    ui.label("End Time (HH:MM)");
    ui.text_edit_singleline(&mut state.params.end_time);
    ui.add_space(8.0);

    ui.label("Adjust Zoom");
    let mut zoom = state.params.zoom();
    if ui
        .add(
            egui::Slider::new(&mut zoom, ViewParameters::ZOOM_RANGE)
                .step_by(ViewParameters::ZOOM_STEP)
                .suffix("x"),
        )
        .changed()
    {
        state.params.set_zoom(zoom);
    }
    ui.add_space(4.0);

    ui.label("Adjust Rotation (Degrees)");
    let mut rotation = state.params.rotation_degrees();
    if ui
        .add(
            egui::Slider::new(&mut rotation, ViewParameters::ROTATION_RANGE)
                .step_by(ViewParameters::ROTATION_STEP)
                .suffix("°"),
        )
        .changed()
    {
        state.params.set_rotation_degrees(rotation);
    }
    ui.add_space(8.0);

    let mut triggered = false;
    ui.horizontal(|ui| {
        triggered = ui.button("Update Plot").clicked();
        if ui.button("Reset").clicked() {
            state.reset_controls();
        }
    });

    if let Some(error) = &state.last_error {
        ui.add_space(4.0);
        ui.label(RichText::new(format!("⚠ {error}")).color(Color32::RED));
        if state.view.is_some() {
            ui.label(RichText::new("Showing the previous view").small().weak());
        }
    }

    ui.add_space(8.0);
    ui.checkbox(&mut state.ui_settings.show_stats, "Show Statistics");

    ui.collapsing("Profiling", |ui| {
        crate::entrypoints::profiling::profiling_ui(ui);
    });

    triggered
}

/// Render the statistics panel
pub fn statistics_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Statistics");
    ui.separator();

    ui.label(
        RichText::new("📊 Track")
            .strong()
            .color(ui.visuals().strong_text_color()),
    );
    ui.add_space(4.0);

    stat_row(ui, "Points:", state.stats.format_points());
    if state.stats.untimed_points > 0 {
        stat_row(ui, "Skipped (no time):", state.stats.untimed_points.to_string());
    }
    stat_row(ui, "Distance:", state.stats.format_distance());
    if let Some((first, last)) = &state.stats.time_span {
        stat_row(ui, "From:", first.clone());
        stat_row(ui, "To:", last.clone());
    }

    ui.add_space(8.0);
    ui.separator();

    let Some(view) = &state.view else {
        ui.label(RichText::new("No view rendered yet").italics().weak());
        return;
    };

    ui.label(
        RichText::new("🗺 View")
            .strong()
            .color(ui.visuals().strong_text_color()),
    );
    ui.add_space(4.0);

    stat_row(ui, "Window:", view.window.to_string());
    stat_row(ui, "Visible points:", view.coordinates.len().to_string());
    ui.label(format!(
        "Center: {:.5}°, {:.5}°",
        view.center.latitude, view.center.longitude
    ));
    ui.label(format!(
        "Lat: {:.5}° to {:.5}°",
        view.bounds.min_lat, view.bounds.max_lat
    ));
    ui.label(format!(
        "Lon: {:.5}° to {:.5}°",
        view.bounds.min_lon, view.bounds.max_lon
    ));
}

fn stat_row(ui: &mut Ui, label: &str, value: String) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(value).strong());
        });
    });
}
