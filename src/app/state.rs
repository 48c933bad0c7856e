//! Application state management
//!
//! This module owns the loaded track, the live control values and the last
//! successfully rendered view.

use crate::app::settings::Settings;
use crate::data::{RenderedView, Track, ViewError, ViewParameters, render_view};
use std::sync::Arc;

/// Main application state
pub struct AppState {
    /// The recording loaded at startup, shared read-only by every render
    pub track: Arc<Track>,

    /// Current values of the form controls
    pub params: ViewParameters,

    /// Control values restored by "Reset"
    pub initial_params: ViewParameters,

    /// Last view that rendered successfully
    pub view: Option<RenderedView>,

    /// Problem reported by the last render, cleared on success
    pub last_error: Option<ViewError>,

    /// Current UI settings
    pub ui_settings: UiSettings,

    /// Statistics about the loaded track
    pub stats: Stats,
}

/// UI-specific settings that can be adjusted at runtime
#[derive(Clone)]
pub struct UiSettings {
    /// Path line width in pixels
    pub line_width: f32,

    /// Point marker radius in pixels
    pub marker_radius: f32,

    /// Show statistics panel
    pub show_stats: bool,
}

/// Statistics about the loaded track
#[derive(Default)]
pub struct Stats {
    /// Number of timestamped samples
    pub total_points: usize,

    /// Points skipped because they had no timestamp
    pub untimed_points: usize,

    /// Path length in meters
    pub total_distance: f64,

    /// First and last recording time, formatted
    pub time_span: Option<(String, String)>,
}

impl AppState {
    /// Create new application state from CLI settings and an already loaded track
    pub fn new(settings: &Settings, track: Arc<Track>) -> Self {
        let params = settings.view_parameters();
        let ui_settings = UiSettings {
            line_width: settings.line_width,
            marker_radius: settings.marker_radius,
            show_stats: true,
        };
        let stats = Stats::from_track(&track);

        Self {
            track,
            initial_params: params.clone(),
            params,
            view: None,
            last_error: None,
            ui_settings,
            stats,
        }
    }

    /// Render the current control values. On failure the previous view is kept.
    pub fn trigger_render(&mut self) {
        profiling::scope!("trigger_render");
        tracing::debug!(
            "Render requested: {}-{}, zoom {}, rotation {}",
            self.params.start_time,
            self.params.end_time,
            self.params.zoom(),
            self.params.rotation_degrees()
        );

        match render_view(self.track.samples(), &self.params) {
            Ok(view) => {
                tracing::info!(
                    "Rendered {} of {} points ({})",
                    view.coordinates.len(),
                    self.track.len(),
                    view.window
                );
                self.view = Some(view);
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!("Keeping previous view: {e}");
                self.last_error = Some(e);
            }
        }
    }

    /// Restore the controls to their startup values without rendering
    pub fn reset_controls(&mut self) {
        self.params = self.initial_params.clone();
    }
}

impl Stats {
    pub fn from_track(track: &Track) -> Self {
        Self {
            total_points: track.len(),
            untimed_points: track.untimed_points(),
            total_distance: track.total_distance(),
            time_span: track
                .time_span()
                .map(|(first, last)| (format_timestamp(&first), format_timestamp(&last))),
        }
    }

    /// Format distance as human-readable string
    pub fn format_distance(&self) -> String {
        let km = self.total_distance / 1000.0;
        if km < 1.0 {
            format!("{:.0} m", self.total_distance)
        } else if km < 100.0 {
            format!("{:.2} km", km)
        } else {
            format!("{:.0} km", km)
        }
    }

    /// Format point count with thousands separators
    pub fn format_points(&self) -> String {
        format_number_with_commas(self.total_points)
    }
}

/// `YYYY-MM-DD HH:MM:SS` in the timestamp's own offset
fn format_timestamp(timestamp: &time::OffsetDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        timestamp.year(),
        u8::from(timestamp.month()),
        timestamp.day(),
        timestamp.hour(),
        timestamp.minute(),
        timestamp.second()
    )
}

/// Helper to format numbers with comma separators
fn format_number_with_commas(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
