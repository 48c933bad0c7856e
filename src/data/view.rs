//! View transform: time filter, rotation about the bounding-box midpoint and zoomed bounds
//!
//! Latitude and longitude are treated as a flat plane. Degrees of longitude shrink
//! with latitude, so the rotation is only a local approximation of a real rotation.

use crate::data::{ClockTime, Sample, TimeWindow};
use std::ops::RangeInclusive;

/// A (latitude, longitude) pair in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Axis-aligned rendering window, derived for every render
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl ViewBounds {
    /// Smallest box containing every coordinate, `None` for an empty set
    pub fn enclosing(coordinates: &[Coordinate]) -> Option<Self> {
        let first = coordinates.first()?;
        let mut bounds = Self {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_lon: first.longitude,
            max_lon: first.longitude,
        };
        for c in &coordinates[1..] {
            bounds.min_lat = bounds.min_lat.min(c.latitude);
            bounds.max_lat = bounds.max_lat.max(c.latitude);
            bounds.min_lon = bounds.min_lon.min(c.longitude);
            bounds.max_lon = bounds.max_lon.max(c.longitude);
        }
        Some(bounds)
    }

    /// Midpoint of the box (not the centroid of the points)
    pub fn midpoint(&self) -> Coordinate {
        Coordinate::new(
            (self.max_lat + self.min_lat) / 2.0,
            (self.max_lon + self.min_lon) / 2.0,
        )
    }

    pub fn lat_range(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_range(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Shrink both ranges by `zoom` and place the result around `center`
    pub fn zoomed_about(&self, center: Coordinate, zoom: f64) -> Self {
        let range_lat = self.lat_range() / zoom;
        let range_lon = self.lon_range() / zoom;
        Self {
            min_lat: center.latitude - range_lat / 2.0,
            max_lat: center.latitude + range_lat / 2.0,
            min_lon: center.longitude - range_lon / 2.0,
            max_lon: center.longitude + range_lon / 2.0,
        }
    }
}

/// Error types for building a view
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewError {
    #[error("Invalid {field} time {value:?}, use HH:MM")]
    InvalidTimeFormat { field: &'static str, value: String },

    #[error("No samples between {start} and {end}")]
    EmptyView { start: ClockTime, end: ClockTime },

    #[error("Invalid zoom {0}, must be a positive number")]
    InvalidZoom(f64),
}

/// The user-controlled inputs of a render
#[derive(Clone, Debug, PartialEq)]
pub struct ViewParameters {
    /// Start of the time window, `HH:MM`
    pub start_time: String,
    /// End of the time window, `HH:MM`
    pub end_time: String,
    zoom: f64,
    rotation_degrees: f64,
}

impl ViewParameters {
    pub const ZOOM_RANGE: RangeInclusive<f64> = 1.0..=10.0;
    pub const ZOOM_STEP: f64 = 0.1;
    pub const ROTATION_RANGE: RangeInclusive<f64> = -180.0..=180.0;
    pub const ROTATION_STEP: f64 = 1.0;

    pub fn new(
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        zoom: f64,
        rotation_degrees: f64,
    ) -> Self {
        let mut params = Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            ..Self::default()
        };
        params.set_zoom(zoom);
        params.set_rotation_degrees(rotation_degrees);
        params
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }

    /// Set the zoom, clamped to [`Self::ZOOM_RANGE`]. Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(*Self::ZOOM_RANGE.start(), *Self::ZOOM_RANGE.end());
        }
    }

    /// Set the rotation, clamped to [`Self::ROTATION_RANGE`]. Non-finite values are ignored.
    pub fn set_rotation_degrees(&mut self, degrees: f64) {
        if degrees.is_finite() {
            self.rotation_degrees =
                degrees.clamp(*Self::ROTATION_RANGE.start(), *Self::ROTATION_RANGE.end());
        }
    }

    /// Parse both time fields into a window
    pub fn time_window(&self) -> Result<TimeWindow, ViewError> {
        let parse = |field: &'static str, value: &str| {
            ClockTime::parse(value).ok_or_else(|| ViewError::InvalidTimeFormat {
                field,
                value: value.to_string(),
            })
        };
        Ok(TimeWindow::new(
            parse("start", &self.start_time)?,
            parse("end", &self.end_time)?,
        ))
    }
}

impl Default for ViewParameters {
    fn default() -> Self {
        Self {
            start_time: ClockTime::START_OF_DAY.to_string(),
            end_time: ClockTime::END_OF_DAY.to_string(),
            zoom: 1.0,
            rotation_degrees: 0.0,
        }
    }
}

/// Result of a successful render, ready to hand to a plot
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedView {
    /// Rotated coordinates in recording order
    pub coordinates: Vec<Coordinate>,
    pub bounds: ViewBounds,
    /// Fixed point of the rotation, midpoint of the filtered set
    pub center: Coordinate,
    pub window: TimeWindow,
    pub zoom: f64,
    pub rotation_degrees: f64,
}

impl RenderedView {
    pub fn title(&self) -> String {
        format!(
            "Running Path (Zoom: {:.1}x, Rotation: {:.0}°)",
            self.zoom, self.rotation_degrees
        )
    }
}

/// Coordinates of the samples whose time of day lies inside `window`, in recording order
pub fn filter_by_time(samples: &[Sample], window: &TimeWindow) -> Vec<Coordinate> {
    samples
        .iter()
        .filter(|s| window.contains_timestamp(&s.timestamp))
        .map(Sample::coordinate)
        .collect()
}

/// Bounding-box midpoint of a coordinate set
pub fn center_of(coordinates: &[Coordinate]) -> Option<Coordinate> {
    ViewBounds::enclosing(coordinates).map(|b| b.midpoint())
}

/// Rotate every coordinate counter-clockwise by `degrees` about `center`
///
/// `lat' = dlat*cos - dlon*sin`, `lon' = dlat*sin + dlon*cos`
pub fn rotate_about(
    coordinates: &[Coordinate],
    center: Coordinate,
    degrees: f64,
) -> Vec<Coordinate> {
    let (sin_theta, cos_theta) = degrees.to_radians().sin_cos();
    coordinates
        .iter()
        .map(|c| {
            let lat_shifted = c.latitude - center.latitude;
            let lon_shifted = c.longitude - center.longitude;
            Coordinate::new(
                lat_shifted * cos_theta - lon_shifted * sin_theta + center.latitude,
                lat_shifted * sin_theta + lon_shifted * cos_theta + center.longitude,
            )
        })
        .collect()
}

/// Bounds of the rotated set shrunk by `zoom` around `center`
pub fn zoomed_bounds(
    rotated: &[Coordinate],
    center: Coordinate,
    zoom: f64,
) -> Option<ViewBounds> {
    ViewBounds::enclosing(rotated).map(|b| b.zoomed_about(center, zoom))
}

/// Filter, rotate and bound the samples for the given parameters
pub fn render_view(
    samples: &[Sample],
    params: &ViewParameters,
) -> Result<RenderedView, ViewError> {
    profiling::scope!("render_view");

    let window = params.time_window()?;
    let zoom = params.zoom();
    if !(zoom.is_finite() && zoom > 0.0) {
        return Err(ViewError::InvalidZoom(zoom));
    }

    let filtered = filter_by_time(samples, &window);
    let empty = || ViewError::EmptyView {
        start: window.start,
        end: window.end,
    };
    let center = center_of(&filtered).ok_or_else(empty)?;
    let coordinates = rotate_about(&filtered, center, params.rotation_degrees());
    let bounds = zoomed_bounds(&coordinates, center, zoom).ok_or_else(empty)?;

    Ok(RenderedView {
        coordinates,
        bounds,
        center,
        window,
        zoom,
        rotation_degrees: params.rotation_degrees(),
    })
}
