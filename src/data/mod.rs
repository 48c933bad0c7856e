//! GPS Track Data Module
//!
//! This module turns a single GPX recording into the sequence of points that the
//! viewer draws. It has no UI dependencies so every step can be tested on its own.
//!
//! # Overview
//!
//! - Raw GPX data is flattened once into an immutable [`Track`] of timestamped [`Sample`]s
//! - A [`TimeWindow`] keeps the samples whose time of day lies inside `HH:MM..=HH:MM`
//! - The visible subset is rotated about its own bounding-box midpoint
//! - [`ViewBounds`] are derived from the rotated points and narrowed by the zoom factor
//!
//! # Usage Example
//!
//! ```rust
//! use running_path_viewer::data::{Track, ViewParameters, render_view};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # /*
//! let track = Track::load("run.gpx")?;
//! # */
//! # let track = Track::default();
//! let mut params = ViewParameters::default();
//! params.set_rotation_degrees(45.0);
//!
//! match render_view(track.samples(), &params) {
//!     Ok(view) => println!("{} points, bounds {:?}", view.coordinates.len(), view.bounds),
//!     Err(e) => println!("Nothing to draw: {e}"),
//! }
//! # Ok(())
//! # }
//! ```

mod clock;
mod track;
mod view;

// Public API exports
pub use clock::{ClockTime, TimeWindow};
pub use track::{Sample, Track};
pub use view::{
    Coordinate, RenderedView, ViewBounds, ViewError, ViewParameters, center_of, filter_by_time,
    render_view, rotate_about, zoomed_bounds,
};

use std::path::PathBuf;

/// Error types for loading a track
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Track file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("GPX parsing error in {}: {source}", .path.display())]
    GpxParse {
        path: PathBuf,
        source: gpx::errors::GpxError,
    },
}

impl DataError {
    /// Classify an IO failure while opening or reading `path`
    pub(crate) fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        let path = path.to_path_buf();
        if source.kind() == std::io::ErrorKind::NotFound {
            DataError::FileNotFound { path }
        } else {
            DataError::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_classified() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = DataError::from_io(std::path::Path::new("missing.gpx"), source);
        assert!(matches!(err, DataError::FileNotFound { .. }));
        assert!(err.to_string().contains("missing.gpx"));
    }

    #[test]
    fn test_other_io_errors_are_kept() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = DataError::from_io(std::path::Path::new("locked.gpx"), source);
        assert!(matches!(err, DataError::Io { .. }));
    }
}
