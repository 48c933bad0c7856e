//! Running Path Viewer
//!
//! Loads one GPX recording and shows it as a path that can be filtered by time of
//! day, rotated about its own midpoint and zoomed.

pub mod app;
pub mod data;
pub mod entrypoints;

pub use app::RunningPathViewerApp;
