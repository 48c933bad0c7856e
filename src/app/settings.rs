use crate::data::ViewParameters;
use crate::entrypoints::cli::parse_args;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Running Path Viewer - Filter a GPS track by time of day and view it rotated and zoomed
pub struct Settings {
    /// GPX file to load on startup
    #[clap(value_name = "GPX_FILE")]
    pub gpx_file: PathBuf,

    /// Initial start of the time window (HH:MM)
    #[clap(long, default_value = "00:00")]
    pub start: String,

    /// Initial end of the time window (HH:MM)
    #[clap(long, default_value = "23:59")]
    pub end: String,

    /// Initial zoom (range: 1-10)
    #[clap(short, long, default_value = "1.0")]
    pub zoom: f64,

    /// Initial rotation in degrees (range: -180-180)
    #[clap(short, long, default_value = "0", allow_hyphen_values = true)]
    pub rotation: f64,

    /// Wait for "Update Plot" instead of rendering once at startup
    #[clap(long, default_value = "false")]
    pub no_initial_render: bool,

    /// Path line width in pixels
    #[clap(long, default_value = "1.5")]
    pub line_width: f32,

    /// Point marker radius in pixels
    #[clap(long, default_value = "3.0")]
    pub marker_radius: f32,
}

impl Settings {
    /// Parse the command line, exiting with usage on error
    pub fn from_cli() -> Self {
        match parse_args::<Settings>() {
            Ok(args) => args,
            Err(e) => e.exit(),
        }
    }

    /// Initial control values, clamped to the control ranges
    pub fn view_parameters(&self) -> ViewParameters {
        ViewParameters::new(&self.start, &self.end, self.zoom, self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::try_parse_from(["running-path-viewer", "run.gpx"]).unwrap();
        assert_eq!(settings.gpx_file, PathBuf::from("run.gpx"));
        assert!(!settings.no_initial_render);
        assert_eq!(settings.view_parameters(), ViewParameters::default());
    }

    #[test]
    fn test_initial_view_is_clamped() {
        let settings = Settings::try_parse_from([
            "running-path-viewer",
            "run.gpx",
            "--start",
            "06:30",
            "--zoom",
            "25",
            "--rotation",
            "-200",
        ])
        .unwrap();
        let params = settings.view_parameters();
        assert_eq!(params.start_time, "06:30");
        assert_eq!(params.end_time, "23:59");
        assert_eq!(params.zoom(), 10.0);
        assert_eq!(params.rotation_degrees(), -180.0);
    }

    #[test]
    fn test_file_is_required() {
        assert!(Settings::try_parse_from(["running-path-viewer"]).is_err());
    }
}
