//! Track loading and parsing module

use crate::data::{Coordinate, DataError, Result};
use std::path::Path;
use time::OffsetDateTime;

/// One timestamped GPS fix
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: OffsetDateTime,
}

impl Sample {
    pub fn new(latitude: f64, longitude: f64, timestamp: OffsetDateTime) -> Self {
        Self {
            latitude,
            longitude,
            timestamp,
        }
    }

    /// Build a sample from a GPX waypoint, `None` if it has no timestamp
    pub fn from_waypoint(waypoint: &gpx::Waypoint) -> Option<Self> {
        let timestamp: OffsetDateTime = waypoint.time.clone()?.into();
        let point: geo::Point<f64> = waypoint.point();
        Some(Self::new(point.y(), point.x(), timestamp))
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// An immutable, flattened GPS recording in file order
#[derive(Clone, Debug, Default)]
pub struct Track {
    samples: Vec<Sample>,
    /// Points dropped while loading because they had no timestamp
    untimed_points: usize,
}

impl Track {
    /// Read and flatten a GPX file. Any failure aborts the whole load.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        profiling::scope!("Track::load");
        let path = path.as_ref();
        tracing::info!("Loading track from {}", path.display());

        let file = std::fs::File::open(path).map_err(|e| DataError::from_io(path, e))?;
        let reader = std::io::BufReader::new(file);
        let gpx = gpx::read(reader).map_err(|source| DataError::GpxParse {
            path: path.to_path_buf(),
            source,
        })?;

        let track = Self::from_gpx(&gpx);
        if track.untimed_points > 0 {
            tracing::debug!(
                "Skipped {} points without a timestamp",
                track.untimed_points
            );
        }
        tracing::info!(
            "Loaded {} samples from {} tracks",
            track.len(),
            gpx.tracks.len()
        );
        Ok(track)
    }

    /// Flatten tracks, then segments, then points, keeping only timestamped points
    pub fn from_gpx(gpx: &gpx::Gpx) -> Self {
        let waypoints = || {
            gpx.tracks
                .iter()
                .flat_map(|track| &track.segments)
                .flat_map(|segment| &segment.points)
        };

        let samples: Vec<Sample> = waypoints().filter_map(Sample::from_waypoint).collect();
        let untimed_points = waypoints().count() - samples.len();

        Self {
            samples,
            untimed_points,
        }
    }

    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self {
            samples,
            untimed_points: 0,
        }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn untimed_points(&self) -> usize {
        self.untimed_points
    }

    /// Earliest and latest timestamp in the recording
    pub fn time_span(&self) -> Option<(OffsetDateTime, OffsetDateTime)> {
        let first = self.samples.iter().map(|s| s.timestamp).min()?;
        let last = self.samples.iter().map(|s| s.timestamp).max()?;
        Some((first, last))
    }

    /// Length of the path through all samples in file order, in meters
    /// Uses Haversine formula for accurate distance calculation
    pub fn total_distance(&self) -> f64 {
        // Earth's radius in meters
        const EARTH_RADIUS_M: f64 = 6371000.0;

        self.samples
            .windows(2)
            .map(|pair| {
                let (p1, p2) = (&pair[0], &pair[1]);
                let lat1 = p1.latitude.to_radians();
                let lat2 = p2.latitude.to_radians();
                let delta_lat = (p2.latitude - p1.latitude).to_radians();
                let delta_lon = (p2.longitude - p1.longitude).to_radians();

                let a = (delta_lat / 2.0).sin().powi(2)
                    + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
                let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
                EARTH_RADIUS_M * c
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpx::{Gpx, Track as GpxTrack, TrackSegment, Waypoint};
    use std::io::Write;
    use time::macros::datetime;

    fn create_test_waypoint(lat: f64, lon: f64, time: Option<OffsetDateTime>) -> Waypoint {
        let mut waypoint = Waypoint::new(geo::Point::new(lon, lat));
        waypoint.time = time.map(Into::into);
        waypoint
    }

    fn segment_of(points: Vec<Waypoint>) -> TrackSegment {
        let mut segment = TrackSegment::default();
        segment.points = points;
        segment
    }

    const TEST_GPX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="tests" xmlns="http://www.topografix.com/GPX/1/1">
  <trk>
    <trkseg>
      <trkpt lat="51.5074" lon="-0.1278"><time>2024-05-01T08:00:00Z</time></trkpt>
      <trkpt lat="51.5076" lon="-0.1276"></trkpt>
      <trkpt lat="51.5078" lon="-0.1274"><time>2024-05-01T08:01:00Z</time></trkpt>
    </trkseg>
  </trk>
</gpx>
"#;

    #[test]
    fn test_flatten_order() {
        let mut gpx = Gpx::default();

        let mut first = GpxTrack::default();
        first.segments.push(segment_of(vec![
            create_test_waypoint(1.0, 1.0, Some(datetime!(2024-05-01 08:00 UTC))),
            create_test_waypoint(2.0, 2.0, Some(datetime!(2024-05-01 08:01 UTC))),
        ]));
        first.segments.push(segment_of(vec![create_test_waypoint(
            3.0,
            3.0,
            Some(datetime!(2024-05-01 08:02 UTC)),
        )]));

        let mut second = GpxTrack::default();
        second.segments.push(segment_of(vec![create_test_waypoint(
            4.0,
            4.0,
            Some(datetime!(2024-05-01 07:00 UTC)),
        )]));

        gpx.tracks.push(first);
        gpx.tracks.push(second);

        let track = Track::from_gpx(&gpx);
        let latitudes: Vec<f64> = track.samples().iter().map(|s| s.latitude).collect();
        assert_eq!(latitudes, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_untimed_points_are_dropped() {
        let mut gpx = Gpx::default();
        let mut track = GpxTrack::default();
        track.segments.push(segment_of(vec![
            create_test_waypoint(1.0, 2.0, None),
            create_test_waypoint(3.0, 4.0, Some(datetime!(2024-05-01 08:00 UTC))),
            create_test_waypoint(5.0, 6.0, None),
        ]));
        gpx.tracks.push(track);

        let track = Track::from_gpx(&gpx);
        assert_eq!(track.len(), 1);
        assert_eq!(track.untimed_points(), 2);
        assert_eq!(track.samples()[0].latitude, 3.0);
        assert_eq!(track.samples()[0].longitude, 4.0);
    }

    #[test]
    fn test_empty_gpx() {
        let track = Track::from_gpx(&Gpx::default());
        assert!(track.is_empty());
        assert_eq!(track.time_span(), None);
        assert_eq!(track.total_distance(), 0.0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TEST_GPX.as_bytes()).unwrap();

        let track = Track::load(file.path()).unwrap();
        assert_eq!(track.len(), 2);
        assert_eq!(track.untimed_points(), 1);
        assert_eq!(
            track.time_span(),
            Some((
                datetime!(2024-05-01 08:00 UTC),
                datetime!(2024-05-01 08:01 UTC)
            ))
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Track::load(dir.path().join("does-not-exist.gpx"));
        assert!(matches!(result, Err(DataError::FileNotFound { .. })));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is not a gpx document").unwrap();

        let result = Track::load(file.path());
        assert!(matches!(result, Err(DataError::GpxParse { .. })));
    }

    #[test]
    fn test_total_distance() {
        let track = Track::from_samples(vec![
            Sample::new(51.5074, -0.1278, datetime!(2024-05-01 08:00 UTC)),
            Sample::new(51.5076, -0.1276, datetime!(2024-05-01 08:01 UTC)),
            Sample::new(51.5078, -0.1274, datetime!(2024-05-01 08:02 UTC)),
        ]);

        let distance = track.total_distance();
        // The test points are very close together (around London)
        assert!(distance > 0.0);
        assert!(distance < 1000.0);
    }
}
