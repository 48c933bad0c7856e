//! Plot renderer for the rotated path
//!
//! Draws the view with the egui painter: longitude on the x axis, latitude on the
//! y axis, limited to the view bounds.

use crate::app::state::UiSettings;
use crate::data::{Coordinate, RenderedView, ViewBounds};
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};

/// Number of grid divisions per axis
const GRID_DIVISIONS: usize = 5;

/// Space reserved around the plot area for title and tick labels
const MARGIN_LEFT: f32 = 80.0;
const MARGIN_RIGHT: f32 = 20.0;
const MARGIN_TOP: f32 = 40.0;
const MARGIN_BOTTOM: f32 = 50.0;

/// Smallest axis range used for screen mapping, in degrees
const MIN_AXIS_RANGE: f64 = 1e-9;

/// Maps view bounds onto a screen rectangle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotFrame {
    bounds: ViewBounds,
    rect: Rect,
}

impl PlotFrame {
    /// Axes with zero range (a single point, a straight line) are widened around their middle
    pub fn new(bounds: ViewBounds, rect: Rect) -> Self {
        let widen = |min: f64, max: f64| {
            if max - min >= MIN_AXIS_RANGE {
                (min, max)
            } else {
                let mid = (min + max) / 2.0;
                (mid - MIN_AXIS_RANGE / 2.0, mid + MIN_AXIS_RANGE / 2.0)
            }
        };
        let (min_lat, max_lat) = widen(bounds.min_lat, bounds.max_lat);
        let (min_lon, max_lon) = widen(bounds.min_lon, bounds.max_lon);
        Self {
            bounds: ViewBounds {
                min_lat,
                max_lat,
                min_lon,
                max_lon,
            },
            rect,
        }
    }

    /// Screen position of a coordinate. North is up.
    pub fn to_screen(&self, c: Coordinate) -> Pos2 {
        let b = &self.bounds;
        let tx = (c.longitude - b.min_lon) / b.lon_range();
        let ty = (c.latitude - b.min_lat) / b.lat_range();
        Pos2::new(
            self.rect.left() + tx as f32 * self.rect.width(),
            self.rect.bottom() - ty as f32 * self.rect.height(),
        )
    }

    /// Evenly spaced longitude ticks with their screen x
    fn lon_ticks(&self) -> impl Iterator<Item = (f64, f32)> + '_ {
        (0..=GRID_DIVISIONS).map(move |i| {
            let t = i as f64 / GRID_DIVISIONS as f64;
            let lon = self.bounds.min_lon + t * self.bounds.lon_range();
            (lon, self.rect.left() + t as f32 * self.rect.width())
        })
    }

    /// Evenly spaced latitude ticks with their screen y
    fn lat_ticks(&self) -> impl Iterator<Item = (f64, f32)> + '_ {
        (0..=GRID_DIVISIONS).map(move |i| {
            let t = i as f64 / GRID_DIVISIONS as f64;
            let lat = self.bounds.min_lat + t * self.bounds.lat_range();
            (lat, self.rect.bottom() - t as f32 * self.rect.height())
        })
    }
}

/// Placeholder shown until the first successful render
pub fn empty_plot(ui: &mut Ui) {
    ui.centered_and_justified(|ui| {
        ui.label("Press \"Update Plot\" to draw the path");
    });
}

/// Draw the path as a connected line with point markers
pub fn show_view(ui: &mut Ui, view: &RenderedView, settings: &UiSettings) {
    profiling::scope!("show_view");

    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let outer = response.rect;
    let plot_rect = Rect::from_min_max(
        outer.min + Vec2::new(MARGIN_LEFT, MARGIN_TOP),
        outer.max - Vec2::new(MARGIN_RIGHT, MARGIN_BOTTOM),
    );
    if plot_rect.width() <= 0.0 || plot_rect.height() <= 0.0 {
        return;
    }

    let frame = PlotFrame::new(view.bounds, plot_rect);
    let visuals = ui.visuals();
    let text_color = visuals.text_color();
    let grid_stroke = Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color);
    let tick_font = FontId::proportional(11.0);

    painter.text(
        Pos2::new(outer.center().x, outer.top() + MARGIN_TOP / 2.0),
        Align2::CENTER_CENTER,
        view.title(),
        FontId::proportional(16.0),
        text_color,
    );

    // Grid and tick labels
    for (lon, x) in frame.lon_ticks() {
        painter.line_segment(
            [Pos2::new(x, plot_rect.top()), Pos2::new(x, plot_rect.bottom())],
            grid_stroke,
        );
        painter.text(
            Pos2::new(x, plot_rect.bottom() + 4.0),
            Align2::CENTER_TOP,
            format!("{lon:.5}"),
            tick_font.clone(),
            text_color,
        );
    }
    for (lat, y) in frame.lat_ticks() {
        painter.line_segment(
            [Pos2::new(plot_rect.left(), y), Pos2::new(plot_rect.right(), y)],
            grid_stroke,
        );
        painter.text(
            Pos2::new(plot_rect.left() - 4.0, y),
            Align2::RIGHT_CENTER,
            format!("{lat:.5}"),
            tick_font.clone(),
            text_color,
        );
    }
    painter.rect_stroke(plot_rect, 0.0, Stroke::new(1.0, text_color), StrokeKind::Inside);

    painter.text(
        Pos2::new(plot_rect.center().x, outer.bottom() - 4.0),
        Align2::CENTER_BOTTOM,
        "Longitude",
        FontId::proportional(13.0),
        text_color,
    );
    painter.text(
        Pos2::new(outer.left() + 4.0, plot_rect.top() - 4.0),
        Align2::LEFT_BOTTOM,
        "Latitude",
        FontId::proportional(13.0),
        text_color,
    );

    // Path, clipped to the zoomed bounds
    let color = Color32::from_rgb(70, 130, 220);
    let clipped = painter.with_clip_rect(plot_rect);
    let screen_points: Vec<Pos2> = view
        .coordinates
        .iter()
        .map(|c| frame.to_screen(*c))
        .collect();

    // Draw the polyline if we have at least 2 points
    if screen_points.len() >= 2 {
        clipped.add(egui::Shape::line(
            screen_points.clone(),
            Stroke::new(settings.line_width, color),
        ));
    }
    for point in screen_points {
        clipped.circle_filled(point, settings.marker_radius, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_bounds() -> ViewBounds {
        ViewBounds {
            min_lat: 0.0,
            max_lat: 1.0,
            min_lon: 10.0,
            max_lon: 12.0,
        }
    }

    #[test]
    fn test_corners_map_to_rect() {
        let rect = Rect::from_min_max(Pos2::new(100.0, 50.0), Pos2::new(300.0, 250.0));
        let frame = PlotFrame::new(unit_bounds(), rect);

        // South-west is bottom-left, north-east is top-right
        assert_eq!(frame.to_screen(Coordinate::new(0.0, 10.0)), rect.left_bottom());
        assert_eq!(frame.to_screen(Coordinate::new(1.0, 12.0)), rect.right_top());
        assert_eq!(frame.to_screen(Coordinate::new(0.5, 11.0)), rect.center());
    }

    #[test]
    fn test_degenerate_bounds_map_to_center() {
        let rect = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(200.0, 100.0));
        let point = Coordinate::new(47.3, 8.5);
        let bounds = ViewBounds {
            min_lat: point.latitude,
            max_lat: point.latitude,
            min_lon: point.longitude,
            max_lon: point.longitude,
        };
        let frame = PlotFrame::new(bounds, rect);
        let pos = frame.to_screen(point);
        assert!(pos.x.is_finite() && pos.y.is_finite());
        assert!((pos.x - 100.0).abs() < 1.0);
        assert!((pos.y - 50.0).abs() < 1.0);
    }

    #[test]
    fn test_ticks_span_axes() {
        let rect = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(100.0, 100.0));
        let frame = PlotFrame::new(unit_bounds(), rect);

        let lon: Vec<(f64, f32)> = frame.lon_ticks().collect();
        assert_eq!(lon.len(), GRID_DIVISIONS + 1);
        assert_eq!(lon.first(), Some(&(10.0, 0.0)));
        assert_eq!(lon.last(), Some(&(12.0, 100.0)));

        let lat: Vec<(f64, f32)> = frame.lat_ticks().collect();
        assert_eq!(lat.first(), Some(&(0.0, 100.0)));
        assert_eq!(lat.last(), Some(&(1.0, 0.0)));
    }
}
