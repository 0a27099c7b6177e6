//! Curve approximations for shapes SVG cannot express directly.
//!
//! Cardinal splines become cubic Bézier chains; GDI-style arcs (bounding
//! box plus start/sweep angles) become elliptical-arc path commands.

use crate::error::{DrawError, Result};
use crate::model::{PathCmd, PathData};
use kurbo::{Point, Rect, Vec2};
use std::f64::consts::PI;

// ─── Splines ─────────────────────────────────────────────────────────────

/// Offset `v` scaled to `sqrt(10·t²·|v|)`, the tangent length used for
/// cardinal control points. Zero-length vectors stay zero.
fn tangent(v: Vec2, tension: f64) -> Vec2 {
    let len = v.hypot();
    if len == 0.0 {
        return Vec2::ZERO;
    }
    v / (len / (10.0 * tension * tension)).sqrt()
}

/// Left and right control points of interior point `pt` with neighbors
/// `l` and `r`.
fn control_points(l: Point, r: Point, pt: Point, tension: f64) -> (Point, Point) {
    let lv = l - r;
    (pt + tangent(lv, tension), pt + tangent(-lv, tension))
}

/// Control point of an end point `pt` leaning towards its only neighbor.
fn control_point(neighbor: Point, pt: Point, tension: f64) -> Point {
    pt + tangent(neighbor - pt, tension)
}

/// Convert a cardinal spline through `points` into a Bézier sequence
/// `[p0, c1, c2, p1, c1, c2, p2, …]`.
///
/// Open curves return the `segments` segments beginning at point `start`.
/// Closed curves ignore `start` and `segments`, use every point and end
/// back on the first point.
pub fn spline_to_bezier(
    points: &[Point],
    start: usize,
    segments: usize,
    closed: bool,
    tension: f64,
) -> Result<Vec<Point>> {
    if points.len() < 2 {
        return Err(DrawError::InvalidArgument(format!(
            "a curve needs at least 2 points, got {}",
            points.len()
        )));
    }
    let l = points.len() - 1;

    let mut res = Vec::with_capacity(3 * l + 4);
    res.push(points[0]);
    res.push(control_point(points[1], points[0], tension));
    for i in 1..l {
        let (left, right) = control_points(points[i - 1], points[i + 1], points[i], tension);
        res.push(left);
        res.push(points[i]);
        res.push(right);
    }
    res.push(control_point(points[l - 1], points[l], tension));
    res.push(points[l]);

    if closed {
        // right-hand control of p0 now also sees pl
        let (_, right0) = control_points(points[l], points[1], points[0], tension);
        res[1] = right0;

        let (left_l, right_l) = control_points(points[l - 1], points[0], points[l], tension);
        let n = res.len();
        res[n - 2] = left_l;
        res.push(right_l);

        let (left0, _) = control_points(points[l], points[1], points[0], tension);
        res.push(left0);
        res.push(points[0]);
        return Ok(res);
    }

    let end = start.checked_add(segments).filter(|end| *end <= l);
    let Some(end) = end else {
        return Err(DrawError::InvalidArgument(format!(
            "segments {start}..{} out of range for {} points",
            start.saturating_add(segments),
            points.len()
        )));
    };
    Ok(res[start * 3..=end * 3].to_vec())
}

// ─── Arcs ────────────────────────────────────────────────────────────────

/// Resolved endpoints of an arc on its ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub center: Point,
    pub radii: Vec2,
    /// Point at the start angle.
    pub start: Point,
    /// Point at start + sweep.
    pub end: Point,
    /// The arc spans more than half the ellipse.
    pub large_arc: bool,
}

/// Point at `angle` radians on the ellipse, y pointing down.
fn ellipse_point(center: Point, radii: Vec2, angle: f64) -> Point {
    Point::new(
        center.x + radii.x * angle.cos(),
        center.y + radii.y * angle.sin(),
    )
}

/// Resolve an arc given as a bounding box with start and sweep angles in
/// degrees, measured clockwise from the positive x axis.
pub fn arc_geometry(bounds: Rect, start_deg: f64, sweep_deg: f64) -> ArcGeometry {
    let center = bounds.center();
    let radii = Vec2::new(bounds.width() / 2.0, bounds.height() / 2.0);
    let a = start_deg.to_radians();
    let b = (start_deg + sweep_deg).to_radians();
    ArcGeometry {
        center,
        radii,
        start: ellipse_point(center, radii, a),
        end: ellipse_point(center, radii, b),
        large_arc: sweep_deg.abs() > 180.0,
    }
}

/// Build the path for an arc, or a pie wedge when `is_pie` is set.
///
/// The path runs from the larger angle to the smaller with a fixed sweep
/// flag, so the traversal direction never depends on the sign of
/// `sweep_deg`. Sweeps of a full turn or more are drawn as two half arcs.
pub fn arc_to_path(bounds: Rect, start_deg: f64, sweep_deg: f64, is_pie: bool) -> PathData {
    let geom = arc_geometry(bounds, start_deg, sweep_deg);
    let mut data = PathData::new();

    if sweep_deg.abs() >= 360.0 {
        let a = start_deg.to_radians();
        let first = ellipse_point(geom.center, geom.radii, a);
        let opposite = ellipse_point(geom.center, geom.radii, a + PI);
        data.push(PathCmd::MoveTo(first));
        for to in [opposite, first] {
            data.push(PathCmd::ArcTo {
                radii: geom.radii,
                x_rotation: 0.0,
                large_arc: false,
                sweep: true,
                to,
            });
        }
        if is_pie {
            data.push(PathCmd::LineTo(geom.center));
            data.push(PathCmd::Close);
        }
        return data;
    }

    let (from, to) = if sweep_deg > 0.0 {
        (geom.end, geom.start)
    } else {
        (geom.start, geom.end)
    };
    data.push(PathCmd::MoveTo(from));
    data.push(PathCmd::ArcTo {
        radii: geom.radii,
        x_rotation: 0.0,
        large_arc: geom.large_arc,
        sweep: false,
        to,
    });
    if is_pie {
        data.push(PathCmd::LineTo(geom.center));
        data.push(PathCmd::LineTo(from));
        data.push(PathCmd::Close);
    }
    data
}

/// Outward direction angle (radians) for an end cap placed at `at`,
/// arriving from `from`. Zero points up (−y); rotation is clockwise.
pub fn cap_angle(at: Point, from: Point) -> f64 {
    let d = at - from;
    d.x.atan2(-d.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn close(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn open_spline_has_three_points_per_segment() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 0.0),
            Point::new(30.0, 10.0),
        ];
        let bez = spline_to_bezier(&pts, 0, 3, false, 0.5).unwrap();
        assert_eq!(bez.len(), 1 + 3 * 3);
        assert_eq!(bez[0], pts[0]);
        assert_eq!(bez[3], pts[1]);
        assert_eq!(bez[6], pts[2]);
        assert_eq!(bez[9], pts[3]);
    }

    #[test]
    fn open_spline_subset() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 0.0),
            Point::new(30.0, 10.0),
        ];
        let bez = spline_to_bezier(&pts, 1, 1, false, 0.5).unwrap();
        assert_eq!(bez.len(), 4);
        assert_eq!(bez[0], pts[1]);
        assert_eq!(bez[3], pts[2]);
    }

    #[test]
    fn control_point_distance_follows_tension() {
        let pts = [Point::new(0.0, 0.0), Point::new(40.0, 0.0)];
        let bez = spline_to_bezier(&pts, 0, 1, false, 0.5).unwrap();
        // sqrt(10 * 0.25 * 40) = 10
        assert!(close(bez[1], Point::new(10.0, 0.0)));
        assert!(close(bez[2], Point::new(30.0, 0.0)));
    }

    #[test]
    fn closed_spline_returns_to_start() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let bez = spline_to_bezier(&pts, 0, 0, true, 0.5).unwrap();
        assert_eq!(bez.len(), 1 + 3 * pts.len());
        assert_eq!(bez[0], pts[0]);
        assert_eq!(*bez.last().unwrap(), pts[0]);
    }

    #[test]
    fn coincident_points_do_not_produce_nan() {
        let pts = [Point::new(5.0, 5.0), Point::new(5.0, 5.0)];
        let bez = spline_to_bezier(&pts, 0, 1, false, 0.5).unwrap();
        assert!(bez.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn spline_rejects_bad_input() {
        assert!(spline_to_bezier(&[Point::ORIGIN], 0, 0, false, 0.5).is_err());
        let pts = [Point::ORIGIN, Point::new(1.0, 1.0)];
        assert!(spline_to_bezier(&pts, 1, 1, false, 0.5).is_err());
    }

    #[test]
    fn quarter_arc_endpoints() {
        let bounds = Rect::from_origin_size((10.0, 20.0), (40.0, 20.0));
        let geom = arc_geometry(bounds, 0.0, 90.0);
        assert!(close(geom.start, Point::new(50.0, 30.0)));
        assert!(close(geom.end, Point::new(30.0, 40.0)));
        assert!(!geom.large_arc);

        let data = arc_to_path(bounds, 0.0, 90.0, false);
        match data.commands() {
            [PathCmd::MoveTo(m), PathCmd::ArcTo { to, radii, sweep, .. }] => {
                assert!(close(*m, geom.end));
                assert!(close(*to, geom.start));
                assert_eq!(*radii, Vec2::new(20.0, 10.0));
                assert!(!sweep);
            }
            other => panic!("unexpected path {other:?}"),
        }
    }

    #[test]
    fn large_sweep_sets_large_arc_flag() {
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(arc_geometry(bounds, 0.0, 270.0).large_arc);
        assert!(arc_geometry(bounds, 0.0, -200.0).large_arc);
        assert!(!arc_geometry(bounds, 45.0, 180.0).large_arc);
    }

    #[test]
    fn pie_closes_through_center() {
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        let data = arc_to_path(bounds, 0.0, 90.0, true);
        let cmds = data.commands();
        assert_eq!(cmds.len(), 5);
        assert_eq!(cmds[2], PathCmd::LineTo(Point::new(5.0, 5.0)));
        assert_eq!(cmds[4], PathCmd::Close);
    }

    #[test]
    fn full_turn_is_two_half_arcs() {
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        let data = arc_to_path(bounds, 0.0, 360.0, false);
        let arcs = data
            .commands()
            .iter()
            .filter(|c| matches!(c, PathCmd::ArcTo { .. }))
            .count();
        assert_eq!(arcs, 2);
    }

    #[test]
    fn cap_angle_points_away_from_line() {
        // horizontal line ending on the right: cap points +x
        let a = cap_angle(Point::new(10.0, 0.0), Point::new(0.0, 0.0));
        assert!((a - PI / 2.0).abs() < 1e-12);
        // vertical line ending at the top: cap points -y
        let a = cap_angle(Point::new(0.0, 0.0), Point::new(0.0, 10.0));
        assert!(a.abs() < 1e-12);
    }
}
