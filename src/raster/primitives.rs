//! Primitive rasterization functions.
//!
//! Each function returns the ordered pixel points of one primitive. All
//! arithmetic is integer; nothing here can fail.

use crate::geometry::Point;

// ============================================================================
// Line Rasterization
// ============================================================================

/// Rasterize a line segment using Bresenham's algorithm.
///
/// Returns the 8-connected path from `from` to `to`, both endpoints included.
/// Swapping the endpoints yields the same pixels in reverse order. Equal
/// endpoints yield a single point.
///
/// # Example
///
/// ```
/// use trueno_sketch::geometry::Point;
/// use trueno_sketch::raster::line;
///
/// let points = line(Point::new(0, 0), Point::new(3, 0));
/// assert_eq!(points.len(), 4);
/// assert_eq!(points[3], Point::new(3, 0));
/// ```
pub fn line(from: Point, to: Point) -> Vec<Point> {
    // Bresenham breaks ties differently depending on the walking direction,
    // so always walk from the smaller endpoint.
    if to < from {
        let mut points = bresenham(to, from);
        points.reverse();
        points
    } else {
        bresenham(from, to)
    }
}

fn bresenham(from: Point, to: Point) -> Vec<Point> {
    let dx = (i64::from(to.x) - i64::from(from.x)).abs();
    let dy = (i64::from(to.y) - i64::from(from.y)).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx - dy;

    let mut points = Vec::with_capacity(dx.max(dy) as usize + 1);
    let mut x = from.x;
    let mut y = from.y;

    loop {
        points.push(Point::new(x, y));

        if x == to.x && y == to.y {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    points
}

// ============================================================================
// Triangle Rasterization
// ============================================================================

/// Rasterize a triangle outline as the edges `a→b`, `b→c`, `c→a`.
///
/// Shared vertices appear once per edge; nothing is deduplicated.
pub fn triangle(a: Point, b: Point, c: Point) -> Vec<Point> {
    let mut points = line(a, b);
    points.extend(line(b, c));
    points.extend(line(c, a));
    points
}

// ============================================================================
// Circle Rasterization
// ============================================================================

/// Rasterize a circle outline using the midpoint (Bresenham) algorithm.
///
/// One octant is walked with the decision variable `d = 3 - 2r` and every step
/// is mirrored into all eight octants, emitted together. Points on octant
/// boundaries appear more than once and no gap filling is done between
/// octants. A zero radius yields the center eight times. Points beyond the
/// `i32` range clamp to its bounds.
pub fn circle(center: Point, radius: u32) -> Vec<Point> {
    let r = i64::from(radius);
    let steps = (radius / 2).min(MAX_RESERVED_STEPS) as usize + 2;
    let mut points = Vec::with_capacity(8 * steps);

    push_octants(center, 0, r, &mut points);
    if r == 0 {
        return points;
    }

    let mut x = 0;
    let mut y = r;
    let mut d = 3 - 2 * r;

    while y >= x {
        x += 1;
        if d > 0 {
            y -= 1;
            d += 4 * (x - y) + 10;
        } else {
            d += 4 * x + 6;
        }
        push_octants(center, x, y, &mut points);
    }

    points
}

/// Upper bound on octant steps reserved up front for a circle.
const MAX_RESERVED_STEPS: u32 = 1 << 16;

/// Push the eight reflections of the offset `(x, y)` around `center`.
#[inline]
fn push_octants(center: Point, x: i64, y: i64, points: &mut Vec<Point>) {
    points.extend([
        center.offset_wide(x, y),
        center.offset_wide(-x, y),
        center.offset_wide(x, -y),
        center.offset_wide(-x, -y),
        center.offset_wide(y, x),
        center.offset_wide(-y, x),
        center.offset_wide(y, -x),
        center.offset_wide(-y, -x),
    ]);
}

/// Radius of the circle centered on `center` passing through `edge`.
///
/// The Euclidean distance is rounded half up, clamped to `u32::MAX`.
pub fn radius_through(center: Point, edge: Point) -> u32 {
    (center.distance(edge) + 0.5).floor() as u32
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_line_horizontal() {
        let points = line(Point::new(0, 0), Point::new(5, 0));
        assert_eq!(
            points,
            pts(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)])
        );
    }

    #[test]
    fn test_line_vertical_upward() {
        let points = line(Point::new(2, 3), Point::new(2, -1));
        assert_eq!(points, pts(&[(2, 3), (2, 2), (2, 1), (2, 0), (2, -1)]));
    }

    #[test]
    fn test_line_diagonal() {
        let points = line(Point::new(10, 10), Point::new(13, 13));
        assert_eq!(points, pts(&[(10, 10), (11, 11), (12, 12), (13, 13)]));
    }

    #[test]
    fn test_line_shallow_slope() {
        let points = line(Point::new(0, 0), Point::new(2, 1));
        assert_eq!(points, pts(&[(0, 0), (1, 0), (2, 1)]));
    }

    #[test]
    fn test_line_reversed_tie_matches_forward() {
        let forward = line(Point::new(0, 0), Point::new(2, 1));
        let mut backward = line(Point::new(2, 1), Point::new(0, 0));
        assert_eq!(backward.first(), Some(&Point::new(2, 1)));
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_line_degenerate() {
        let points = line(Point::new(7, -3), Point::new(7, -3));
        assert_eq!(points, pts(&[(7, -3)]));
    }

    #[test]
    fn test_triangle_concatenates_edges() {
        let (a, b, c) = (Point::new(0, 0), Point::new(4, 0), Point::new(0, 3));
        let points = triangle(a, b, c);
        let expected: Vec<Point> = line(a, b)
            .into_iter()
            .chain(line(b, c))
            .chain(line(c, a))
            .collect();
        assert_eq!(points, expected);
        // Each vertex appears twice: end of one edge, start of the next.
        assert_eq!(points.iter().filter(|&&p| p == b).count(), 2);
    }

    #[test]
    fn test_triangle_degenerate() {
        let p = Point::new(5, 5);
        assert_eq!(triangle(p, p, p), vec![p, p, p]);
    }

    #[test]
    fn test_circle_zero_radius() {
        let center = Point::new(50, 50);
        assert_eq!(circle(center, 0), vec![center; 8]);
    }

    #[test]
    fn test_circle_radius_one() {
        let points = circle(Point::ORIGIN, 1);
        assert_eq!(points.len(), 16);
        for p in &points {
            assert_eq!(p.x.abs() + p.y.abs(), 1);
        }
    }

    #[test]
    fn test_circle_first_group_is_axis_extremes() {
        let points = circle(Point::new(10, 20), 5);
        assert_eq!(
            &points[..8],
            &pts(&[
                (10, 25),
                (10, 25),
                (10, 15),
                (10, 15),
                (15, 20),
                (5, 20),
                (15, 20),
                (5, 20)
            ])[..]
        );
        assert_eq!(points.len() % 8, 0);
    }

    #[test]
    fn test_circle_radius_fifty_within_one_pixel() {
        let center = Point::new(100, 100);
        for p in circle(center, 50) {
            let dist = center.distance(p);
            assert!((dist - 50.0).abs() <= 1.0, "{p} is {dist} from center");
        }
    }

    #[test]
    fn test_radius_through() {
        assert_eq!(radius_through(Point::new(100, 100), Point::new(150, 100)), 50);
        // sqrt(2) rounds down
        assert_eq!(radius_through(Point::ORIGIN, Point::new(1, 1)), 1);
        assert_eq!(radius_through(Point::ORIGIN, Point::new(3, 4)), 5);
        assert_eq!(radius_through(Point::ORIGIN, Point::ORIGIN), 0);
    }

    #[test]
    fn test_line_at_i32_bounds() {
        let points = line(
            Point::new(i32::MAX - 3, i32::MIN),
            Point::new(i32::MAX, i32::MIN + 2),
        );
        assert_eq!(points.len(), 4);
        assert_eq!(points.first(), Some(&Point::new(i32::MAX - 3, i32::MIN)));
        assert_eq!(points.last(), Some(&Point::new(i32::MAX, i32::MIN + 2)));

        let points = line(Point::new(i32::MIN, i32::MAX), Point::new(i32::MIN + 2, i32::MAX));
        assert_eq!(
            points,
            pts(&[
                (i32::MIN, i32::MAX),
                (i32::MIN + 1, i32::MAX),
                (i32::MIN + 2, i32::MAX)
            ])
        );
    }

    #[test]
    fn test_circle_at_i32_bounds_clamps() {
        let reference = circle(Point::ORIGIN, 5);

        let near_max = circle(Point::new(i32::MAX - 2, 0), 5);
        assert_eq!(near_max.len(), reference.len());
        assert!(near_max.iter().all(|p| p.x >= i32::MAX - 7));
        assert!(near_max.contains(&Point::new(i32::MAX, 0)));

        let corner = circle(Point::new(i32::MIN, i32::MIN), 5);
        assert_eq!(corner.len(), reference.len());
        assert!(corner.iter().all(|p| p.x <= i32::MIN + 5 && p.y <= i32::MIN + 5));
    }

    #[test]
    fn test_radius_through_far_apart_points() {
        let min = Point::new(i32::MIN, 0);
        let max = Point::new(i32::MAX, 0);
        assert_eq!(radius_through(min, max), u32::MAX);
        assert_eq!(radius_through(max, min), u32::MAX);
        assert_eq!(
            radius_through(Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX)),
            u32::MAX
        );
        assert_eq!(radius_through(Point::new(i32::MAX, 0), Point::new(i32::MAX, 3)), 3);
    }
}

// ============================================================================
// Property-based tests with proptest
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn point() -> impl Strategy<Value = Point> {
        (-500i32..500, -500i32..500).prop_map(|(x, y)| Point::new(x, y))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Both endpoints are on the path, in order
        #[test]
        fn prop_line_contains_endpoints(a in point(), b in point()) {
            let points = line(a, b);
            prop_assert_eq!(points.first(), Some(&a));
            prop_assert_eq!(points.last(), Some(&b));
        }

        /// Consecutive points are 8-connected neighbours
        #[test]
        fn prop_line_is_eight_connected(a in point(), b in point()) {
            let points = line(a, b);
            for pair in points.windows(2) {
                prop_assert_eq!(pair[0].chebyshev(pair[1]), 1);
            }
            prop_assert_eq!(points.len() as u32, a.chebyshev(b) + 1);
        }

        /// Swapping endpoints reverses the path
        #[test]
        fn prop_line_symmetric(a in point(), b in point()) {
            let mut reversed = line(b, a);
            reversed.reverse();
            prop_assert_eq!(line(a, b), reversed);
        }

        /// Triangle outline is exactly its three edges, no dedup
        #[test]
        fn prop_triangle_point_count(a in point(), b in point(), c in point()) {
            let expected = line(a, b).len() + line(b, c).len() + line(c, a).len();
            prop_assert_eq!(triangle(a, b, c).len(), expected);
        }

        /// Every circle point rounds to within one pixel of the radius
        #[test]
        fn prop_circle_within_tolerance(center in point(), radius in 0u32..300) {
            let r = f64::from(radius);
            for p in circle(center, radius) {
                let rounded = center.distance(p).round();
                prop_assert!(
                    (rounded - r).abs() <= 1.0,
                    "{} rounds to {} for radius {}", p, rounded, radius
                );
            }
        }

        /// The point set is closed under axis reflections and the x/y swap
        #[test]
        fn prop_circle_octant_symmetry(center in point(), radius in 0u32..300) {
            let offsets: HashSet<(i32, i32)> = circle(center, radius)
                .into_iter()
                .map(|p| (p.x - center.x, p.y - center.y))
                .collect();
            for &(x, y) in &offsets {
                prop_assert!(offsets.contains(&(-x, y)));
                prop_assert!(offsets.contains(&(x, -y)));
                prop_assert!(offsets.contains(&(-x, -y)));
                prop_assert!(offsets.contains(&(y, x)));
            }
        }

        /// Rasterizers never return an empty point set
        #[test]
        fn prop_never_empty(a in point(), b in point(), radius in 0u32..50) {
            prop_assert!(!line(a, b).is_empty());
            prop_assert!(!triangle(a, a, b).is_empty());
            prop_assert!(!circle(a, radius).is_empty());
        }
    }
}
