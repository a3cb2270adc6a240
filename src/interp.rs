use crate::types::{Point, Value};

/// Linear interpolation, exact at both ends: `lerp(a, b, 0) == a` and `lerp(a, b, 1) == b`.
#[inline]
pub fn lerp(a: Value, b: Value, t: Value) -> Value {
    a * (1. - t) + b * t
}

/// Linearly interpolate between two points by factor `t`.
#[inline]
pub fn interpolate_points(p0: Point, p1: Point, t: Value) -> Point {
    Point::new(
        lerp(p0.x, p1.x, t),
        lerp(p0.y, p1.y, t),
        lerp(p0.z, p1.z, t),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_are_exact() {
        for (a, b) in [(0.1, 0.3), (-7.25, 1e-3), (3.0, 3.0), (1e6, -1e-6)] {
            assert_eq!(lerp(a, b, 0.), a);
            assert_eq!(lerp(a, b, 1.), b);
        }
    }

    #[test]
    fn test_lerp_is_monotonic() {
        let (a, b) = (-2.5, 11.0);
        let mut prev = lerp(a, b, 0.);
        for i in 1..=1000 {
            let next = lerp(a, b, i as Value / 1000.);
            assert!(next >= prev, "step {i}: {next} < {prev}");
            prev = next;
        }
    }

    #[test]
    fn test_interpolate_points_midpoint() {
        let p = interpolate_points(Point::new(0., 2., -4.), Point::new(2., 2., 4.), 0.5);
        assert_eq!(p, Point::new(1., 2., 0.));
    }

    #[test]
    fn test_interpolate_points_passes_nan() {
        let p = interpolate_points(Point::new(0., 0., 0.), Point::new(1., 1., 1.), Value::NAN);
        assert!(p.x.is_nan() && p.y.is_nan() && p.z.is_nan());
    }
}
