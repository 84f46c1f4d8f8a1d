//! Named vector helpers on top of [`Vec3`].
//!
//! glam supplies the arithmetic operators, `dot` and `length`. The helpers
//! below pin down the behavior the tracer relies on at the edges.

use crate::Vec3;

/// Scale `v` to unit length.
///
/// A zero-length vector has no direction; it is returned unchanged as the
/// zero vector instead of dividing by zero.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    let len = v.length();
    if len > 0.0 {
        v / len
    } else {
        Vec3::ZERO
    }
}

/// Mirror `v` about the plane with unit normal `n`.
///
/// `n` must be unit length; the result is meaningless otherwise.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - n * (2.0 * v.dot(n))
}

/// Component-wise product, used to tint a color by a light's color.
#[inline]
pub fn hadamard(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x * b.x, a.y * b.y, a.z * b.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_normalize_unit_length() {
        let vectors = [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-1.0, 2.0, -7.5),
            Vec3::new(1e-3, 0.0, 0.0),
            Vec3::new(250.0, -100.0, 42.0),
        ];
        for v in vectors {
            let n = normalize(v);
            assert!((n.length() - 1.0).abs() < 1e-9, "|normalize({v})| = {}", n.length());
        }
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        assert_eq!(normalize(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn test_normalize_keeps_direction() {
        let n = normalize(Vec3::new(0.0, 0.0, -5.0));
        assert!(approx_eq(n, Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_reflect_off_floor() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let r = reflect(v, Vec3::Y);
        assert!(approx_eq(r, Vec3::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn test_reflect_is_involution() {
        let normals = [
            Vec3::Y,
            normalize(Vec3::new(1.0, 1.0, 0.0)),
            normalize(Vec3::new(-2.0, 0.5, 3.0)),
        ];
        let v = Vec3::new(0.3, -0.8, 0.52);
        for n in normals {
            let twice = reflect(reflect(v, n), n);
            assert!(approx_eq(twice, v), "reflect twice about {n} gave {twice}");
        }
    }

    #[test]
    fn test_reflect_preserves_length() {
        let n = normalize(Vec3::new(0.0, 1.0, 1.0));
        let v = Vec3::new(2.0, -3.0, 1.0);
        assert!((reflect(v, n).length() - v.length()).abs() < 1e-9);
    }

    #[test]
    fn test_hadamard() {
        let a = Vec3::new(0.5, 1.0, 2.0);
        let b = Vec3::new(1.0, 0.9, 0.8);
        assert!(approx_eq(hadamard(a, b), Vec3::new(0.5, 0.9, 1.6)));
    }
}
