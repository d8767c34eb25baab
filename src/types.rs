use nalgebra::{Matrix2, Vector2};

/// Absolute tolerance used by [`near_equal`].
pub const NEAR_EQUAL_ABS: f64 = 1e-30;

/// Relative tolerance used by [`near_equal`].
pub const NEAR_EQUAL_REL: f64 = 1e-15;

/// The single floating-point tolerance predicate used throughout the solver.
///
/// Two values are considered equal if they are closer than a fixed absolute
/// bound, or closer than a fixed fraction of the larger magnitude.
#[inline]
pub fn near_equal(a: f64, b: f64) -> bool {
    let d = (a - b).abs();
    if d < NEAR_EQUAL_ABS {
        return true;
    }
    d < NEAR_EQUAL_REL * a.abs().max(b.abs())
}

/// Rotation matrix that maps `(x, y)` onto `(0, +‖(x, y)‖)`.
///
/// Used to align an objective direction with the positive y axis: rotating
/// every constraint normal by the returned matrix turns "minimize `c . p`"
/// into "minimize the rotated y coordinate". Returns `None` if `(x, y)` is
/// the zero vector (the gradient is degenerate).
pub fn rot(x: f64, y: f64) -> Option<Matrix2<f64>> {
    let h = x.hypot(y);
    if h <= 0.0 {
        return None;
    }
    Some(Matrix2::new(y / h, -x / h, x / h, y / h))
}

/// 2D point/vector alias used across the solver.
pub type Vec2 = Vector2<f64>;

/// 2D matrix alias used across the solver.
pub type Mat2 = Matrix2<f64>;
