//! Planar geometry over pose landmarks.
//!
//! Every function here works on one canonical [`Point`]. Callers holding
//! tuples, arrays or landmarks convert through the `From` impls, so the
//! functions accept anything `Into<Point>`.

/// Normalized coordinate record
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// Horizontal position (0-1 normalized)
    pub x: f64,
    /// Vertical position (0-1 normalized, grows downwards)
    pub y: f64,
    /// Relative depth
    pub z: f64,
}

impl Point {
    /// The origin, used wherever a coordinate is missing
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    /// Create a point from three coordinates
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// True when the planar coordinates are usable numbers
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y, 0.0)
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y, 0.0)
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// Angle at vertex `b` between the rays `b -> a` and `b -> c`, in whole degrees.
///
/// Only the (x, y) plane is used. Returns 0 when either ray has zero length
/// or the inputs are not finite; scoring rules read 0° as "could not be
/// measured" and penalize it like any other out-of-range angle.
///
/// ```
/// use exercise_form_analyzer::geometry::angle;
///
/// assert_eq!(angle((1.0, 0.0), (0.0, 0.0), (0.0, 1.0)), 90);
/// assert_eq!(angle((0.0, 0.0), (0.5, 0.0), (1.0, 0.0)), 180);
/// assert_eq!(angle((0.0, 0.0), (0.0, 0.0), (1.0, 0.0)), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)] // acos output is bounded to [0, 180] degrees
pub fn angle(a: impl Into<Point>, b: impl Into<Point>, c: impl Into<Point>) -> i32 {
    let (a, b, c) = (a.into(), b.into(), c.into());

    let ab = (a.x - b.x, a.y - b.y);
    let cb = (c.x - b.x, c.y - b.y);

    let ab_len = ab.0.hypot(ab.1);
    let cb_len = cb.0.hypot(cb.1);

    if !ab_len.is_finite() || !cb_len.is_finite() || ab_len <= 0.0 || cb_len <= 0.0 {
        return 0;
    }

    // Normalize each ray first so the product cannot overflow or underflow
    let cosine = (ab.0 / ab_len) * (cb.0 / cb_len) + (ab.1 / ab_len) * (cb.1 / cb_len);

    cosine.clamp(-1.0, 1.0).acos().to_degrees().round() as i32
}

/// Euclidean distance between two points on the (x, y) plane.
///
/// Returns 0 if either point is not finite.
#[must_use]
pub fn distance(a: impl Into<Point>, b: impl Into<Point>) -> f64 {
    let (a, b) = (a.into(), b.into());

    if !a.is_finite() || !b.is_finite() {
        return 0.0;
    }

    (a.x - b.x).hypot(a.y - b.y)
}
