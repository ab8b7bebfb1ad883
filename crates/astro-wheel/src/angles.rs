//! Angle helpers shared by every engine.
//!
//! All values are ecliptic degrees. Functions accept any finite input and
//! normalize before comparing.

/// Wrap an angle into [0, 360).
pub fn normalize(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Shortest-arc distance between two longitudes, in [0, 180].
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = (normalize(a) - normalize(b)).abs();
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Signed offset travelling from `from` to `to` along the shorter arc, in (-180, 180].
pub fn signed_delta(from: f64, to: f64) -> f64 {
    let delta = normalize(to - from);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// Midpoint of the shorter arc between two longitudes.
///
/// `arc_midpoint(350.0, 10.0)` is `0.0`, not the arithmetic mean. When the
/// two points are exactly opposite, the midpoint lies 90° past `a`.
pub fn arc_midpoint(a: f64, b: f64) -> f64 {
    normalize(a + signed_delta(a, b) / 2.0)
}
