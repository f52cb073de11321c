#[inline]
pub fn distance_sq(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1; let dy = y2 - y1;
    dx*dx + dy*dy
}

#[inline]
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    distance_sq(x1, y1, x2, y2).sqrt()
}

/// Within `radius` of the center, boundary inclusive. A negative or NaN radius contains nothing.
#[inline]
pub fn within_radius(px: f64, py: f64, cx: f64, cy: f64, radius: f64) -> bool {
    radius >= 0.0 && distance_sq(px, py, cx, cy) <= radius*radius
}
