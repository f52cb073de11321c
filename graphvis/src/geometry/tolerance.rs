// Centralized numeric helpers shared by the algorithms

/// Slack for comparing accumulated path/tree costs in tests and invariant checks.
pub const EPS_COST: f64 = 1e-9;

#[inline] pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() <= eps }
#[inline] pub fn is_valid_weight(w: f64) -> bool { w.is_finite() && w >= 0.0 }
