// Centralized caps for input coming from the browser (fixtures, generated points, JS calls)

// Interactive teaching tool; a few hundred vertices is the expected working size
pub const MAX_VERTICES: usize = 10_000;
pub const MAX_RANDOM_POINTS: usize = 1_000;
// Ids are never reused, so this also bounds the per-search scratch arrays under add/remove churn
pub const MAX_VERTEX_IDS: usize = 100_000;

// Numeric bounds
pub const COORD_MIN: f64 = -10_000_000.0;
pub const COORD_MAX: f64 =  10_000_000.0;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }
