use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// Interaction settings the browser layer hands to the core.
///
/// Parsed from a partial JSON object; missing keys keep their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Drawn radius of a vertex, also the mouse hit radius.
    pub point_radius: f64,
    /// Hit radius multiplier for touch input.
    pub touch_radius_factor: f64,
    /// New points may not be placed within `point_radius * overlap_factor` of another point.
    pub overlap_factor: f64,
    pub random_points: usize,
    pub random_points_mobile: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            point_radius: 5.0,
            touch_radius_factor: 3.0,
            overlap_factor: 2.0,
            random_points: 20,
            random_points_mobile: 5,
        }
    }
}

impl Settings {
    pub fn from_json(text: &str) -> Result<Settings> {
        let settings: Settings = serde_json::from_str(text).map_err(GraphError::InvalidSettings)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.point_radius) {
            return Err(GraphError::InvalidSetting { field: "point_radius" });
        }
        if !positive(self.touch_radius_factor) {
            return Err(GraphError::InvalidSetting { field: "touch_radius_factor" });
        }
        if !positive(self.overlap_factor) {
            return Err(GraphError::InvalidSetting { field: "overlap_factor" });
        }
        Ok(())
    }

    pub fn hit_radius(&self, touch: bool) -> f64 {
        if touch { self.point_radius * self.touch_radius_factor } else { self.point_radius }
    }

    pub fn overlap_radius(&self) -> f64 {
        self.point_radius * self.overlap_factor
    }

    pub fn random_point_count(&self, mobile: bool) -> usize {
        if mobile { self.random_points_mobile } else { self.random_points }
    }
}
