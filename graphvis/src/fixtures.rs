//! Built-in example maps: a 12-city US map with road distances and a small binary tree.

use log::debug;
use serde::Deserialize;

use crate::error::{GraphError, Result};
use crate::model::Point;
use crate::Graph;

const US_MAP: &str = include_str!("../fixtures/us.json");
const BINARY_MAP: &str = include_str!("../fixtures/binary.json");

pub const MAP_NAMES: [&str; 2] = ["us", "binary"];

#[derive(Clone, Debug, Deserialize)]
pub struct MapFixture {
    /// Extent of the coordinate space the map was drawn in.
    pub width: f64,
    pub height: f64,
    pub vertices: Vec<Point>,
    pub edges: Vec<(usize, usize, Option<f64>)>,
}

impl MapFixture {
    pub fn parse(text: &str) -> Result<MapFixture> {
        serde_json::from_str(text).map_err(GraphError::Fixture)
    }

    /// Looks a map up by name, case-insensitively.
    pub fn named(name: &str) -> Result<MapFixture> {
        match name.trim().to_lowercase().as_str() {
            "us" => MapFixture::parse(US_MAP),
            "binary" => MapFixture::parse(BINARY_MAP),
            _ => Err(GraphError::UnknownMap(name.to_string())),
        }
    }

    /// Scales the map uniformly to fit `width` x `height` and centres it, flooring to whole
    /// pixels.
    pub fn fit_to(mut self, width: f64, height: f64) -> Result<MapFixture> {
        if !(width.is_finite() && width > 0.0) {
            return Err(GraphError::NonFiniteCoordinate { param: "width" });
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(GraphError::NonFiniteCoordinate { param: "height" });
        }
        let scale = (width / self.width).min(height / self.height);
        let ox = width / 2.0 - self.width * scale / 2.0;
        let oy = height / 2.0 - self.height * scale / 2.0;
        for p in &mut self.vertices {
            p.x = (ox + (p.x * scale).floor()).floor();
            p.y = (oy + (p.y * scale).floor()).floor();
        }
        self.width = width;
        self.height = height;
        Ok(self)
    }

    pub fn into_graph(self) -> Result<Graph> {
        Graph::from_parts(self.vertices, &self.edges)
    }
}

/// Builds the named map in its own coordinate space.
pub fn load_map(name: &str) -> Result<Graph> {
    let g = MapFixture::named(name)?.into_graph()?;
    debug!("loaded map '{}': {} vertices, {} edges", name, g.vertex_count(), g.edge_count());
    Ok(g)
}

/// Builds the named map scaled into a `width` x `height` viewport.
pub fn load_map_fitted(name: &str, width: f64, height: f64) -> Result<Graph> {
    MapFixture::named(name)?.fit_to(width, height)?.into_graph()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_maps_parse() {
        for name in MAP_NAMES {
            let m = MapFixture::named(name).unwrap();
            assert!(!m.vertices.is_empty());
            assert!(m.edges.iter().all(|&(a, b, _)| a < m.vertices.len() && b < m.vertices.len()));
        }
    }

    #[test]
    fn fitting_keeps_points_inside_viewport() {
        let g = load_map_fitted("US", 390.0, 430.0).unwrap();
        for (_, p) in g.vertices() {
            assert!(p.x >= 0.0 && p.x <= 390.0, "x {}", p.x);
            assert!(p.y >= 0.0 && p.y <= 430.0, "y {}", p.y);
            assert_eq!(p.x, p.x.floor());
        }
        assert!(load_map_fitted("us", 0.0, 10.0).is_err());
    }

    #[test]
    fn unknown_map_is_named_in_error() {
        let err = load_map("mars").unwrap_err();
        assert_eq!(err.to_string(), "no graph map to load with the name 'mars'");
    }
}
