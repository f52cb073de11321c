//! Seeded random point sets for the "generate points" demo.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{GraphError, Result};
use crate::geometry::limits::MAX_RANDOM_POINTS;
use crate::model::Point;
use crate::Graph;

/// Edges wired between generated points (by index) when both endpoints exist.
pub const DEMO_EDGES: [(usize, usize); 8] =
    [(6, 3), (1, 8), (2, 19), (11, 7), (3, 1), (6, 11), (8, 19), (7, 2)];

/// `count` points with whole-number coordinates in `[0, width) x [0, height)`, named `0..count`.
/// The same seed always yields the same points.
pub fn random_points(count: usize, width: f64, height: f64, seed: u64) -> Result<Vec<Point>> {
    if !(width.is_finite() && width > 0.0) {
        return Err(GraphError::NonFiniteCoordinate { param: "width" });
    }
    if !(height.is_finite() && height > 0.0) {
        return Err(GraphError::NonFiniteCoordinate { param: "height" });
    }
    if count > MAX_RANDOM_POINTS {
        return Err(GraphError::TooManyVertices { max: MAX_RANDOM_POINTS });
    }
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..count)
        .map(|i| {
            let x = (rng.gen::<f64>() * width).floor();
            let y = (rng.gen::<f64>() * height).floor();
            Point::named(x, y, i as i64)
        })
        .collect())
}

/// Random points plus whichever [`DEMO_EDGES`] fit the point count.
pub fn random_graph(count: usize, width: f64, height: f64, seed: u64) -> Result<Graph> {
    let points = random_points(count, width, height, seed)?;
    let edges: Vec<(usize, usize, Option<f64>)> = DEMO_EDGES
        .iter()
        .filter(|&&(a, b)| a < count && b < count)
        .map(|&(a, b)| (a, b, None))
        .collect();
    let g = Graph::from_parts(points, &edges)?;
    debug!("random graph: {} vertices, {} edges (seed {})", g.vertex_count(), g.edge_count(), seed);
    Ok(g)
}
