use serde::Serialize;

use super::merge_sort::sort_order;
use crate::error::{GraphError, Result};
use crate::geometry::limits::in_coord_bounds;
use crate::geometry::math::distance;
use crate::model::{Axis, Planar};

/// Indices (into the input slice, `first < second`) of the closest two points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClosestPair {
    pub first: usize,
    pub second: usize,
    pub distance: f64,
}

impl ClosestPair {
    fn of<P: Planar>(points: &[P], i: usize, j: usize) -> Self {
        let (a, b) = (&points[i], &points[j]);
        ClosestPair { first: i.min(j), second: i.max(j), distance: distance(a.x(), a.y(), b.x(), b.y()) }
    }
}

fn check_input<P: Planar>(points: &[P]) -> Result<()> {
    if points.len() < 2 {
        return Err(GraphError::NotEnoughPoints { got: points.len() });
    }
    // bounded coordinates keep squared distances finite
    for p in points {
        if !in_coord_bounds(p.x()) {
            return Err(GraphError::NonFiniteCoordinate { param: "x" });
        }
        if !in_coord_bounds(p.y()) {
            return Err(GraphError::NonFiniteCoordinate { param: "y" });
        }
    }
    Ok(())
}

/// Divide and conquer closest pair, O(n log n).
///
/// Ranges split by position in x order (not by x value), so runs of equal x, coincident points
/// included, divide cleanly. Equal distances keep the pair found first.
pub fn closest_pair<P: Planar>(points: &[P]) -> Result<ClosestPair> {
    check_input(points)?;
    let by_x = sort_order(points, Axis::X);
    let by_y = sort_order(points, Axis::Y);
    let mut rank = vec![0usize; points.len()];
    for (r, &i) in by_x.iter().enumerate() {
        rank[i] = r;
    }
    let search = Search { points, by_x: &by_x, rank: &rank };
    Ok(search.divide(0, points.len(), &by_y))
}

/// O(n²) reference over every pair, same tie rule (first pair in index order).
pub fn closest_pair_brute_force<P: Planar>(points: &[P]) -> Result<ClosestPair> {
    check_input(points)?;
    let idx: Vec<usize> = (0..points.len()).collect();
    Ok(brute(points, &idx))
}

fn brute<P: Planar>(points: &[P], idx: &[usize]) -> ClosestPair {
    let mut best = ClosestPair::of(points, idx[0], idx[1]);
    for a in 0..idx.len() {
        for b in (a + 1)..idx.len() {
            let cand = ClosestPair::of(points, idx[a], idx[b]);
            if cand.distance < best.distance {
                best = cand;
            }
        }
    }
    best
}

struct Search<'a, P> {
    points: &'a [P],
    by_x: &'a [usize],
    rank: &'a [usize],
}

impl<P: Planar> Search<'_, P> {
    // `lo..hi` are positions in x order; `ys` is the same point set in y order.
    fn divide(&self, lo: usize, hi: usize, ys: &[usize]) -> ClosestPair {
        if hi - lo <= 3 {
            return brute(self.points, &self.by_x[lo..hi]);
        }
        let mid = lo + (hi - lo) / 2;
        let (left_y, right_y): (Vec<usize>, Vec<usize>) =
            ys.iter().copied().partition(|&i| self.rank[i] < mid);
        let left = self.divide(lo, mid, &left_y);
        let right = self.divide(mid, hi, &right_y);
        let mut best = if right.distance < left.distance { right } else { left };

        let line = self.points[self.by_x[mid]].x();
        let strip: Vec<usize> = ys
            .iter()
            .copied()
            .filter(|&i| (self.points[i].x() - line).abs() < best.distance)
            .collect();
        for (a, &i) in strip.iter().enumerate() {
            let yi = self.points[i].y();
            for &j in &strip[a + 1..] {
                if self.points[j].y() - yi >= best.distance {
                    break;
                }
                let cand = ClosestPair::of(self.points, i, j);
                if cand.distance < best.distance {
                    best = cand;
                }
            }
        }
        best
    }
}
