use log::{debug, trace};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::Result;
use crate::model::VertexId;
use crate::search_tree::{SearchKind, SearchTree};
use crate::Graph;

/// Min-heap entry (wrapped in `Reverse`) ordered by key, then by push sequence so equal keys
/// pop first-in first-out and runs stay deterministic.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeapEntry {
    pub key: f64,
    pub seq: u64,
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Option<f64>,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.total_cmp(&other.key).then(self.seq.cmp(&other.seq))
    }
}

/// Dijkstra's single-source shortest paths over non-negative weights (unweighted edges cost 1).
///
/// A vertex is attached to the tree when it is settled, with the parent of its last successful
/// relaxation, so `cost(target)` on the result is the shortest distance to `target`.
pub fn shortest_path(g: &Graph, start: VertexId) -> Result<SearchTree> {
    g.require(start)?;
    let n = g.id_bound();
    let mut dist = vec![f64::INFINITY; n];
    let mut settled = vec![false; n];
    let mut tree = SearchTree::new(SearchKind::ShortestPath, start);
    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;
    dist[start.0 as usize] = 0.0;
    heap.push(Reverse(HeapEntry { key: 0.0, seq, from: start, to: start, weight: None }));

    while let Some(Reverse(e)) = heap.pop() {
        let u = e.to;
        if settled[u.0 as usize] || e.key > dist[u.0 as usize] {
            continue;
        }
        settled[u.0 as usize] = true;
        if u != start {
            tree.attach(e.from, u, e.weight);
        }
        for nb in g.neighbors(u).unwrap_or(&[]) {
            let v = nb.vertex.0 as usize;
            if settled[v] {
                continue;
            }
            let nd = e.key + nb.cost();
            if nd < dist[v] {
                trace!("relax {} via {}: {} -> {}", nb.vertex, u, dist[v], nd);
                dist[v] = nd;
                seq += 1;
                heap.push(Reverse(HeapEntry { key: nd, seq, from: u, to: nb.vertex, weight: nb.weight }));
            }
        }
    }
    debug!("shortest paths from {} settled {} vertices", start, tree.vertices_found());
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;

    #[test]
    fn detour_beats_direct_heavy_edge() {
        let mut g = Graph::new();
        let a = g.add_vertex(Point::named(0.0, 0.0, "a")).unwrap();
        let b = g.add_vertex(Point::named(1.0, 0.0, "b")).unwrap();
        let c = g.add_vertex(Point::named(2.0, 0.0, "c")).unwrap();
        g.add_edge(a, c, Some(10.0)).unwrap();
        g.add_edge(a, b, Some(3.0)).unwrap();
        g.add_edge(b, c, Some(4.0)).unwrap();
        let t = shortest_path(&g, a).unwrap();
        assert_eq!(t.cost(c), Some(7.0));
        assert_eq!(t.path(c), Some(vec![a, b, c]));
        assert_eq!(t.search_order(), &[a, b, c]);
    }

    #[test]
    fn zero_weight_edges_are_fine() {
        let mut g = Graph::new();
        let a = g.add_vertex(Point::new(0.0, 0.0)).unwrap();
        let b = g.add_vertex(Point::new(0.0, 0.0)).unwrap();
        g.add_edge(a, b, Some(0.0)).unwrap();
        let t = shortest_path(&g, b).unwrap();
        assert_eq!(t.cost(a), Some(0.0));
    }
}
