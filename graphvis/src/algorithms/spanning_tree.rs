use log::debug;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::shortest_path::HeapEntry;
use crate::error::Result;
use crate::model::VertexId;
use crate::search_tree::{SearchKind, SearchTree};
use crate::Graph;

/// Prim's algorithm grown from `start`: repeatedly take the cheapest edge leaving the tree
/// toward an unreached vertex. Spans only `start`'s connected component; the result's
/// `total_cost()` is the tree weight.
pub fn minimum_spanning_tree(g: &Graph, start: VertexId) -> Result<SearchTree> {
    g.require(start)?;
    let mut in_tree = vec![false; g.id_bound()];
    let mut tree = SearchTree::new(SearchKind::MinimumSpanningTree, start);
    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;

    let mut grow = |u: VertexId, in_tree: &[bool], heap: &mut BinaryHeap<Reverse<HeapEntry>>| {
        for nb in g.neighbors(u).unwrap_or(&[]) {
            if !in_tree[nb.vertex.0 as usize] {
                seq += 1;
                heap.push(Reverse(HeapEntry { key: nb.cost(), seq, from: u, to: nb.vertex, weight: nb.weight }));
            }
        }
    };

    in_tree[start.0 as usize] = true;
    grow(start, &in_tree, &mut heap);
    while let Some(Reverse(e)) = heap.pop() {
        let v = e.to.0 as usize;
        if in_tree[v] {
            continue;
        }
        in_tree[v] = true;
        tree.attach(e.from, e.to, e.weight);
        grow(e.to, &in_tree, &mut heap);
    }
    debug!(
        "spanning tree from {} covers {} vertices, total {}",
        start,
        tree.vertices_found(),
        tree.total_cost()
    );
    Ok(tree)
}
