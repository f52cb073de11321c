use log::debug;
use std::collections::VecDeque;

use crate::error::Result;
use crate::model::VertexId;
use crate::search_tree::{SearchKind, SearchTree};
use crate::Graph;

/// Pre-order depth-first search from `start`, neighbors taken in adjacency order.
///
/// Runs on an explicit stack of `(vertex, next neighbor index)` frames so the visiting order is
/// exactly that of the recursive formulation without its stack depth.
pub fn dfs(g: &Graph, start: VertexId) -> Result<SearchTree> {
    g.require(start)?;
    let mut visited = vec![false; g.id_bound()];
    let mut tree = SearchTree::new(SearchKind::DepthFirst, start);
    visited[start.0 as usize] = true;
    let mut stack: Vec<(VertexId, usize)> = vec![(start, 0)];
    while let Some(frame) = stack.last_mut() {
        let (u, i) = *frame;
        let neighbors = g.neighbors(u).unwrap_or(&[]);
        let Some(n) = neighbors.get(i).copied() else {
            stack.pop();
            continue;
        };
        frame.1 += 1;
        let slot = &mut visited[n.vertex.0 as usize];
        if !*slot {
            *slot = true;
            tree.attach(u, n.vertex, n.weight);
            stack.push((n.vertex, 0));
        }
    }
    debug!("dfs from {} reached {} vertices", start, tree.vertices_found());
    Ok(tree)
}

/// Level-order breadth-first search from `start`. Vertices are marked when enqueued, so each
/// gets the first parent that discovers it.
pub fn bfs(g: &Graph, start: VertexId) -> Result<SearchTree> {
    g.require(start)?;
    let mut visited = vec![false; g.id_bound()];
    let mut tree = SearchTree::new(SearchKind::BreadthFirst, start);
    visited[start.0 as usize] = true;
    let mut queue = VecDeque::from([start]);
    while let Some(u) = queue.pop_front() {
        for n in g.neighbors(u).unwrap_or(&[]) {
            let slot = &mut visited[n.vertex.0 as usize];
            if !*slot {
                *slot = true;
                tree.attach(u, n.vertex, n.weight);
                queue.push_back(n.vertex);
            }
        }
    }
    debug!("bfs from {} reached {} vertices", start, tree.vertices_found());
    Ok(tree)
}
