use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use crate::error::GraphError;
use crate::model::{VertexId, UNWEIGHTED_COST};
use crate::Graph;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    DepthFirst,
    BreadthFirst,
    MinimumSpanningTree,
    ShortestPath,
}

impl FromStr for SearchKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dfs" | "depth_first" | "depth-first search" => Ok(SearchKind::DepthFirst),
            "bfs" | "breadth_first" | "breadth-first search" => Ok(SearchKind::BreadthFirst),
            "mst" | "minimum_spanning_tree" | "total shortest distance" => {
                Ok(SearchKind::MinimumSpanningTree)
            }
            "sssp" | "shortest_path" | "shortest paths" => Ok(SearchKind::ShortestPath),
            other => Err(GraphError::UnknownSearch(other.to_string())),
        }
    }
}

/// Parent link recorded when a search first attaches `child` to the tree.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TreeEdge {
    pub parent: VertexId,
    pub child: VertexId,
    pub weight: Option<f64>,
}

impl TreeEdge {
    pub fn cost(&self) -> f64 {
        self.weight.unwrap_or(UNWEIGHTED_COST)
    }
}

/// Result of one search: the root, the order vertices were reached in, and one parent link per
/// reached non-root vertex (in attach order). Built once by the search and read-only afterwards.
///
/// Every attached child was unvisited when attached and is never attached again, so parent
/// links always lead back to the root.
#[derive(Clone, Debug, Serialize)]
pub struct SearchTree {
    kind: SearchKind,
    root: VertexId,
    order: Vec<VertexId>,
    edges: Vec<TreeEdge>,
    #[serde(skip)]
    index: HashMap<VertexId, usize>, // child -> edges slot
}

impl SearchTree {
    pub(crate) fn new(kind: SearchKind, root: VertexId) -> Self {
        SearchTree { kind, root, order: vec![root], edges: Vec::new(), index: HashMap::new() }
    }

    /// Records `child` as reached through `parent`, appending it to the search order.
    pub(crate) fn attach(&mut self, parent: VertexId, child: VertexId, weight: Option<f64>) {
        debug_assert!(child != self.root && !self.index.contains_key(&child));
        debug_assert!(self.reached(parent));
        self.index.insert(child, self.edges.len());
        self.edges.push(TreeEdge { parent, child, weight });
        self.order.push(child);
    }

    pub fn kind(&self) -> SearchKind { self.kind }

    pub fn root(&self) -> VertexId { self.root }

    /// Vertices in the order the search reached them, root first.
    pub fn search_order(&self) -> &[VertexId] { &self.order }

    pub fn vertices_found(&self) -> usize { self.order.len() }

    pub fn tree_edges(&self) -> &[TreeEdge] { &self.edges }

    pub fn parent(&self, v: VertexId) -> Option<VertexId> {
        self.index.get(&v).map(|&i| self.edges[i].parent)
    }

    pub fn reached(&self, v: VertexId) -> bool {
        v == self.root || self.index.contains_key(&v)
    }

    /// Root-first path to `target`; `None` when the search never reached it.
    pub fn path(&self, target: VertexId) -> Option<Vec<VertexId>> {
        let mut path = vec![target];
        let mut cur = target;
        while cur != self.root {
            cur = self.parent(cur)?;
            path.push(cur);
        }
        path.reverse();
        Some(path)
    }

    /// Sum of edge costs along the path to `target`, accumulated from the root outward.
    /// Unweighted edges count one each; the root costs 0.
    pub fn cost(&self, target: VertexId) -> Option<f64> {
        let mut links = Vec::new();
        let mut cur = target;
        while cur != self.root {
            let &i = self.index.get(&cur)?;
            links.push(i);
            cur = self.edges[i].parent;
        }
        Some(links.iter().rev().fold(0.0, |acc, &i| acc + self.edges[i].cost()))
    }

    /// Sum over every tree edge; for a spanning tree this is its total weight.
    pub fn total_cost(&self) -> f64 {
        self.edges.iter().map(TreeEdge::cost).sum()
    }

    /// Reached vertices grouped by depth, root alone at level 0, each level in attach order.
    pub fn levels(&self) -> Vec<Vec<VertexId>> {
        let mut depth: HashMap<VertexId, usize> = HashMap::new();
        depth.insert(self.root, 0);
        let mut levels = vec![vec![self.root]];
        for e in &self.edges {
            // parents are always attached before their children
            let d = depth.get(&e.parent).copied().unwrap_or(0) + 1;
            depth.insert(e.child, d);
            if levels.len() <= d {
                levels.resize_with(d + 1, Vec::new);
            }
            levels[d].push(e.child);
        }
        levels
    }

    /// `A -> B -> C` using vertex labels from `graph`.
    pub fn describe_path(&self, graph: &Graph, target: VertexId) -> Option<String> {
        let path = self.path(target)?;
        let labels: Option<Vec<String>> =
            path.iter().map(|v| graph.vertex(*v).map(|p| p.label())).collect();
        Some(labels?.join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u32) -> VertexId { VertexId(n) }

    fn sample() -> SearchTree {
        // 0 -> 1 -> 3, 0 -> 2
        let mut t = SearchTree::new(SearchKind::BreadthFirst, v(0));
        t.attach(v(0), v(1), Some(2.0));
        t.attach(v(0), v(2), None);
        t.attach(v(1), v(3), Some(0.5));
        t
    }

    #[test]
    fn path_and_cost_walk_back_to_root() {
        let t = sample();
        assert_eq!(t.path(v(3)), Some(vec![v(0), v(1), v(3)]));
        assert_eq!(t.cost(v(3)), Some(2.5));
        assert_eq!(t.cost(v(2)), Some(1.0));
        assert_eq!(t.path(v(0)), Some(vec![v(0)]));
        assert_eq!(t.cost(v(0)), Some(0.0));
        assert_eq!(t.path(v(9)), None);
        assert_eq!(t.cost(v(9)), None);
    }

    #[test]
    fn levels_group_by_depth() {
        let t = sample();
        assert_eq!(t.levels(), vec![vec![v(0)], vec![v(1), v(2)], vec![v(3)]]);
        assert_eq!(t.total_cost(), 3.5);
        assert_eq!(t.vertices_found(), 4);
        assert_eq!(t.parent(v(3)), Some(v(1)));
        assert_eq!(t.parent(v(0)), None);
    }

    #[test]
    fn kind_parses_ui_labels() {
        assert_eq!("Depth-First Search".parse::<SearchKind>().unwrap(), SearchKind::DepthFirst);
        assert_eq!("Total Shortest Distance".parse::<SearchKind>().unwrap(), SearchKind::MinimumSpanningTree);
        assert_eq!("sssp".parse::<SearchKind>().unwrap(), SearchKind::ShortestPath);
        assert!("astar".parse::<SearchKind>().is_err());
    }
}
