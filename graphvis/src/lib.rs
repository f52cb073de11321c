//! Graph model and algorithms behind the graph visualizer.
//!
//! The graph is undirected and weighted; every algorithm runs to completion and hands back a
//! finished result (search tree, sorted order, closest pair) for the presentation layer to replay.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod random;
pub mod search_tree;
pub mod geometry {
    pub mod limits;
    pub mod math;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod closest_pair;
    pub mod merge_sort;
    pub mod shortest_path;
    pub mod spanning_tree;
    pub mod traversal;
}

pub use config::Settings;
pub use error::{GraphError, Result};
pub use model::{Axis, Edge, Neighbor, Planar, Point, VertexId, VertexName};
pub use search_tree::{SearchKind, SearchTree, TreeEdge};

use geometry::limits::{in_coord_bounds, MAX_VERTEX_IDS, MAX_VERTICES};
use geometry::math::within_radius;
use geometry::tolerance::is_valid_weight;
use log::{debug, warn};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Debug)]
pub(crate) struct Slot {
    pub(crate) point: Point,
    pub(crate) neighbors: Vec<Neighbor>,
}

#[derive(Clone, Debug)]
pub struct Graph {
    pub(crate) slots: Vec<Option<Slot>>,          // id is index, insertion ordered
    pub(crate) names: HashMap<String, VertexId>, // normalized name -> id
    pub(crate) live: usize,
    pub(crate) version: u64,
    pub(crate) settings: Settings,
}

/// Closest pair over the live vertex set.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VertexPair {
    pub a: VertexId,
    pub b: VertexId,
    pub distance: f64,
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            slots: Vec::new(),
            names: HashMap::new(),
            live: 0,
            version: 1,
            settings: Settings::default(),
        }
    }

    pub fn with_settings(settings: Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Graph { settings, ..Graph::new() })
    }

    /// Builds a graph from a vertex list and `(index_a, index_b, weight)` edges over that list.
    /// Nothing is built if any vertex or edge is rejected.
    pub fn from_parts(vertices: Vec<Point>, edges: &[(usize, usize, Option<f64>)]) -> Result<Graph> {
        let mut g = Graph::new();
        let ids = g.add_vertices(vertices)?;
        for &(a, b, w) in edges {
            let len = ids.len();
            let a = *ids.get(a).ok_or(GraphError::EdgeIndexOutOfRange { index: a, len })?;
            let b = *ids.get(b).ok_or(GraphError::EdgeIndexOutOfRange { index: b, len })?;
            g.add_edge(a, b, w)?;
        }
        Ok(g)
    }

    pub fn settings(&self) -> &Settings { &self.settings }

    pub fn set_settings(&mut self, settings: Settings) -> Result<()> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    /// Monotonic structural version; bumps on every successful vertex/edge/name change.
    pub fn version(&self) -> u64 { self.version }

    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    pub fn vertex_count(&self) -> usize { self.live }

    pub fn is_empty(&self) -> bool { self.live == 0 }

    pub fn edge_count(&self) -> usize {
        self.slots.iter().flatten().map(|s| s.neighbors.len()).sum::<usize>() / 2
    }

    /// Upper bound on raw id values issued so far; sizes per-vertex scratch arrays.
    pub(crate) fn id_bound(&self) -> usize { self.slots.len() }

    fn slot(&self, id: VertexId) -> Option<&Slot> {
        self.slots.get(id.0 as usize).and_then(|s| s.as_ref())
    }

    fn slot_mut(&mut self, id: VertexId) -> Option<&mut Slot> {
        self.slots.get_mut(id.0 as usize).and_then(|s| s.as_mut())
    }

    pub fn contains(&self, id: VertexId) -> bool { self.slot(id).is_some() }

    pub(crate) fn require(&self, id: VertexId) -> Result<()> {
        if self.contains(id) { Ok(()) } else { Err(GraphError::UnknownVertex(id)) }
    }

    // Vertices

    pub fn add_vertex(&mut self, point: Point) -> Result<VertexId> {
        if !in_coord_bounds(point.x) {
            return Err(GraphError::NonFiniteCoordinate { param: "x" });
        }
        if !in_coord_bounds(point.y) {
            return Err(GraphError::NonFiniteCoordinate { param: "y" });
        }
        if self.live >= MAX_VERTICES {
            return Err(GraphError::TooManyVertices { max: MAX_VERTICES });
        }
        if self.slots.len() >= MAX_VERTEX_IDS {
            return Err(GraphError::VertexIdsExhausted { max: MAX_VERTEX_IDS });
        }
        let key = point.name.as_ref().map(|n| n.key());
        if let Some(k) = &key {
            if self.names.contains_key(k) {
                return Err(GraphError::DuplicateName(k.clone()));
            }
        }
        let id = VertexId(self.slots.len() as u32);
        if let Some(k) = key {
            self.names.insert(k, id);
        }
        debug!("add vertex {} at ({}, {})", id, point.x, point.y);
        self.slots.push(Some(Slot { point, neighbors: Vec::new() }));
        self.live += 1;
        self.bump();
        Ok(id)
    }

    /// Adds all points or none of them.
    pub fn add_vertices(&mut self, points: Vec<Point>) -> Result<Vec<VertexId>> {
        let mut staged = self.clone();
        let mut ids = Vec::with_capacity(points.len());
        for p in points {
            ids.push(staged.add_vertex(p)?);
        }
        *self = staged;
        Ok(ids)
    }

    /// Names an unnamed vertex. Names are permanent once set.
    pub fn set_name(&mut self, id: VertexId, name: VertexName) -> Result<()> {
        let slot = self.slot(id).ok_or(GraphError::UnknownVertex(id))?;
        if slot.point.name.is_some() {
            return Err(GraphError::AlreadyNamed(id));
        }
        let key = name.key();
        if self.names.contains_key(&key) {
            return Err(GraphError::DuplicateName(key));
        }
        self.names.insert(key, id);
        if let Some(slot) = self.slot_mut(id) {
            slot.point.name = Some(name);
        }
        self.bump();
        Ok(())
    }

    /// Removes `id` and every edge touching it. Neighbor lists are cleaned up before the
    /// vertex's own entry goes, since its list is what says which lists need cleaning.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<Point> {
        let incident: Vec<VertexId> = match self.slot(id) {
            Some(s) => s.neighbors.iter().map(|n| n.vertex).collect(),
            None => return Err(GraphError::UnknownVertex(id)),
        };
        for n in incident {
            if let Some(other) = self.slot_mut(n) {
                other.neighbors.retain(|e| e.vertex != id);
            }
        }
        let slot = self.slots[id.0 as usize].take().ok_or(GraphError::UnknownVertex(id))?;
        if let Some(name) = &slot.point.name {
            self.names.remove(&name.key());
        }
        self.live -= 1;
        debug!("remove vertex {} ({} edges)", id, slot.neighbors.len());
        self.bump();
        debug_assert!(self.is_consistent());
        Ok(slot.point)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Point> {
        self.slot(id).map(|s| &s.point)
    }

    /// Live vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Point)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|s| (VertexId(i as u32), &s.point)))
    }

    pub fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices().map(|(id, _)| id).collect()
    }

    /// The `index`-th live vertex in insertion order; shifts as earlier vertices are removed.
    pub fn vertex_at(&self, index: usize) -> Option<VertexId> {
        self.vertices().nth(index).map(|(id, _)| id)
    }

    pub fn index_of(&self, id: VertexId) -> Option<usize> {
        self.vertices().position(|(v, _)| v == id)
    }

    pub fn neighbors(&self, id: VertexId) -> Option<&[Neighbor]> {
        self.slot(id).map(|s| s.neighbors.as_slice())
    }

    // Lookups (misses are expected during hit-testing, so they are not errors)

    /// Case-insensitive name lookup; numeric names match their decimal string.
    pub fn vertex_by_name(&self, name: &str) -> Option<VertexId> {
        self.names.get(&model::normalize_name(name)).copied()
    }

    /// Name lookup for searches started from typed input.
    pub fn require_by_name(&self, name: &str) -> Result<VertexId> {
        self.vertex_by_name(name).ok_or_else(|| GraphError::UnknownName(name.to_string()))
    }

    /// First vertex in insertion order within `radius` of `(x, y)`. Overlapping candidates
    /// resolve to the earliest inserted one, not the nearest.
    pub fn vertex_in_radius(&self, x: f64, y: f64, radius: f64) -> Option<VertexId> {
        self.vertices()
            .find(|(_, p)| within_radius(x, y, p.x, p.y, radius))
            .map(|(id, _)| id)
    }

    pub fn has_vertex_in_radius(&self, x: f64, y: f64, radius: f64) -> bool {
        self.vertex_in_radius(x, y, radius).is_some()
    }

    /// Pointer hit-test using the configured radius (widened for touch).
    pub fn hit_test(&self, x: f64, y: f64, touch: bool) -> Option<VertexId> {
        self.vertex_in_radius(x, y, self.settings.hit_radius(touch))
    }

    /// Whether a new point at `(x, y)` keeps clear of every existing point.
    pub fn can_place(&self, x: f64, y: f64) -> bool {
        !self.has_vertex_in_radius(x, y, self.settings.overlap_radius())
    }

    // Edges

    /// Connects `a` and `b`. Returns `false` when the edge already existed, in which case only
    /// its weight is updated on both sides.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, weight: Option<f64>) -> Result<bool> {
        self.require(a)?;
        self.require(b)?;
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        if let Some(w) = weight {
            if !is_valid_weight(w) {
                return Err(GraphError::InvalidWeight(w));
            }
        }
        if self.has_edge(a, b) {
            self.write_weight(a, b, weight);
            self.bump();
            return Ok(false);
        }
        if let Some(s) = self.slot_mut(a) {
            s.neighbors.push(Neighbor { vertex: b, weight });
        }
        if let Some(s) = self.slot_mut(b) {
            s.neighbors.push(Neighbor { vertex: a, weight });
        }
        debug!("add edge {} - {} weight {:?}", a, b, weight);
        self.bump();
        Ok(true)
    }

    pub fn set_weight(&mut self, a: VertexId, b: VertexId, weight: Option<f64>) -> Result<()> {
        self.require(a)?;
        self.require(b)?;
        if let Some(w) = weight {
            if !is_valid_weight(w) {
                return Err(GraphError::InvalidWeight(w));
            }
        }
        if !self.has_edge(a, b) {
            return Err(GraphError::EdgeNotFound(a, b));
        }
        self.write_weight(a, b, weight);
        self.bump();
        Ok(())
    }

    fn write_weight(&mut self, a: VertexId, b: VertexId, weight: Option<f64>) {
        for (from, to) in [(a, b), (b, a)] {
            if let Some(s) = self.slot_mut(from) {
                for n in s.neighbors.iter_mut().filter(|n| n.vertex == to) {
                    n.weight = weight;
                }
            }
        }
    }

    /// Removes the edge between `a` and `b`; `Ok(false)` if there was none.
    pub fn remove_edge(&mut self, a: VertexId, b: VertexId) -> Result<bool> {
        self.require(a)?;
        self.require(b)?;
        if !self.has_edge(a, b) {
            warn!("remove edge {} - {}: no such edge", a, b);
            return Ok(false);
        }
        if let Some(s) = self.slot_mut(a) {
            s.neighbors.retain(|n| n.vertex != b);
        }
        if let Some(s) = self.slot_mut(b) {
            s.neighbors.retain(|n| n.vertex != a);
        }
        self.bump();
        Ok(true)
    }

    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.edge(a, b).is_some()
    }

    pub fn edge(&self, a: VertexId, b: VertexId) -> Option<Edge> {
        let n = self.neighbors(a)?.iter().find(|n| n.vertex == b)?;
        Some(Edge { a, b, weight: n.weight })
    }

    /// Every undirected edge once, ordered by the earlier-inserted endpoint's adjacency list.
    pub fn edges(&self) -> Vec<Edge> {
        let mut out = Vec::with_capacity(self.edge_count());
        for (id, _) in self.vertices() {
            for n in self.neighbors(id).unwrap_or(&[]) {
                if id < n.vertex {
                    out.push(Edge { a: id, b: n.vertex, weight: n.weight });
                }
            }
        }
        out
    }

    /// Structural check: every neighbor exists, entries are mirrored with equal weights,
    /// and there are no self-loops or parallel entries.
    pub fn is_consistent(&self) -> bool {
        let mut names = 0;
        for (id, p) in self.vertices() {
            if let Some(n) = &p.name {
                names += 1;
                if self.names.get(&n.key()) != Some(&id) {
                    return false;
                }
            }
            let list = self.neighbors(id).unwrap_or(&[]);
            for (i, n) in list.iter().enumerate() {
                if n.vertex == id || list[..i].iter().any(|m| m.vertex == n.vertex) {
                    return false;
                }
                let mirrored = self
                    .neighbors(n.vertex)
                    .and_then(|back| back.iter().find(|m| m.vertex == id))
                    .map_or(false, |m| m.weight == n.weight);
                if !mirrored {
                    return false;
                }
            }
        }
        names == self.names.len() && self.live == self.vertices().count()
    }

    // Algorithms

    pub fn dfs(&self, start: VertexId) -> Result<SearchTree> {
        algorithms::traversal::dfs(self, start)
    }

    pub fn bfs(&self, start: VertexId) -> Result<SearchTree> {
        algorithms::traversal::bfs(self, start)
    }

    pub fn minimum_spanning_tree(&self, start: VertexId) -> Result<SearchTree> {
        algorithms::spanning_tree::minimum_spanning_tree(self, start)
    }

    pub fn shortest_path(&self, start: VertexId) -> Result<SearchTree> {
        algorithms::shortest_path::shortest_path(self, start)
    }

    pub fn search(&self, kind: SearchKind, start: VertexId) -> Result<SearchTree> {
        match kind {
            SearchKind::DepthFirst => self.dfs(start),
            SearchKind::BreadthFirst => self.bfs(start),
            SearchKind::MinimumSpanningTree => self.minimum_spanning_tree(start),
            SearchKind::ShortestPath => self.shortest_path(start),
        }
    }

    /// Vertex ids ordered by one coordinate, stable on ties.
    pub fn sorted_by(&self, axis: Axis) -> Vec<VertexId> {
        let (ids, points): (Vec<VertexId>, Vec<&Point>) = self.vertices().unzip();
        algorithms::merge_sort::sort_order(&points, axis)
            .into_iter()
            .map(|i| ids[i])
            .collect()
    }

    pub fn closest_pair(&self) -> Result<VertexPair> {
        let (ids, points): (Vec<VertexId>, Vec<&Point>) = self.vertices().unzip();
        let pair = algorithms::closest_pair::closest_pair(&points)?;
        Ok(VertexPair { a: ids[pair.first], b: ids[pair.second], distance: pair.distance })
    }
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, p) in self.vertices() {
            let names: Vec<String> = self
                .neighbors(id)
                .unwrap_or(&[])
                .iter()
                .filter_map(|n| self.vertex(n.vertex).map(|v| v.label()))
                .collect();
            let list = if names.is_empty() { "-".to_string() } else { names.join(", ") };
            writeln!(f, "vertex[{}]: x: {}, y: {} -> {}", p.label(), p.x, p.y, list)?;
        }
        Ok(())
    }
}
