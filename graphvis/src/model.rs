use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GraphError;

/// Stable vertex handle, assigned at insertion and never reused by the graph that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub u32);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Vertex label. Labels are either small integers (generated points) or free text (map cities).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VertexName {
    Number(i64),
    Text(String),
}

impl VertexName {
    /// Lookup key: numbers by their decimal form, text trimmed and lowercased.
    /// `Number(6)` and `Text("6")` share a key on purpose, the UI only ever has the typed string.
    pub fn key(&self) -> String {
        match self {
            VertexName::Number(n) => n.to_string(),
            VertexName::Text(s) => normalize_name(s),
        }
    }
}

pub(crate) fn normalize_name(s: &str) -> String {
    s.trim().to_lowercase()
}

impl fmt::Display for VertexName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexName::Number(n) => write!(f, "{}", n),
            VertexName::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for VertexName {
    fn from(n: i64) -> Self { VertexName::Number(n) }
}

impl From<&str> for VertexName {
    fn from(s: &str) -> Self { VertexName::Text(s.to_string()) }
}

impl From<String> for VertexName {
    fn from(s: String) -> Self { VertexName::Text(s) }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<VertexName>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y, name: None }
    }

    pub fn named(x: f64, y: f64, name: impl Into<VertexName>) -> Self {
        Point { x, y, name: Some(name.into()) }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        crate::geometry::math::distance(self.x, self.y, other.x, other.y)
    }

    /// Name if present, otherwise the coordinates; used for path strings and dumps.
    pub fn label(&self) -> String {
        match &self.name {
            Some(n) => n.to_string(),
            None => format!("({}, {})", self.x, self.y),
        }
    }
}

/// Anything with planar coordinates; the sort and closest-pair algorithms are generic over it.
pub trait Planar {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x(),
            Axis::Y => self.y(),
        }
    }
}

impl Planar for Point {
    fn x(&self) -> f64 { self.x }
    fn y(&self) -> f64 { self.y }
}

impl Planar for (f64, f64) {
    fn x(&self) -> f64 { self.0 }
    fn y(&self) -> f64 { self.1 }
}

impl<P: Planar> Planar for &P {
    fn x(&self) -> f64 { (**self).x() }
    fn y(&self) -> f64 { (**self).y() }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

impl FromStr for Axis {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            other => Err(GraphError::InvalidAxis(other.to_string())),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
        })
    }
}

/// One adjacency entry. `weight: None` is an unweighted edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub vertex: VertexId,
    pub weight: Option<f64>,
}

impl Neighbor {
    /// Cost used by the weighted searches; unweighted edges count as one hop.
    pub fn cost(&self) -> f64 {
        self.weight.unwrap_or(UNWEIGHTED_COST)
    }
}

pub const UNWEIGHTED_COST: f64 = 1.0;

/// Undirected edge as listed for rendering: `a` was inserted before `b`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub a: VertexId,
    pub b: VertexId,
    pub weight: Option<f64>,
}
