//! Error type for graph mutations, searches and the geometric algorithms.
//!
//! Lookups that are expected to miss during hit-testing (by name, by radius) return `Option`
//! instead; everything here is a caller mistake the UI should surface.

use crate::model::VertexId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex {0} is not in the graph")]
    UnknownVertex(VertexId),

    #[error("no vertex named '{0}'")]
    UnknownName(String),

    #[error("a vertex named '{0}' already exists")]
    DuplicateName(String),

    #[error("vertex {0} is already named")]
    AlreadyNamed(VertexId),

    #[error("edge endpoints cannot be the same vertex ({0})")]
    SelfLoop(VertexId),

    #[error("edge weight must be finite and non-negative, got {0}")]
    InvalidWeight(f64),

    #[error("no edge between {0} and {1}")]
    EdgeNotFound(VertexId, VertexId),

    #[error("parameter '{param}' must be finite and within coordinate bounds")]
    NonFiniteCoordinate { param: &'static str },

    #[error("vertex limit of {max} reached")]
    TooManyVertices { max: usize },

    #[error("all {max} vertex ids have been issued; start a new graph")]
    VertexIdsExhausted { max: usize },

    #[error("edge endpoint index {index} is outside the vertex list of length {len}")]
    EdgeIndexOutOfRange { index: usize, len: usize },

    #[error("closest pair needs at least two points, got {got}")]
    NotEnoughPoints { got: usize },

    #[error("axis must be 'x' or 'y', got '{0}'")]
    InvalidAxis(String),

    #[error("unknown search '{0}'")]
    UnknownSearch(String),

    #[error("no graph map to load with the name '{0}'")]
    UnknownMap(String),

    #[error("map fixture is malformed: {0}")]
    Fixture(#[source] serde_json::Error),

    #[error("settings are malformed: {0}")]
    InvalidSettings(#[source] serde_json::Error),

    #[error("setting '{field}' must be finite and positive")]
    InvalidSetting { field: &'static str },
}

impl GraphError {
    /// Stable machine-readable code, used by the browser binding's error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            GraphError::UnknownVertex(_) => "unknown_vertex",
            GraphError::UnknownName(_) => "unknown_name",
            GraphError::DuplicateName(_) => "duplicate_name",
            GraphError::AlreadyNamed(_) => "already_named",
            GraphError::SelfLoop(_) => "self_loop",
            GraphError::InvalidWeight(_) => "invalid_weight",
            GraphError::EdgeNotFound(..) => "edge_not_found",
            GraphError::NonFiniteCoordinate { .. } => "non_finite",
            GraphError::TooManyVertices { .. } => "too_many_vertices",
            GraphError::VertexIdsExhausted { .. } => "ids_exhausted",
            GraphError::EdgeIndexOutOfRange { .. } => "edge_index_out_of_range",
            GraphError::NotEnoughPoints { .. } => "not_enough_points",
            GraphError::InvalidAxis(_) => "invalid_axis",
            GraphError::UnknownSearch(_) => "unknown_search",
            GraphError::UnknownMap(_) => "unknown_map",
            GraphError::Fixture(_) => "fixture",
            GraphError::InvalidSettings(_) | GraphError::InvalidSetting { .. } => "invalid_settings",
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let e = GraphError::UnknownVertex(VertexId(7));
        assert_eq!(e.to_string(), "vertex #7 is not in the graph");
        assert_eq!(e.code(), "unknown_vertex");
        let e = GraphError::InvalidAxis("z".into());
        assert!(e.to_string().contains("'z'"));
    }
}
