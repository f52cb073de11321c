use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

pub use api::{init_logging, map_names, set_panic_hook};

#[wasm_bindgen]
pub struct Graph { pub(crate) inner: graphvis::Graph }

impl Graph {
    pub fn rs_new() -> Graph { Graph { inner: graphvis::Graph::new() } }
    pub fn rs_from(inner: graphvis::Graph) -> Graph { Graph { inner } }
}
