use crate::Graph;
use graphvis::fixtures;
use graphvis::{Axis, Point, SearchKind, SearchTree, Settings, VertexId};
use serde::Serialize;
use std::str::FromStr;
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;
use crate::error;
use crate::interop::{arr_f64, arr_u32, new_obj, set_kv, to_js};

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes `log` output to the browser console at `level` ("error" .. "trace", default "info")
/// and installs the panic hook. Returns `false` when a logger was already installed.
#[wasm_bindgen]
pub fn init_logging(level: &str) -> bool {
    set_panic_hook();
    let lvl = log::Level::from_str(level).unwrap_or(log::Level::Info);
    match console_log::init_with_level(lvl) {
        Ok(()) => true,
        Err(_) => {
            web_sys::console::warn_1(&JsValue::from_str("graphvis: logger already initialized"));
            false
        }
    }
}

#[wasm_bindgen]
pub fn map_names() -> JsValue {
    to_js(&fixtures::MAP_NAMES)
}

#[derive(Serialize)]
struct SearchJs<'a> {
    kind: SearchKind,
    root: VertexId,
    order: &'a [VertexId],
    edges: &'a [graphvis::TreeEdge],
    levels: Vec<Vec<VertexId>>,
    total_cost: f64,
    vertices_found: usize,
}

impl<'a> From<&'a SearchTree> for SearchJs<'a> {
    fn from(t: &'a SearchTree) -> Self {
        SearchJs {
            kind: t.kind(),
            root: t.root(),
            order: t.search_order(),
            edges: t.tree_edges(),
            levels: t.levels(),
            total_cost: t.total_cost(),
            vertices_found: t.vertices_found(),
        }
    }
}

#[derive(Serialize)]
struct PathJs {
    found: bool,
    path: Vec<VertexId>,
    description: Option<String>,
    cost: Option<f64>,
    searched: usize,
}

#[derive(Serialize)]
struct MergeStepJs {
    low: usize,
    high: usize,
    order: Vec<VertexId>,
}

#[derive(Serialize)]
struct SortJs {
    axis: Axis,
    order: Vec<VertexId>,
    steps: Vec<MergeStepJs>,
}

#[derive(Serialize)]
struct VertexJs<'a> {
    id: VertexId,
    #[serde(flatten)]
    point: &'a Point,
}

#[wasm_bindgen]
impl Graph {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Graph {
        crate::Graph::rs_new()
    }

    /// Empty graph with interaction settings taken from a (partial) JS object.
    pub fn with_settings(settings: JsValue) -> Result<Graph, JsValue> {
        let s: Settings = if settings.is_undefined() || settings.is_null() {
            Settings::default()
        } else {
            serde_wasm_bindgen::from_value(settings)
                .map_err(|e| error::err("invalid_settings", e.to_string(), None))?
        };
        graphvis::Graph::with_settings(s)
            .map(Graph::rs_from)
            .map_err(|e| error::from_graph_error(&e))
    }

    pub fn set_settings_json(&mut self, text: &str) -> JsValue {
        let r = Settings::from_json(text).and_then(|s| self.inner.set_settings(s));
        error::wrap(r, |_| JsValue::TRUE)
    }

    pub fn get_settings(&self) -> JsValue {
        to_js(self.inner.settings())
    }

    /// How many points the "generate points" action should create on this device.
    pub fn random_point_count(&self, mobile: bool) -> u32 {
        self.inner.settings().random_point_count(mobile) as u32
    }

    /// One of the built-in maps ("us", "binary") fitted into a `width` x `height` viewport.
    pub fn from_map(name: &str, width: f64, height: f64) -> Result<Graph, JsValue> {
        fixtures::load_map_fitted(name, width, height)
            .map(Graph::rs_from)
            .map_err(|e| error::from_graph_error(&e))
    }

    /// `count` random points (plus the demo edges that fit) from `seed`.
    pub fn random(count: u32, width: f64, height: f64, seed: u32) -> Result<Graph, JsValue> {
        graphvis::random::random_graph(count as usize, width, height, seed as u64)
            .map(Graph::rs_from)
            .map_err(|e| error::from_graph_error(&e))
    }

    pub fn version(&self) -> u64 {
        self.inner.version()
    }

    // Vertices
    pub fn add_vertex(&mut self, x: f64, y: f64) -> Option<u32> {
        self.inner.add_vertex(Point::new(x, y)).ok().map(|id| id.0)
    }
    pub fn add_vertex_res(&mut self, x: f64, y: f64) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        error::wrap(self.inner.add_vertex(Point::new(x, y)), |id| JsValue::from_f64(id.0 as f64))
    }
    pub fn add_named_vertex(&mut self, x: f64, y: f64, name: &str) -> JsValue {
        error::wrap(self.inner.add_vertex(Point::named(x, y, name)), |id| {
            JsValue::from_f64(id.0 as f64)
        })
    }
    pub fn set_name(&mut self, id: u32, name: &str) -> JsValue {
        error::wrap(self.inner.set_name(VertexId(id), name.into()), |_| JsValue::TRUE)
    }
    pub fn remove_vertex(&mut self, id: u32) -> bool {
        self.inner.remove_vertex(VertexId(id)).is_ok()
    }
    pub fn remove_vertex_res(&mut self, id: u32) -> JsValue {
        error::wrap(self.inner.remove_vertex(VertexId(id)), |p| to_js(&p))
    }
    pub fn vertex_count(&self) -> u32 {
        self.inner.vertex_count() as u32
    }
    pub fn get_vertex(&self, id: u32) -> JsValue {
        match self.inner.vertex(VertexId(id)) {
            Some(p) => to_js(p),
            None => JsValue::NULL,
        }
    }
    pub fn vertex_by_name(&self, name: &str) -> Option<u32> {
        self.inner.vertex_by_name(name).map(|id| id.0)
    }
    pub fn vertex_at(&self, index: u32) -> Option<u32> {
        self.inner.vertex_at(index as usize).map(|id| id.0)
    }
    pub fn neighbors(&self, id: u32) -> JsValue {
        match self.inner.neighbors(VertexId(id)) {
            Some(n) => to_js(n),
            None => JsValue::NULL,
        }
    }

    // Hit testing
    pub fn hit_test(&self, x: f64, y: f64, touch: bool) -> Option<u32> {
        self.inner.hit_test(x, y, touch).map(|id| id.0)
    }
    pub fn vertex_in_radius(&self, x: f64, y: f64, radius: f64) -> Option<u32> {
        self.inner.vertex_in_radius(x, y, radius).map(|id| id.0)
    }
    pub fn can_place(&self, x: f64, y: f64) -> bool {
        self.inner.can_place(x, y)
    }

    // Edges
    pub fn add_edge(&mut self, a: u32, b: u32, weight: Option<f64>) -> bool {
        self.inner.add_edge(VertexId(a), VertexId(b), weight).is_ok()
    }
    pub fn add_edge_res(&mut self, a: u32, b: u32, weight: Option<f64>) -> JsValue {
        error::wrap(self.inner.add_edge(VertexId(a), VertexId(b), weight), JsValue::from_bool)
    }
    pub fn set_weight(&mut self, a: u32, b: u32, weight: Option<f64>) -> JsValue {
        error::wrap(self.inner.set_weight(VertexId(a), VertexId(b), weight), |_| JsValue::TRUE)
    }
    pub fn remove_edge(&mut self, a: u32, b: u32) -> bool {
        self.inner.remove_edge(VertexId(a), VertexId(b)).unwrap_or(false)
    }
    pub fn remove_edge_res(&mut self, a: u32, b: u32) -> JsValue {
        error::wrap(self.inner.remove_edge(VertexId(a), VertexId(b)), JsValue::from_bool)
    }
    pub fn has_edge(&self, a: u32, b: u32) -> bool {
        self.inner.has_edge(VertexId(a), VertexId(b))
    }
    pub fn edge_count(&self) -> u32 {
        self.inner.edge_count() as u32
    }

    // Typed arrays getters
    pub fn get_vertex_data(&self) -> JsValue {
        let mut ids = Vec::with_capacity(self.inner.vertex_count());
        let mut pos = Vec::with_capacity(self.inner.vertex_count() * 2);
        for (id, p) in self.inner.vertices() {
            ids.push(id.0);
            pos.push(p.x);
            pos.push(p.y);
        }
        let obj = new_obj();
        set_kv(&obj, "ids", &arr_u32(&ids).into());
        set_kv(&obj, "positions", &arr_f64(&pos).into());
        obj.into()
    }
    /// `endpoints` as `[a0, b0, a1, b1, ..]`; unweighted edges have a NaN weight.
    pub fn get_edge_data(&self) -> JsValue {
        let edges = self.inner.edges();
        let mut endpoints = Vec::with_capacity(edges.len() * 2);
        let mut weights = Vec::with_capacity(edges.len());
        for e in &edges {
            endpoints.push(e.a.0);
            endpoints.push(e.b.0);
            weights.push(e.weight.unwrap_or(f64::NAN));
        }
        let obj = new_obj();
        set_kv(&obj, "endpoints", &arr_u32(&endpoints).into());
        set_kv(&obj, "weights", &arr_f64(&weights).into());
        obj.into()
    }
    pub fn get_vertices(&self) -> JsValue {
        let list: Vec<VertexJs> = self.inner.vertices().map(|(id, point)| VertexJs { id, point }).collect();
        to_js(&list)
    }

    // Searches
    /// Runs `kind` ("dfs", "bfs", "mst", "sssp" or a menu label) from the vertex named `start`.
    pub fn search(&self, kind: &str, start: &str) -> JsValue {
        match self.run_search(kind, start) {
            Ok(tree) => error::ok(to_js(&SearchJs::from(&tree))),
            Err(e) => error::from_graph_error(&e),
        }
    }
    pub fn find_path(&self, kind: &str, start: &str, target: &str) -> JsValue {
        let r = self.run_search(kind, start).and_then(|tree| {
            let to = self.inner.require_by_name(target)?;
            let path = tree.path(to);
            Ok(PathJs {
                found: path.is_some(),
                path: path.unwrap_or_default(),
                description: tree.describe_path(&self.inner, to),
                cost: tree.cost(to),
                searched: tree.vertices_found(),
            })
        });
        error::wrap(r, |p| to_js(&p))
    }

    // Geometry
    /// Merge sort of the vertices by `axis` ("x" or "y") with every merge for replay.
    pub fn sort_by_axis(&self, axis: &str) -> JsValue {
        let r = Axis::from_str(axis).map(|axis| {
            let (ids, points): (Vec<VertexId>, Vec<&Point>) = self.inner.vertices().unzip();
            let trace = graphvis::algorithms::merge_sort::merge_sort_traced(&points, axis);
            let to_ids = |order: &[usize]| order.iter().map(|&i| ids[i]).collect::<Vec<_>>();
            SortJs {
                axis,
                order: to_ids(&trace.order),
                steps: trace
                    .steps
                    .iter()
                    .map(|s| MergeStepJs { low: s.low, high: s.high, order: to_ids(&s.order) })
                    .collect(),
            }
        });
        error::wrap(r, |s| to_js(&s))
    }
    pub fn closest_pair(&self) -> JsValue {
        error::wrap(self.inner.closest_pair(), |p| to_js(&p))
    }

    pub fn describe(&self) -> String {
        self.inner.to_string()
    }
}

impl Graph {
    fn run_search(&self, kind: &str, start: &str) -> graphvis::Result<SearchTree> {
        let kind = SearchKind::from_str(kind)?;
        let root = self.inner.require_by_name(start)?;
        self.inner.search(kind, root)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}
