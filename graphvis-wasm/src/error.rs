use graphvis::GraphError;
use js_sys::Object;
use wasm_bindgen::prelude::*;

use crate::interop::{new_obj, set_kv};

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

pub fn from_graph_error(e: &GraphError) -> JsValue {
    err(e.code(), e.to_string(), error_data(e).map(Into::into))
}

/// `ok(value)` on success, the typed error envelope otherwise.
pub fn wrap<T>(r: graphvis::Result<T>, f: impl FnOnce(T) -> JsValue) -> JsValue {
    match r {
        Ok(v) => ok(f(v)),
        Err(e) => from_graph_error(&e),
    }
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

fn error_data(e: &GraphError) -> Option<Object> {
    let d = new_obj();
    match e {
        GraphError::UnknownVertex(id) | GraphError::AlreadyNamed(id) | GraphError::SelfLoop(id) => {
            set_kv(&d, "id", &JsValue::from_f64(id.0 as f64));
        }
        GraphError::UnknownName(name) | GraphError::DuplicateName(name) => {
            set_kv(&d, "name", &JsValue::from_str(name));
        }
        GraphError::InvalidWeight(w) => set_kv(&d, "got", &JsValue::from_f64(*w)),
        GraphError::EdgeNotFound(a, b) => {
            set_kv(&d, "a", &JsValue::from_f64(a.0 as f64));
            set_kv(&d, "b", &JsValue::from_f64(b.0 as f64));
        }
        GraphError::NonFiniteCoordinate { param } => set_kv(&d, "param", &JsValue::from_str(param)),
        GraphError::TooManyVertices { max } | GraphError::VertexIdsExhausted { max } => {
            set_kv(&d, "max", &JsValue::from_f64(*max as f64));
        }
        GraphError::EdgeIndexOutOfRange { index, len } => {
            set_kv(&d, "index", &JsValue::from_f64(*index as f64));
            set_kv(&d, "len", &JsValue::from_f64(*len as f64));
        }
        GraphError::NotEnoughPoints { got } => set_kv(&d, "got", &JsValue::from_f64(*got as f64)),
        GraphError::InvalidAxis(got) | GraphError::UnknownSearch(got) | GraphError::UnknownMap(got) => {
            set_kv(&d, "got", &JsValue::from_str(got));
        }
        GraphError::InvalidSetting { field } => set_kv(&d, "field", &JsValue::from_str(field)),
        GraphError::Fixture(_) | GraphError::InvalidSettings(_) => return None,
    }
    Some(d)
}
