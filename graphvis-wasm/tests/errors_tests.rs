use graphvis_wasm::Graph;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn is_err(v: &JsValue, code: &str) -> bool {
    if let Ok(ok) =
        Reflect::get(v, &JsValue::from_str("ok")).and_then(|x| x.as_bool().ok_or(JsValue::NULL))
    {
        if ok {
            return false;
        }
        if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
            if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
                return c.as_string().map_or(false, |s| s == code);
            }
        }
    }
    false
}

fn data(v: &JsValue, k: &str) -> JsValue {
    let err = Reflect::get(v, &JsValue::from_str("error")).unwrap();
    let d = Reflect::get(&err, &JsValue::from_str("data")).unwrap();
    Reflect::get(&d, &JsValue::from_str(k)).unwrap()
}

#[wasm_bindgen_test]
fn invalid_ids_return_typed_errors_without_mutating() {
    let mut g = Graph::new();
    let a = g.add_vertex(0.0, 0.0).unwrap();
    let ver = g.version();

    let r = g.remove_vertex_res(12345);
    assert!(is_err(&r, "unknown_vertex"));
    assert_eq!(data(&r, "id").as_f64(), Some(12345.0));
    assert_eq!(g.version(), ver, "state mutated on error");

    assert!(is_err(&g.add_edge_res(a, 77, None), "unknown_vertex"));
    assert!(is_err(&g.add_edge_res(a, a, None), "self_loop"));
    assert!(is_err(&g.remove_edge_res(a, 77), "unknown_vertex"));
    assert!(!g.add_edge(a, 77, None));
    assert_eq!(g.version(), ver);
}

#[wasm_bindgen_test]
fn coordinates_and_weights_are_validated() {
    let mut g = Graph::new();
    let r = g.add_vertex_res(f64::NAN, 0.0);
    assert!(is_err(&r, "non_finite"));
    assert_eq!(data(&r, "param").as_string().as_deref(), Some("x"));
    assert!(is_err(&g.add_vertex_res(0.0, f64::INFINITY), "non_finite"));
    assert!(g.add_vertex(f64::NAN, 1.0).is_none());
    assert_eq!(g.vertex_count(), 0);

    let a = g.add_vertex(0.0, 0.0).unwrap();
    let b = g.add_vertex(1.0, 0.0).unwrap();
    let r = g.add_edge_res(a, b, Some(-2.0));
    assert!(is_err(&r, "invalid_weight"));
    assert_eq!(data(&r, "got").as_f64(), Some(-2.0));
    assert!(is_err(&g.set_weight(a, b, Some(1.0)), "edge_not_found"));
    assert_eq!(g.edge_count(), 0);
}

#[wasm_bindgen_test]
fn naming_conflicts() {
    let mut g = Graph::new();
    g.add_named_vertex(0.0, 0.0, "Denver");
    let r = g.add_named_vertex(50.0, 0.0, "DENVER");
    assert!(is_err(&r, "duplicate_name"));
    assert_eq!(data(&r, "name").as_string().as_deref(), Some("denver"));

    let b = g.add_vertex(90.0, 0.0).unwrap();
    assert!(!is_err(&g.set_name(b, "Boise"), "already_named"));
    assert!(is_err(&g.set_name(b, "Reno"), "already_named"));
}

#[wasm_bindgen_test]
fn bad_inputs_to_searches_and_geometry() {
    let mut g = Graph::new();
    assert!(is_err(&g.closest_pair(), "not_enough_points"));
    g.add_named_vertex(0.0, 0.0, "a");
    assert!(is_err(&g.search("astar", "a"), "unknown_search"));
    assert!(is_err(&g.search("dfs", "nowhere"), "unknown_name"));
    assert!(is_err(&g.find_path("bfs", "a", "nowhere"), "unknown_name"));
    assert!(is_err(&g.sort_by_axis("z"), "invalid_axis"));
    assert!(is_err(&g.set_settings_json("{ not json"), "invalid_settings"));
    assert!(is_err(&g.set_settings_json(r#"{ "point_radius": -1 }"#), "invalid_settings"));
}

#[wasm_bindgen_test]
fn invalid_settings_object_and_negative_radius() {
    let obj = js_sys::Object::new();
    Reflect::set(&obj, &JsValue::from_str("point_radius"), &JsValue::from_f64(-5.0)).unwrap();
    let Err(e) = Graph::with_settings(obj.into()) else { panic!("negative radius accepted") };
    assert!(is_err(&e, "invalid_settings"));
    assert_eq!(data(&e, "field").as_string().as_deref(), Some("point_radius"));

    let mut g = Graph::new();
    g.add_vertex(0.0, 0.0).unwrap();
    assert_eq!(g.vertex_in_radius(1.0, 0.0, -5.0), None);
}
