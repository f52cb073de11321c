use graphvis::fixtures::load_map;
use graphvis::{Graph, GraphError, Point, SearchKind, SearchTree, VertexId};

const ALL: [SearchKind; 4] = [
    SearchKind::DepthFirst,
    SearchKind::BreadthFirst,
    SearchKind::MinimumSpanningTree,
    SearchKind::ShortestPath,
];

/// Two components: a 5-vertex ring with a chord, and a separate pair.
fn two_components() -> (Graph, Vec<VertexId>) {
    let mut g = Graph::new();
    let v: Vec<VertexId> = (0..7)
        .map(|i| g.add_vertex(Point::named(i as f64 * 10.0, (i % 2) as f64, i as i64)).unwrap())
        .collect();
    for i in 0..5 {
        g.add_edge(v[i], v[(i + 1) % 5], Some((i + 1) as f64)).unwrap();
    }
    g.add_edge(v[0], v[2], Some(2.5)).unwrap();
    g.add_edge(v[5], v[6], None).unwrap();
    (g, v)
}

fn assert_tree_shape(t: &SearchTree, n: usize) {
    for &v in t.search_order() {
        let mut cur = v;
        let mut steps = 0;
        while cur != t.root() {
            cur = t.parent(cur).expect("reached vertex has a parent chain");
            steps += 1;
            assert!(steps <= n, "parent chain from {:?} does not end", v);
        }
    }
    assert_eq!(t.tree_edges().len() + 1, t.vertices_found());
}

#[test]
fn every_search_covers_exactly_the_start_component() {
    let (g, v) = two_components();
    for kind in ALL {
        for &start in &v[..5] {
            let t = g.search(kind, start).unwrap();
            assert_eq!(t.vertices_found(), 5, "{:?} from {:?}", kind, start);
            assert_eq!(t.search_order()[0], start);
            assert!(!t.reached(v[5]) && !t.reached(v[6]));
            assert_tree_shape(&t, g.vertex_count());
        }
        let t = g.search(kind, v[6]).unwrap();
        assert_eq!(t.search_order(), &[v[6], v[5]]);
    }
}

#[test]
fn unreachable_target_is_not_an_error() {
    let (g, v) = two_components();
    let t = g.shortest_path(v[0]).unwrap();
    assert_eq!(t.path(v[6]), None);
    assert_eq!(t.cost(v[6]), None);
}

#[test]
fn unknown_start_fails_for_every_search() {
    let (g, _) = two_components();
    for kind in ALL {
        assert!(matches!(g.search(kind, VertexId(99)), Err(GraphError::UnknownVertex(_))));
    }
}

#[test]
fn searches_are_deterministic() {
    let (g, v) = two_components();
    for kind in ALL {
        let a = g.search(kind, v[1]).unwrap();
        let b = g.search(kind, v[1]).unwrap();
        assert_eq!(a.search_order(), b.search_order());
        assert_eq!(a.tree_edges(), b.tree_edges());
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}

#[test]
fn seattle_to_houston_takes_the_cheapest_route() {
    let g = load_map("us").unwrap();
    let seattle = g.require_by_name("Seattle").unwrap();
    let houston = g.require_by_name("houston").unwrap();
    let t = g.shortest_path(seattle).unwrap();
    assert_eq!(t.cost(houston), Some(2665.0));
    assert_eq!(
        t.describe_path(&g, houston).unwrap(),
        "Seattle -> Denver -> Kansas City -> Dallas -> Houston"
    );
    assert_eq!(t.vertices_found(), 12);
}

#[test]
fn us_map_spanning_tree_weight() {
    let g = load_map("us").unwrap();
    let seattle = g.require_by_name("Seattle").unwrap();
    let t = g.minimum_spanning_tree(seattle).unwrap();
    assert_eq!(t.vertices_found(), 12);
    assert_eq!(t.total_cost(), 6513.0);
    // the same tree weight from any root
    let miami = g.require_by_name("Miami").unwrap();
    assert_eq!(g.minimum_spanning_tree(miami).unwrap().total_cost(), 6513.0);
}

#[test]
fn binary_map_is_a_tree() {
    let g = load_map("binary").unwrap();
    let root = g.require_by_name("43").unwrap();
    let t = g.bfs(root).unwrap();
    assert_eq!(t.vertices_found(), g.vertex_count());
    assert_eq!(t.tree_edges().len(), g.edge_count());
    let levels = t.levels();
    assert_eq!(levels.len(), 5);
    assert_eq!(levels[1].len(), 2);
    assert_eq!(g.minimum_spanning_tree(root).unwrap().total_cost(), 1500.0);
}

#[test]
fn four_cycle_spanning_tree_uses_three_smallest() {
    let mut g = Graph::new();
    let v: Vec<VertexId> = (0..4).map(|i| g.add_vertex(Point::named(0.0, i as f64, i as i64)).unwrap()).collect();
    g.add_edge(v[0], v[1], Some(7.0)).unwrap();
    g.add_edge(v[1], v[2], Some(2.0)).unwrap();
    g.add_edge(v[2], v[3], Some(5.0)).unwrap();
    g.add_edge(v[3], v[0], Some(3.0)).unwrap();
    let t = g.minimum_spanning_tree(v[1]).unwrap();
    assert_eq!(t.total_cost(), 10.0);
    assert!(t.tree_edges().iter().all(|e| e.weight != Some(7.0)));
}

#[test]
fn unweighted_edges_cost_one_hop() {
    let mut g = Graph::new();
    let v: Vec<VertexId> = (0..4).map(|i| g.add_vertex(Point::new(i as f64, 0.0)).unwrap()).collect();
    g.add_edge(v[0], v[1], None).unwrap();
    g.add_edge(v[1], v[2], None).unwrap();
    g.add_edge(v[2], v[3], None).unwrap();
    g.add_edge(v[0], v[3], Some(2.5)).unwrap();
    let t = g.shortest_path(v[0]).unwrap();
    assert_eq!(t.cost(v[2]), Some(2.0));
    assert_eq!(t.cost(v[3]), Some(2.5));
}

#[test]
fn search_to_self_is_trivial() {
    let (g, v) = two_components();
    let t = g.bfs(v[3]).unwrap();
    assert_eq!(t.path(v[3]), Some(vec![v[3]]));
    assert_eq!(t.cost(v[3]), Some(0.0));
    assert_eq!(t.describe_path(&g, v[3]).as_deref(), Some("3"));
}

#[test]
fn searches_see_graph_after_removal() {
    let (mut g, v) = two_components();
    g.remove_vertex(v[1]).unwrap();
    g.remove_vertex(v[2]).unwrap();
    // ring minus 1 and 2 leaves 0 - 4 - 3
    let t = g.dfs(v[0]).unwrap();
    assert_eq!(t.search_order(), &[v[0], v[4], v[3]]);
}
