use lamina_graphlib::{EdgeKey, Graph, GraphOptions};

fn compound() -> Graph<i32, ()> {
    Graph::new(GraphOptions {
        compound: true,
        ..Default::default()
    })
}

#[test]
fn nodes_are_enumerated_in_insertion_order() {
    let mut g: Graph<i32, ()> = Graph::default();
    g.set_node("c", 3);
    g.set_node("a", 1);
    g.set_node("b", 2);
    assert_eq!(g.nodes().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    assert_eq!(g.node_count(), 3);
}

#[test]
fn set_node_overwrites_label_in_place() {
    let mut g: Graph<i32, ()> = Graph::default();
    g.set_node("a", 1);
    g.set_node("b", 2);
    g.set_node("a", 10);
    assert_eq!(g.node("a"), Some(&10));
    assert_eq!(g.node_ids(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn ensure_node_uses_the_default_label_factory() {
    let mut g: Graph<i32, ()> = Graph::default();
    g.set_default_node_label(|| 7);
    g.ensure_node("a");
    g.set_node("b", 1);
    g.ensure_node("b");
    assert_eq!(g.node("a"), Some(&7));
    assert_eq!(g.node("b"), Some(&1));
}

#[test]
fn set_edge_creates_missing_endpoints() {
    let mut g: Graph<i32, &'static str> = Graph::default();
    g.set_edge_with_label("a", "b", "ab");
    assert!(g.has_node("a"));
    assert!(g.has_node("b"));
    assert!(g.has_edge("a", "b", None));
    assert!(!g.has_edge("b", "a", None));
    assert_eq!(g.edge("a", "b", None), Some(&"ab"));
}

#[test]
fn resetting_an_edge_keeps_a_single_entry() {
    let mut g: Graph<i32, u32> = Graph::default();
    g.set_edge_with_label("a", "b", 1);
    g.set_edge("a", "b");
    assert_eq!(g.edge("a", "b", None), Some(&1));
    g.set_edge_with_label("a", "b", 2);
    assert_eq!(g.edge("a", "b", None), Some(&2));
    assert_eq!(g.edge_count(), 1);

    if let Some(label) = g.edge_mut("a", "b", None) {
        *label = 3;
    }
    assert_eq!(g.edge("a", "b", None), Some(&3));
}

#[test]
fn successors_and_predecessors_follow_edge_insertion_order() {
    let mut g: Graph<i32, ()> = Graph::default();
    g.set_edge("a", "c");
    g.set_edge("a", "b");
    g.set_edge("d", "b");
    assert_eq!(g.successors("a"), vec!["c", "b"]);
    assert_eq!(g.predecessors("b"), vec!["a", "d"]);
    assert!(g.successors("b").is_empty());
    assert!(g.successors("missing").is_empty());
}

#[test]
fn multigraph_parallel_edges_report_each_neighbor_once() {
    let mut g: Graph<i32, ()> = Graph::new(GraphOptions {
        multigraph: true,
        ..Default::default()
    });
    g.set_edge_named("a", "b", Some("x"), None);
    g.set_edge_named("a", "b", Some("y"), None);
    g.set_edge("a", "c");
    assert_eq!(g.edge_count(), 3);
    assert!(g.has_edge("a", "b", Some("x")));
    assert!(!g.has_edge("a", "b", Some("z")));
    assert_eq!(g.successors("a"), vec!["b", "c"]);
    assert_eq!(g.out_edges("a").len(), 3);
    assert_eq!(g.in_edges("b").len(), 2);
}

#[test]
fn edge_names_are_dropped_without_multigraph() {
    let mut g: Graph<i32, ()> = Graph::default();
    g.set_edge_named("a", "b", Some("x"), None);
    g.set_edge_named("a", "b", Some("y"), None);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(
        g.edges().cloned().collect::<Vec<_>>(),
        vec![EdgeKey::between("a", "b")]
    );
}

#[test]
fn set_path_chains_consecutive_nodes() {
    let mut g: Graph<i32, ()> = Graph::default();
    g.set_path(&["a", "b", "c"]);
    assert!(g.has_edge("a", "b", None));
    assert!(g.has_edge("b", "c", None));
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn set_parent_is_ignored_on_non_compound_graphs() {
    let mut g: Graph<i32, ()> = Graph::default();
    g.set_node("a", 0);
    g.set_parent("a", "sg");
    assert_eq!(g.parent("a"), None);
    assert!(!g.has_node("sg"));
}

#[test]
fn reparenting_moves_a_child_between_parents() {
    let mut g = compound();
    g.set_parent("a", "sg1");
    g.set_parent("b", "sg1");
    assert_eq!(g.children("sg1"), vec!["a", "b"]);

    g.set_parent("a", "sg2");
    assert_eq!(g.parent("a"), Some("sg2"));
    assert_eq!(g.children("sg1"), vec!["b"]);
    assert_eq!(g.children("sg2"), vec!["a"]);
    assert!(g.has_children("sg2"));
    assert!(!g.has_children("a"));
    assert!(g.children("a").is_empty());
}

#[test]
fn children_root_lists_parentless_nodes() {
    let mut g = compound();
    g.set_node("x", 0);
    g.set_parent("a", "sg");
    assert_eq!(g.children_root(), vec!["x", "sg"]);
}

#[test]
fn edge_key_display_includes_the_name() {
    assert_eq!(EdgeKey::between("a", "b").to_string(), "a -> b");
    assert_eq!(EdgeKey::new("a", "b", Some("m")).to_string(), "a -> b (m)");
}
