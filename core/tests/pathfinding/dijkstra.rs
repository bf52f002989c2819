use campuspath_core::{PathRecord, build_graph, dijkstra_find_path};

fn record(start: &str, end: &str, distance: f64) -> PathRecord {
    PathRecord {
        start: start.to_string(),
        end: end.to_string(),
        points: vec![],
        distance,
    }
}

fn route(nodes: &[&str]) -> Vec<String> {
    nodes.iter().map(|node| node.to_string()).collect()
}

#[test]
fn test_dijkstra_prefers_lighter_two_leg_route() {
    let records = vec![
        record("a", "b", 5.0),
        record("b", "c", 3.0),
        record("a", "c", 10.0),
    ];
    let graph = build_graph(&records);

    let result = dijkstra_find_path(&graph, "a", "c");

    assert_eq!(result.path, Some(route(&["a", "b", "c"])));
    assert_eq!(result.distance, 8.0);
}

#[test]
fn test_dijkstra_distance_matches_traversed_edges() {
    let records = vec![
        record("a", "b", 4.0),
        record("b", "c", 2.5),
        record("c", "d", 1.5),
        record("a", "d", 100.0),
        record("b", "d", 50.0),
    ];
    let graph = build_graph(&records);

    let result = dijkstra_find_path(&graph, "a", "d");
    let path = result.path.expect("route should exist");

    let mut traversed = 0.0;
    for pair in path.windows(2) {
        let edge = records
            .iter()
            .find(|record| {
                (record.start == pair[0] && record.end == pair[1])
                    || (record.start == pair[1] && record.end == pair[0])
            })
            .expect("every leg should map to a record");
        traversed += edge.distance;
    }

    assert_eq!(result.distance, traversed);
    assert_eq!(result.distance, 8.0);
}

#[test]
fn test_dijkstra_skips_zero_weight_shortcut() {
    let records = vec![
        record("a", "b", 5.0),
        record("b", "c", 3.0),
        record("a", "c", 0.0),
    ];
    let graph = build_graph(&records);

    let result = dijkstra_find_path(&graph, "a", "c");

    assert_eq!(result.path, Some(route(&["a", "b", "c"])));
    assert_eq!(result.distance, 8.0);
}

#[test]
fn test_dijkstra_skips_negative_weight_shortcut() {
    let records = vec![
        record("a", "b", 5.0),
        record("b", "c", 3.0),
        record("a", "c", -2.0),
    ];
    let graph = build_graph(&records);

    let result = dijkstra_find_path(&graph, "a", "c");

    assert_eq!(result.path, Some(route(&["a", "b", "c"])));
    assert_eq!(result.distance, 8.0);
}

#[test]
fn test_dijkstra_only_invalid_edges_means_no_route() {
    let records = vec![record("a", "b", 0.0)];
    let graph = build_graph(&records);

    let result = dijkstra_find_path(&graph, "a", "b");

    assert_eq!(result.path, None);
    assert!(result.distance.is_infinite());
}

#[test]
fn test_dijkstra_improves_a_queued_estimate() {
    // "b" is first queued at 10 through the direct edge, then improved to 2
    // through "c" while the stale entry is still queued. The stale dequeue
    // must not change the answer.
    let records = vec![
        record("a", "b", 10.0),
        record("a", "c", 1.0),
        record("c", "b", 1.0),
    ];
    let graph = build_graph(&records);

    let result = dijkstra_find_path(&graph, "a", "b");

    assert_eq!(result.path, Some(route(&["a", "c", "b"])));
    assert_eq!(result.distance, 2.0);
}

#[test]
fn test_dijkstra_start_equals_end() {
    let records = vec![record("a", "b", 1.0)];
    let graph = build_graph(&records);

    let result = dijkstra_find_path(&graph, "a", "a");

    assert_eq!(result.path, Some(route(&["a"])));
    assert_eq!(result.distance, 0.0);
}

#[test]
fn test_dijkstra_unknown_endpoints_yield_no_route() {
    let records = vec![record("a", "b", 1.0)];
    let graph = build_graph(&records);

    let from_ghost = dijkstra_find_path(&graph, "ghost", "a");
    assert_eq!(from_ghost.path, None);
    assert!(from_ghost.distance.is_infinite());

    let to_ghost = dijkstra_find_path(&graph, "a", "ghost");
    assert_eq!(to_ghost.path, None);
    assert!(to_ghost.distance.is_infinite());
}

#[test]
fn test_dijkstra_no_route_reports_infinite_distance() {
    let records = vec![record("a", "b", 1.0), record("c", "d", 1.0)];
    let graph = build_graph(&records);

    let result = dijkstra_find_path(&graph, "a", "c");

    assert_eq!(result.path, None);
    assert!(result.distance.is_infinite());
}
