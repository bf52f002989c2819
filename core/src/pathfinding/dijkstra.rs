use crate::campus::NodeId;
use crate::graph::Graph;
use crate::priority_queue::PriorityQueue;
use rustc_hash::FxHashMap;
use tracing::warn;

/// Weighted search result. `distance` stays `f64::INFINITY` when no path
/// exists, keeping absence distinct from a zero-length route.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedRoute {
    pub path: Option<Vec<NodeId>>,
    pub distance: f64,
}

/// Single-source shortest path with early exit at `end`. Edges whose weight
/// is not a positive finite number are skipped as non-traversable, with a
/// warning. Superseded queue entries are left in place: relaxation against
/// a non-improving distance is a no-op, so a stale dequeue costs a little
/// extra work but never a wrong answer.
pub fn dijkstra_find_path(graph: &Graph, start: &str, end: &str) -> WeightedRoute {
    let mut distances: FxHashMap<&str, f64> = graph
        .keys()
        .map(|node| (node.as_str(), f64::INFINITY))
        .collect();
    let mut previous: FxHashMap<&str, &str> = FxHashMap::default();
    let mut queue: PriorityQueue<&str, f64> = PriorityQueue::new();

    distances.insert(start, 0.0);
    queue.enqueue(start, 0.0);

    while let Some(item) = queue.dequeue() {
        let current = item.element;

        if current == end {
            return WeightedRoute {
                path: Some(reconstruct_path(&previous, end)),
                distance: distances.get(end).copied().unwrap_or(f64::INFINITY),
            };
        }

        let current_distance = distances.get(current).copied().unwrap_or(f64::INFINITY);
        let Some(neighbors) = graph.get(current) else {
            continue;
        };

        for neighbor in neighbors {
            if !(neighbor.distance.is_finite() && neighbor.distance > 0.0) {
                warn!(
                    from = current,
                    to = neighbor.node.as_str(),
                    weight = neighbor.distance,
                    "skipping edge with invalid weight"
                );
                continue;
            }

            let candidate = current_distance + neighbor.distance;
            let known = distances
                .get(neighbor.node.as_str())
                .copied()
                .unwrap_or(f64::INFINITY);
            if candidate < known {
                distances.insert(neighbor.node.as_str(), candidate);
                previous.insert(neighbor.node.as_str(), current);
                queue.enqueue(neighbor.node.as_str(), candidate);
            }
        }
    }

    WeightedRoute {
        path: None,
        distance: f64::INFINITY,
    }
}

fn reconstruct_path(previous: &FxHashMap<&str, &str>, end: &str) -> Vec<NodeId> {
    let mut path = vec![end.to_string()];
    let mut node = end;

    while let Some(&parent) = previous.get(node) {
        path.push(parent.to_string());
        node = parent;
    }

    path.reverse();
    path
}
