use crate::campus::NodeId;
use crate::graph::Graph;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Level-order search returning the first path to reach `end`, which is the
/// shortest by hop count. The queue holds whole paths-so-far; a node is
/// marked visited when its path is enqueued, not when it is dequeued, so
/// the queue never grows past one path per node. Edge weights are ignored.
pub fn bfs_find_path(graph: &Graph, start: &str, end: &str) -> Option<Vec<NodeId>> {
    let mut queue: VecDeque<Vec<NodeId>> = VecDeque::new();
    let mut visited: FxHashSet<NodeId> = FxHashSet::default();

    queue.push_back(vec![start.to_string()]);
    visited.insert(start.to_string());

    while let Some(path) = queue.pop_front() {
        let Some(node) = path.last() else { continue };

        if node == end {
            return Some(path);
        }

        let Some(neighbors) = graph.get(node.as_str()) else {
            continue;
        };
        for neighbor in neighbors {
            if !visited.contains(neighbor.node.as_str()) {
                visited.insert(neighbor.node.clone());
                let mut extended = path.clone();
                extended.push(neighbor.node.clone());
                queue.push_back(extended);
            }
        }
    }

    None
}
