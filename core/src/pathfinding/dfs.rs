use crate::campus::NodeId;
use crate::graph::Graph;
use rustc_hash::FxHashSet;

/// Enumerates every simple path from `start` to `end`, in neighbor-order
/// discovery order. The visited set is scoped to the current branch and
/// unwound on backtrack so sibling branches may reuse a node; that scoping
/// is what yields all paths instead of one. Returns an empty vec when no
/// path exists.
pub fn dfs_all_paths(graph: &Graph, start: &str, end: &str) -> Vec<Vec<NodeId>> {
    let mut all_paths = Vec::new();
    let mut path = Vec::new();
    let mut visited = FxHashSet::default();

    collect_paths(graph, start, end, &mut path, &mut visited, &mut all_paths);

    all_paths
}

fn collect_paths(
    graph: &Graph,
    node: &str,
    end: &str,
    path: &mut Vec<NodeId>,
    visited: &mut FxHashSet<NodeId>,
    all_paths: &mut Vec<Vec<NodeId>>,
) {
    path.push(node.to_string());
    visited.insert(node.to_string());

    if node == end {
        all_paths.push(path.clone());
    } else if let Some(neighbors) = graph.get(node) {
        for neighbor in neighbors {
            if !visited.contains(neighbor.node.as_str()) {
                collect_paths(graph, &neighbor.node, end, path, visited, all_paths);
            }
        }
    }

    // backtrack
    path.pop();
    visited.remove(node);
}
