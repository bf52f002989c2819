use crate::campus::{NodeId, PathRecord, Point};
use rustc_hash::FxHashMap;

/// Adjacency list keyed by building id. Neighbor order follows path-record
/// insertion order, which is what makes search results deterministic.
pub type Graph = FxHashMap<NodeId, Vec<Neighbor>>;

#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub node: NodeId,
    pub distance: f64,
    pub points: Vec<Point>,
}

/// Expands path records into a symmetric adjacency list. Both endpoints get
/// an entry even when no record connects them to anything else, and parallel
/// records stay as separate neighbor entries. The point sequence is stored
/// un-reversed in both directions; geometry consumers reverse it when
/// walking an edge end to start.
pub fn build_graph(paths: &[PathRecord]) -> Graph {
    let mut graph = Graph::default();

    for record in paths {
        graph
            .entry(record.start.clone())
            .or_default()
            .push(Neighbor {
                node: record.end.clone(),
                distance: record.distance,
                points: record.points.clone(),
            });
        graph.entry(record.end.clone()).or_default().push(Neighbor {
            node: record.start.clone(),
            distance: record.distance,
            points: record.points.clone(),
        });
    }

    graph
}
