use super::{bfs_find_path, dfs_all_paths, dijkstra_find_path};
use crate::algorithm::Algorithm;
use crate::campus::{NodeId, PathRecord};
use crate::graph::{Graph, build_graph};

/// What a search produced, tagged by algorithm family instead of the
/// anything-shaped union the collaborating UI would otherwise have to
/// sniff.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// One shortest-by-hops path, when any exists.
    SinglePath(Option<Vec<NodeId>>),
    /// Every simple path between the endpoints; empty means none exist.
    AllPaths(Vec<Vec<NodeId>>),
    /// Minimum-distance path plus its total weight.
    WeightedPath {
        path: Option<Vec<NodeId>>,
        distance: f64,
    },
    /// The requested algorithm name is not recognized.
    Unsupported,
}

impl SearchOutcome {
    /// The first (or only) path, when one was found.
    pub fn primary_path(&self) -> Option<&[NodeId]> {
        match self {
            Self::SinglePath(Some(path)) => Some(path),
            Self::AllPaths(paths) => paths.first().map(Vec::as_slice),
            Self::WeightedPath {
                path: Some(path), ..
            } => Some(path),
            _ => None,
        }
    }

    /// Every path found, in discovery order.
    pub fn paths(&self) -> Vec<&[NodeId]> {
        match self {
            Self::SinglePath(Some(path)) => vec![path.as_slice()],
            Self::AllPaths(paths) => paths.iter().map(Vec::as_slice).collect(),
            Self::WeightedPath {
                path: Some(path), ..
            } => vec![path.as_slice()],
            _ => Vec::new(),
        }
    }

    /// Total traversed weight. Only weighted searches report one, and only
    /// when a path exists.
    pub fn distance(&self) -> Option<f64> {
        match self {
            Self::WeightedPath {
                path: Some(_),
                distance,
            } => Some(*distance),
            _ => None,
        }
    }

    pub fn found(&self) -> bool {
        self.primary_path().is_some()
    }
}

/// Runs `algorithm` over an already-built graph.
pub fn run_algorithm(
    graph: &Graph,
    algorithm: Algorithm,
    start: &str,
    end: &str,
) -> SearchOutcome {
    match algorithm {
        Algorithm::Bfs => SearchOutcome::SinglePath(bfs_find_path(graph, start, end)),
        Algorithm::Dfs => SearchOutcome::AllPaths(dfs_all_paths(graph, start, end)),
        Algorithm::Dijkstra => {
            let route = dijkstra_find_path(graph, start, end);
            SearchOutcome::WeightedPath {
                path: route.path,
                distance: route.distance,
            }
        }
    }
}

/// Builds the graph fresh from the records and dispatches by name. An
/// unknown name produces `Unsupported` rather than an error, so callers
/// always get an outcome to render.
pub fn find_route(paths: &[PathRecord], algorithm: &str, start: &str, end: &str) -> SearchOutcome {
    let Some(algorithm) = Algorithm::from_name(algorithm) else {
        return SearchOutcome::Unsupported;
    };

    let graph = build_graph(paths);
    run_algorithm(&graph, algorithm, start, end)
}
