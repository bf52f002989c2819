pub mod algorithm;
pub mod campus;
pub mod geometry;
pub mod graph;
pub mod pathfinding;
pub mod priority_queue;
pub mod string_normalization;

// Re-export commonly used items
pub use algorithm::Algorithm;
pub use campus::{Building, CampusDataError, CampusGraph, NodeId, PathRecord, Point};
pub use geometry::{polyline_length, route_geometry};
pub use graph::{Graph, Neighbor, build_graph};
pub use pathfinding::{
    SearchOutcome, WeightedRoute, bfs_find_path, dfs_all_paths, dijkstra_find_path, find_route,
    run_algorithm,
};
pub use priority_queue::PriorityQueue;
pub use string_normalization::clean_str;
