pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod dispatch;

// Re-export the public functions
pub use bfs::bfs_find_path;
pub use dfs::dfs_all_paths;
pub use dijkstra::{WeightedRoute, dijkstra_find_path};
pub use dispatch::{SearchOutcome, find_route, run_algorithm};
