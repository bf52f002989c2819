use campuspath_core::{NodeId, PathRecord, Point};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Deserialize)]
pub struct RouteQuery {
    pub from: String,
    pub to: String,
    /// Kept as a raw name so unknown algorithms reach the dispatcher's
    /// empty envelope instead of failing query deserialization.
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

fn default_algorithm() -> String {
    "bfs".to_string()
}

#[derive(Serialize, Deserialize)]
pub struct SearchStats {
    pub duration_ms: u64,
}

/// Normalized route envelope: every algorithm reports a (possibly empty)
/// list of paths; only weighted searches carry a distance.
#[derive(Serialize, Deserialize)]
pub struct RouteResponse {
    pub from: NodeId,
    pub to: NodeId,
    pub algorithm: String,
    pub found: bool,
    pub paths: Vec<Vec<NodeId>>,
    pub distance: Option<f64>,
    pub geometry: Vec<Point>,
    pub search_stats: SearchStats,
}

#[derive(Serialize, Deserialize)]
pub struct BuildingOption {
    pub id: NodeId,
    pub name: String,
}

#[derive(Serialize, Deserialize)]
pub struct BuildingsResponse {
    pub buildings: Vec<BuildingOption>,
    pub count: usize,
}

#[derive(Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_buildings: usize,
    pub total_paths: usize,
}

#[derive(Deserialize)]
pub struct AddBuildingRequest {
    pub building: NewBuilding,
}

#[derive(Deserialize)]
pub struct NewBuilding {
    pub id: NodeId,
    pub coordinates: Point,
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize)]
pub struct UpdatePathsRequest {
    pub paths: Vec<PathRecord>,
}

#[derive(Deserialize)]
pub struct BlockPathRequest {
    pub start: NodeId,
    pub end: NodeId,
}
