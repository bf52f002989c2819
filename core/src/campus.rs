use crate::string_normalization::clean_str;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Opaque key identifying a campus location.
pub type NodeId = String;

/// A lng/lat pair as stored in the campus data file.
pub type Point = [f64; 2];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub coordinates: Point,
    #[serde(default)]
    pub name: String,
}

/// One bidirectional walking path between two buildings, carrying the
/// intermediate points a renderer needs to draw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathRecord {
    pub start: NodeId,
    pub end: NodeId,
    #[serde(default)]
    pub points: Vec<Point>,
    pub distance: f64,
}

/// The full campus dataset: buildings keyed by id plus the flat path list
/// the graph builder expands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampusGraph {
    pub buildings: FxHashMap<NodeId, Building>,
    pub paths: Vec<PathRecord>,
}

#[derive(Debug, Error)]
pub enum CampusDataError {
    #[error("failed to read campus data from {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse campus data in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to serialize campus data: {source}")]
    Serialize { source: serde_json::Error },
    #[error("failed to write campus data to {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl CampusGraph {
    pub fn from_json_file(path: &Path) -> Result<Self, CampusDataError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CampusDataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| CampusDataError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Saves the dataset pretty-printed, the format the map editor reads
    /// back.
    pub fn to_json_file(&self, path: &Path) -> Result<(), CampusDataError> {
        let raw = serde_json::to_string_pretty(self)
            .map_err(|source| CampusDataError::Serialize { source })?;
        std::fs::write(path, raw).map_err(|source| CampusDataError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Building ids in the order the selection dropdowns show them.
    pub fn sorted_building_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.buildings.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// (id, display name) pairs sorted by id. A building without a name
    /// falls back to its id.
    pub fn building_options(&self) -> Vec<(NodeId, String)> {
        self.sorted_building_ids()
            .into_iter()
            .map(|id| {
                let building = &self.buildings[id];
                let name = if building.name.is_empty() {
                    id.to_string()
                } else {
                    building.name.clone()
                };
                (id.to_string(), name)
            })
            .collect()
    }

    /// Removes every path between `start` and `end` in either orientation,
    /// returning how many records were dropped.
    pub fn block_path(&mut self, start: &str, end: &str) -> usize {
        let before = self.paths.len();
        self.paths.retain(|path| {
            !((path.start == start && path.end == end)
                || (path.start == end && path.end == start))
        });
        before - self.paths.len()
    }

    pub fn add_building(&mut self, id: NodeId, building: Building) {
        self.buildings.insert(id, building);
    }

    /// Replaces the path list while keeping buildings, the partial update
    /// the editing UI sends.
    pub fn replace_paths(&mut self, paths: Vec<PathRecord>) {
        self.paths = paths;
    }

    /// Resolves user input to a building id: exact id first, then
    /// normalized display-name match over the id-sorted building list.
    pub fn find_building_id(&self, query: &str) -> Result<NodeId, String> {
        if self.buildings.contains_key(query) {
            return Ok(query.to_string());
        }

        let clean_query = clean_str(query);
        for id in self.sorted_building_ids() {
            if clean_str(&self.buildings[id].name) == clean_query {
                return Ok(id.to_string());
            }
        }

        Err(format!("Building '{query}' not found on the campus map"))
    }
}
