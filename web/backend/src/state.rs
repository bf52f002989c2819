use campuspath_core::{CampusDataError, CampusGraph};
use std::path::PathBuf;
use tokio::sync::RwLock;

pub struct AppState {
    pub data_path: PathBuf,
    pub campus: RwLock<CampusGraph>,
}

impl AppState {
    pub fn new() -> Result<Self, CampusDataError> {
        let data_path_str =
            std::env::var("CAMPUS_DATA_PATH").unwrap_or_else(|_| "campus-data.json".to_string());
        let data_path = PathBuf::from(data_path_str);

        let campus = CampusGraph::from_json_file(&data_path)?;

        tracing::info!(
            buildings = campus.buildings.len(),
            paths = campus.paths.len(),
            data_path = %data_path.display(),
            "loaded campus dataset"
        );

        Ok(Self {
            data_path,
            campus: RwLock::new(campus),
        })
    }

    /// Constructor for callers that already hold a dataset, e.g. tests.
    pub fn with_dataset(data_path: PathBuf, campus: CampusGraph) -> Self {
        Self {
            data_path,
            campus: RwLock::new(campus),
        }
    }

    /// Writes the current dataset back to the data file, the persistence
    /// the editing UI relies on.
    pub fn persist(&self, campus: &CampusGraph) -> Result<(), CampusDataError> {
        campus.to_json_file(&self.data_path)
    }
}
