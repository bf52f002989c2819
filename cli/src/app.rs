use campuspath_core::CampusGraph;
use std::{error::Error, path::Path};

use crate::args::Args;
use crate::fetch;

#[derive(Debug)]
pub struct CampusApp {
    pub campus: CampusGraph,
}

impl CampusApp {
    pub fn new(args: &Args) -> Result<Self, Box<dyn Error>> {
        let campus = if let Some(url) = &args.server {
            fetch::fetch_campus_data(url)?
        } else {
            let data_path = Path::new(&args.data);
            if !data_path.exists() {
                return Err(format!("Campus data file not found: {:?}", data_path).into());
            }
            CampusGraph::from_json_file(data_path)?
        };

        Ok(Self { campus })
    }
}
