use campuspath_core::CampusGraph;
use std::error::Error;

/// Pulls the campus dataset from a running campuspath server.
pub fn fetch_campus_data(base_url: &str) -> Result<CampusGraph, Box<dyn Error>> {
    let url = format!("{}/api/campus", base_url.trim_end_matches('/'));
    let response = reqwest::blocking::get(&url)?;

    if !response.status().is_success() {
        return Err(format!("Server returned {} for {}", response.status(), url).into());
    }

    Ok(response.json()?)
}
