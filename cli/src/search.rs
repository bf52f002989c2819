use campuspath_core::{CampusGraph, NodeId, SearchOutcome, find_route};
use std::time::Instant;

use crate::args::Args;

#[derive(Debug)]
pub struct RouteRequest {
    pub start: NodeId,
    pub end: NodeId,
    pub start_name: String,
    pub end_name: String,
    pub search_args: Args,
}

pub struct RouteReport {
    pub outcome: SearchOutcome,
    pub search_duration: f64,
    pub start_name: String,
    pub end_name: String,
    pub display_options: Args,
}

pub fn create_route_request(args: Args, campus: &CampusGraph) -> Result<RouteRequest, String> {
    let from_query = args
        .from
        .as_deref()
        .ok_or_else(|| "Missing start building".to_string())?;
    let to_query = args
        .to
        .as_deref()
        .ok_or_else(|| "Missing destination building".to_string())?;

    let start = campus.find_building_id(from_query)?;
    let end = campus.find_building_id(to_query)?;

    let start_name = display_name(campus, &start);
    let end_name = display_name(campus, &end);

    Ok(RouteRequest {
        start,
        end,
        start_name,
        end_name,
        search_args: args,
    })
}

pub fn execute_route_search(request: RouteRequest, campus: &CampusGraph) -> RouteReport {
    let search_timer = Instant::now();

    let outcome = find_route(
        &campus.paths,
        &request.search_args.algorithm,
        &request.start,
        &request.end,
    );

    RouteReport {
        outcome,
        search_duration: search_timer.elapsed().as_secs_f64(),
        start_name: request.start_name,
        end_name: request.end_name,
        display_options: request.search_args,
    }
}

fn display_name(campus: &CampusGraph, id: &str) -> String {
    match campus.buildings.get(id) {
        Some(building) if !building.name.is_empty() => building.name.clone(),
        _ => id.to_string(),
    }
}
