use campuspath_core::{CampusGraph, NodeId, SearchOutcome, polyline_length, route_geometry};

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::search::{RouteReport, RouteRequest};

pub fn display_search_info(request: &RouteRequest, colors: &ColorScheme) {
    println!(
        "🧭 Finding route from {} to {}",
        colors.building_name(&format!("\"{}\"", request.start_name)),
        colors.building_name(&format!("\"{}\"", request.end_name))
    );

    match request.search_args.algorithm.to_ascii_lowercase().as_str() {
        "bfs" => println!("⚙️  Using fewest-stops search (BFS)"),
        "dfs" => println!("⚙️  Enumerating every route (DFS)"),
        "dijkstra" => println!("⚙️  Using shortest-distance search (Dijkstra)"),
        other => println!("⚙️  Requested algorithm: {other}"),
    }

    println!("🔍 Searching...");
}

pub fn display_route_results(report: RouteReport, campus: &CampusGraph, colors: &ColorScheme) {
    let is_verbose = report.display_options.verbose;

    if is_verbose {
        println!("\n---\n");
    }

    match &report.outcome {
        SearchOutcome::SinglePath(Some(path)) => {
            display_single_route(path, &report.display_options, campus, colors);
        }
        SearchOutcome::AllPaths(paths) if !paths.is_empty() => {
            display_route_enumeration(paths, campus, colors);
        }
        SearchOutcome::WeightedPath {
            path: Some(path),
            distance,
        } => {
            display_single_route(path, &report.display_options, campus, colors);
            println!(
                "\n📏 Total distance: {} meters",
                colors.number(&format_meters(*distance))
            );
        }
        SearchOutcome::Unsupported => {
            println!(
                "{} '{}' (expected bfs, dfs, or dijkstra)",
                colors.error("❌ Unknown algorithm"),
                report.display_options.algorithm
            );
        }
        _ => {
            println!(
                "{} {} and {}",
                colors.error("❌ No route found between"),
                colors.building_name(&format!("\"{}\"", report.start_name)),
                colors.building_name(&format!("\"{}\"", report.end_name))
            );
        }
    }

    if report.display_options.show_geometry {
        display_geometry(&report.outcome, campus);
    }

    if is_verbose {
        display_search_statistics(report.search_duration, colors);
    }
}

pub fn display_building_list(campus: &CampusGraph, colors: &ColorScheme) {
    let options = campus.building_options();

    println!(
        "🏛️  {} buildings on the map:\n",
        colors.number(&options.len().to_string())
    );
    for (id, name) in options {
        println!(
            "  {} {}",
            colors.step_number(&format!("{id:<16}")),
            colors.building_name(&name)
        );
    }
}

fn display_single_route(
    path: &[NodeId],
    display_options: &Args,
    campus: &CampusGraph,
    colors: &ColorScheme,
) {
    if display_options.verbose {
        let stop_count = path.len().saturating_sub(1);
        println!(
            "{} Found route with {} stops:\n",
            colors.success("✅"),
            colors.number(&stop_count.to_string())
        );
    }

    println!("{}", format_route_flow(path, campus, colors));

    if !display_options.quiet {
        println!();
        for (step_index, node) in path.iter().enumerate() {
            println!(
                "{:2} {}",
                colors.step_number(&format!("{}.", step_index + 1)),
                colors.building_name(&format!("\"{}\"", building_label(campus, node)))
            );
        }
    }
}

fn display_route_enumeration(paths: &[Vec<NodeId>], campus: &CampusGraph, colors: &ColorScheme) {
    println!(
        "{} Found {} routes:\n",
        colors.success("✅"),
        colors.number(&paths.len().to_string())
    );

    for (index, path) in paths.iter().enumerate() {
        println!(
            "{} {}",
            colors.step_number(&format!("Route {}:", index + 1)),
            format_route_flow(path, campus, colors)
        );
    }
}

fn format_route_flow(path: &[NodeId], campus: &CampusGraph, colors: &ColorScheme) -> String {
    path.iter()
        .map(|node| {
            colors
                .building_name(&format!("\"{}\"", building_label(campus, node)))
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" → ")
}

fn building_label<'a>(campus: &'a CampusGraph, id: &'a str) -> &'a str {
    match campus.buildings.get(id) {
        Some(building) if !building.name.is_empty() => &building.name,
        _ => id,
    }
}

fn display_geometry(outcome: &SearchOutcome, campus: &CampusGraph) {
    let Some(path) = outcome.primary_path() else {
        return;
    };
    let line = route_geometry(campus, path);
    if line.is_empty() {
        return;
    }

    println!(
        "\n🗺️  Route geometry ({} points, ~{} m drawn):",
        line.len(),
        format_meters(polyline_length(&line))
    );
    for point in &line {
        println!("   [{:.6}, {:.6}]", point[0], point[1]);
    }
}

fn display_search_statistics(search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Search completed in {} sec",
        colors.stats("📊"),
        colors.number(&format!("{search_duration:.3}"))
    );
}

fn format_meters(distance: f64) -> String {
    if distance.fract() == 0.0 {
        format!("{distance:.0}")
    } else {
        format!("{distance:.1}")
    }
}
