use crate::campus::{CampusGraph, NodeId, Point};
use tracing::warn;

/// Rough degrees-to-meters conversion the map editor uses when it measures
/// a drawn path.
const METERS_PER_DEGREE: f64 = 111_000.0;

/// Stitches the drawable polyline for a route: each leg contributes its
/// stored point sequence between the two buildings' coordinates, reversed
/// when the edge is walked end to start. Legs with no matching path record
/// are skipped with a warning.
pub fn route_geometry(campus: &CampusGraph, route: &[NodeId]) -> Vec<Point> {
    let mut coordinates: Vec<Point> = Vec::new();

    for pair in route.windows(2) {
        let (node, next) = (&pair[0], &pair[1]);
        let edge = campus.paths.iter().find(|path| {
            (path.start == *node && path.end == *next)
                || (path.start == *next && path.end == *node)
        });

        let Some(edge) = edge else {
            warn!(
                from = node.as_str(),
                to = next.as_str(),
                "no path record between route legs"
            );
            continue;
        };

        let mut edge_points = edge.points.clone();
        if edge.start == *next && edge.end == *node {
            edge_points.reverse();
        }

        if coordinates.is_empty() {
            if let Some(building) = campus.buildings.get(node) {
                coordinates.push(building.coordinates);
            }
        }
        coordinates.extend(edge_points);
        if let Some(building) = campus.buildings.get(next) {
            coordinates.push(building.coordinates);
        }
    }

    coordinates
}

/// Total length of a polyline, in the same rough meters the editor records
/// on new paths.
pub fn polyline_length(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|pair| segment_distance(pair[0], pair[1]))
        .sum()
}

fn segment_distance(a: Point, b: Point) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    (dx * dx + dy * dy).sqrt() * METERS_PER_DEGREE
}
