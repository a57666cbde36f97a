//! Map artifacts for a selected route.
//!
//! Both renderers show every input point, coloured by whether the route
//! visits it, and draw the route as a line in visiting order.

use std::fs;
use std::path::Path;

use serde_json::{Value, json};

use crate::error::Result;
use crate::point::Point;
use crate::selector::SelectedRoute;
use crate::traits::RouteRenderer;

const VISITED_COLOR: &str = "green";
const UNVISITED_COLOR: &str = "red";
const ROUTE_COLOR: &str = "red";

/// GeoJSON `FeatureCollection` of point markers plus the route line.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoJsonRenderer;

impl GeoJsonRenderer {
    pub fn feature_collection(&self, points: &[Point], route: &SelectedRoute) -> Value {
        let mut features: Vec<Value> = points
            .iter()
            .enumerate()
            .map(|(idx, point)| {
                let visited = route.contains(idx);
                json!({
                    "type": "Feature",
                    "geometry": {
                        "type": "Point",
                        "coordinates": [point.longitude, point.latitude],
                    },
                    "properties": {
                        "name": point.name,
                        "priority": point.priority,
                        "visited": visited,
                        "marker-color": if visited { VISITED_COLOR } else { UNVISITED_COLOR },
                    },
                })
            })
            .collect();

        if !route.is_empty() {
            let path: Vec<[f64; 2]> = route
                .points(points)
                .map(|point| [point.longitude, point.latitude])
                .collect();
            features.push(json!({
                "type": "Feature",
                "geometry": {
                    "type": "LineString",
                    "coordinates": path,
                },
                "properties": {
                    "stroke": ROUTE_COLOR,
                    "total_distance_km": route.total_distance_km,
                    "total_time_hours": route.total_time_hours,
                    "total_priority": route.total_priority,
                },
            }));
        }

        json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }
}

impl RouteRenderer for GeoJsonRenderer {
    fn render(&self, points: &[Point], route: &SelectedRoute) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.feature_collection(points, route))?)
    }
}

/// Standalone Leaflet page with the GeoJSON layer embedded.
#[derive(Debug, Clone)]
pub struct LeafletHtmlRenderer {
    pub zoom: u8,
}

impl Default for LeafletHtmlRenderer {
    fn default() -> Self {
        Self { zoom: 4 }
    }
}

impl LeafletHtmlRenderer {
    /// First route stop, or the first point when nothing was selected.
    fn center(points: &[Point], route: &SelectedRoute) -> (f64, f64) {
        route
            .points(points)
            .next()
            .or_else(|| points.first())
            .map(Point::location)
            .unwrap_or((0.0, 0.0))
    }
}

impl RouteRenderer for LeafletHtmlRenderer {
    fn render(&self, points: &[Point], route: &SelectedRoute) -> Result<String> {
        let collection = GeoJsonRenderer.feature_collection(points, route);
        // "</" would close the script element early.
        let data = serde_json::to_string(&collection)?.replace("</", "<\\/");
        let (lat, lng) = Self::center(points, route);

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Trip route</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
const data = {data};
const map = L.map("map").setView([{lat}, {lng}], {zoom});
L.tileLayer("https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png", {{
  attribution: "&copy; OpenStreetMap contributors"
}}).addTo(map);
L.geoJSON(data, {{
  pointToLayer: (feature, latlng) => L.circleMarker(latlng, {{
    radius: 8,
    color: feature.properties["marker-color"],
    fillOpacity: 0.8
  }}),
  style: (feature) => feature.geometry.type === "LineString"
    ? {{ color: feature.properties.stroke, weight: 2.5, opacity: 1 }}
    : {{}},
  onEachFeature: (feature, layer) => {{
    if (feature.geometry.type === "Point") {{
      layer.bindPopup(feature.properties.name + "<br>Priority: " + feature.properties.priority);
    }}
  }}
}}).addTo(map);
</script>
</body>
</html>
"#,
            data = data,
            lat = lat,
            lng = lng,
            zoom = self.zoom,
        ))
    }
}

/// Write a rendered artifact to disk.
pub fn write_artifact(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, contents)?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "map written");
    Ok(())
}
