use super::map_renderer::{MapDocument, MapRenderer};
use crate::config::LineStyle;
use anyhow::Result;
use serde::Serialize;

const LEAFLET_VERSION: &str = "1.9.4";
const DATA_PLACEHOLDER: &str = "__MAP_DATA__";
const VERSION_PLACEHOLDER: &str = "__LEAFLET_VERSION__";

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1.0" />
<title>IGC tracks</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@__LEAFLET_VERSION__/dist/leaflet.css" />
<script src="https://unpkg.com/leaflet@__LEAFLET_VERSION__/dist/leaflet.js"></script>
<style>
html, body { height: 100%; margin: 0; }
#map { height: 100%; width: 100%; }
</style>
</head>
<body>
<div id="map"></div>
<script>
const data = __MAP_DATA__;
const map = L.map("map").setView(data.center, data.zoom);
const base = L.tileLayer("https://tile.openstreetmap.org/{z}/{x}/{y}.png", {
  maxZoom: 19,
  attribution: "&copy; OpenStreetMap contributors",
}).addTo(map);
const overlays = {};
data.overlays.forEach(function (overlay) {
  overlays[overlay.label] = L.polyline(overlay.coordinates, overlay.style)
    .bindTooltip(overlay.tooltip)
    .addTo(map);
});
if (data.bounds) {
  map.fitBounds(data.bounds);
}
if (data.layer_control) {
  L.control.layers({ OpenStreetMap: base }, overlays).addTo(map);
}
</script>
</body>
</html>
"#;

#[derive(Serialize)]
struct LeafletOverlay<'a> {
    label: &'a str,
    tooltip: &'a str,
    coordinates: Vec<[f64; 2]>,
    style: &'a LineStyle,
}

#[derive(Serialize)]
struct LeafletData<'a> {
    center: [f64; 2],
    zoom: u8,
    bounds: Option<[[f64; 2]; 2]>,
    layer_control: bool,
    overlays: Vec<LeafletOverlay<'a>>,
}

/// Renders a standalone HTML page backed by Leaflet and OpenStreetMap tiles.
#[derive(Debug, Default, Clone)]
pub struct LeafletRenderer {}

impl LeafletRenderer {
    pub fn new() -> Self {
        LeafletRenderer {}
    }
}

// JSON is valid JavaScript, but a `</script>` inside a string would still
// close the element early.
fn escape_for_script(json: &str) -> String {
    json.replace("</", "<\\/")
}

impl MapRenderer for LeafletRenderer {
    fn render(&self, document: &MapDocument) -> Result<String> {
        let data = LeafletData {
            center: [document.center.latitude, document.center.longitude],
            zoom: document.zoom,
            bounds: document.fit_bounds.map(|b| b.corners()),
            layer_control: document.layer_control,
            overlays: document
                .polylines
                .iter()
                .map(|p| LeafletOverlay {
                    label: &p.label,
                    tooltip: &p.tooltip,
                    coordinates: p
                        .coordinates
                        .iter()
                        .map(|c| [c.latitude, c.longitude])
                        .collect(),
                    style: &p.style,
                })
                .collect(),
        };
        let json = serde_json::to_string(&data)?;
        Ok(TEMPLATE
            .replace(VERSION_PLACEHOLDER, LEAFLET_VERSION)
            .replace(DATA_PLACEHOLDER, &escape_for_script(&json)))
    }
}
