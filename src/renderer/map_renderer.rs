use crate::config::LineStyle;
use crate::track::{BoundingBox, GeoCoordinate, TrackCollection};
use anyhow::Result;

pub const DEFAULT_ZOOM: u8 = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub label: String,
    pub tooltip: String,
    pub coordinates: Vec<GeoCoordinate>,
    pub style: LineStyle,
}

/// Everything a renderer needs to draw one map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDocument {
    pub center: GeoCoordinate,
    pub zoom: u8,
    pub polylines: Vec<Polyline>,
    pub fit_bounds: Option<BoundingBox>,
    pub layer_control: bool,
}

impl MapDocument {
    /// One polyline per track, centred on the first point of the first
    /// track and fit to the bounds of all of them. `None` without data.
    pub fn from_tracks(tracks: &TrackCollection, style: &LineStyle) -> Option<Self> {
        let center = *tracks.tracks().first()?.points.first()?;
        let polylines = tracks
            .tracks()
            .iter()
            .map(|track| Polyline {
                label: track.name.clone(),
                tooltip: format!("Track: {}", track.name),
                coordinates: track.points.clone(),
                style: style.clone(),
            })
            .collect();
        Some(MapDocument {
            center,
            zoom: DEFAULT_ZOOM,
            polylines,
            fit_bounds: tracks.bounding_box(),
            layer_control: true,
        })
    }
}

pub trait MapRenderer {
    /// Produces a complete, viewable document.
    fn render(&self, document: &MapDocument) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::Track;

    #[test]
    fn document_from_tracks() {
        let mut first = Track::new("b.igc");
        first.points = vec![GeoCoordinate::new(47.0, 9.0), GeoCoordinate::new(47.1, 9.2)];
        let mut second = Track::new("a.igc");
        second.points = vec![GeoCoordinate::new(46.5, 8.0)];
        let tracks: TrackCollection = vec![first, second].into_iter().collect();

        let document = MapDocument::from_tracks(&tracks, &LineStyle::default()).unwrap();
        assert_eq!(document.center, GeoCoordinate::new(47.0, 9.0));
        assert_eq!(document.zoom, 12);
        assert_eq!(document.polylines.len(), 2);
        assert_eq!(document.polylines[1].tooltip, "Track: a.igc");
        assert_eq!(
            document.fit_bounds.unwrap().corners(),
            [[46.5, 8.0], [47.1, 9.2]]
        );
        assert!(document.layer_control);
    }

    #[test]
    fn no_document_without_tracks() {
        assert!(MapDocument::from_tracks(&TrackCollection::new(), &LineStyle::default()).is_none());
    }
}
