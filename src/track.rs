use geo_types::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoCoordinate {
            latitude,
            longitude,
        }
    }

    /// Euclidean distance in degree space. Not a geodesic distance: a degree
    /// of longitude shrinks with latitude and this does not compensate.
    pub fn degree_distance(&self, other: &GeoCoordinate) -> f64 {
        let d_lat = self.latitude - other.latitude;
        let d_lon = self.longitude - other.longitude;
        (d_lat * d_lat + d_lon * d_lon).sqrt()
    }
}

impl From<GeoCoordinate> for Point<f64> {
    fn from(coordinate: GeoCoordinate) -> Self {
        Point::new(coordinate.longitude, coordinate.latitude)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub name: String,
    pub points: Vec<GeoCoordinate>,
}

impl Track {
    pub fn new(name: impl Into<String>) -> Self {
        Track {
            name: name.into(),
            points: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.points.iter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub min_longitude: f64,
    pub max_latitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a GeoCoordinate>) -> Option<Self> {
        points.into_iter().fold(None, |bbox, p| {
            Some(match bbox {
                None => BoundingBox {
                    min_latitude: p.latitude,
                    min_longitude: p.longitude,
                    max_latitude: p.latitude,
                    max_longitude: p.longitude,
                },
                Some(b) => b.extend(p),
            })
        })
    }

    fn extend(self, p: &GeoCoordinate) -> Self {
        BoundingBox {
            min_latitude: self.min_latitude.min(p.latitude),
            min_longitude: self.min_longitude.min(p.longitude),
            max_latitude: self.max_latitude.max(p.latitude),
            max_longitude: self.max_longitude.max(p.longitude),
        }
    }

    /// `[[south, west], [north, east]]`, the order map libraries expect.
    pub fn corners(&self) -> [[f64; 2]; 2] {
        [
            [self.min_latitude, self.min_longitude],
            [self.max_latitude, self.max_longitude],
        ]
    }
}

/// The non-empty tracks of one run, in run order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackCollection {
    tracks: Vec<Track>,
}

impl TrackCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty tracks carry no data and are dropped.
    pub fn push(&mut self, track: Track) -> bool {
        if track.is_empty() {
            return false;
        }
        self.tracks.push(track);
        true
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn total_points(&self) -> usize {
        self.tracks.iter().map(|t| t.points.len()).sum()
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.tracks.iter().flat_map(|t| t.points.iter()))
    }
}

impl FromIterator<Track> for TrackCollection {
    fn from_iter<I: IntoIterator<Item = Track>>(iter: I) -> Self {
        let mut collection = TrackCollection::new();
        for track in iter {
            collection.push(track);
        }
        collection
    }
}
