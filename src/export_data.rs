use crate::track::TrackCollection;
use anyhow::{Context, Result};
use gpx::{Gpx, GpxVersion, Track, TrackSegment, Waypoint};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const GPX_CREATOR: &str = "igc_tracks";

pub fn save_map(path: &Path, html: &str) -> io::Result<()> {
    fs::write(path, html)
}

pub fn tracks_to_gpx(tracks: &TrackCollection) -> Gpx {
    let tracks = tracks
        .tracks()
        .iter()
        .map(|track| {
            let mut segment = TrackSegment::new();
            segment.points = track
                .points
                .iter()
                .map(|point| Waypoint::new((*point).into()))
                .collect();
            let mut gpx_track = Track::new();
            gpx_track.name = Some(track.name.clone());
            gpx_track.segments.push(segment);
            gpx_track
        })
        .collect();
    Gpx {
        version: GpxVersion::Gpx11,
        creator: Some(GPX_CREATOR.to_owned()),
        tracks,
        ..Default::default()
    }
}

pub fn write_gpx<W: Write>(tracks: &TrackCollection, writer: W) -> Result<()> {
    gpx::write(&tracks_to_gpx(tracks), writer)?;
    Ok(())
}

pub fn save_gpx(path: &Path, tracks: &TrackCollection) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_gpx(tracks, &mut writer)?;
    writer.flush()?;
    Ok(())
}
