#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const SAMPLE_FLIGHT: &str = "./tests/data/sample_flight.igc";
pub const HEADERS_ONLY: &str = "./tests/data/headers_only.igc";

fn encode(value: f64, degree_digits: usize, positive: char, negative: char) -> String {
    let hemisphere = if value >= 0.0 { positive } else { negative };
    let thousandths = (value.abs() * 60_000.0).round() as u64;
    format!(
        "{:0width$}{:05}{}",
        thousandths / 60_000,
        thousandths % 60_000,
        hemisphere,
        width = degree_digits
    )
}

pub fn encode_latitude(latitude: f64) -> String {
    encode(latitude, 2, 'N', 'S')
}

pub fn encode_longitude(longitude: f64) -> String {
    encode(longitude, 3, 'E', 'W')
}

/// A well-formed 35 character B-record.
pub fn b_record(seconds: u32, latitude: f64, longitude: f64, validity: char) -> String {
    format!(
        "B{:02}{:02}{:02}{}{}{}0100001050",
        seconds / 3600 % 24,
        seconds / 60 % 60,
        seconds % 60,
        encode_latitude(latitude),
        encode_longitude(longitude),
        validity
    )
}

pub fn igc_text(records: &[String]) -> String {
    let mut text = String::from("AXXX001\nHFDTE020525\n");
    for record in records {
        text.push_str(record);
        text.push('\n');
    }
    text.push_str("GABCDEF\n");
    text
}

pub fn write_igc(dir: &Path, name: &str, records: &[String]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, igc_text(records)).unwrap();
    path
}
