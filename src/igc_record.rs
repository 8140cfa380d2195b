use chrono::NaiveTime;
use thiserror::Error;

use crate::track::GeoCoordinate;

pub const FIX_RECORD_PREFIX: char = 'B';
pub const VALID_FIX_MARKER: char = 'A';
pub const MIN_FIX_RECORD_LEN: usize = 35;

/// A B-record whose latitude/longitude fields could not be decoded. Carries
/// the raw fields so the caller can report the offending line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed fix record (lat: {latitude:?}, lon: {longitude:?}): {reason}")]
pub struct MalformedRecord {
    pub latitude: String,
    pub longitude: String,
    pub reason: String,
}

/// One B-record line, borrowed from the scanned text. Column layout:
///
/// ```text
/// B HHMMSS DDMMmmmN DDDMMmmmE V PPPPP GGGGG
/// 0 1      7        15        24 25   30   35
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFixRecord<'a> {
    pub time: &'a str,
    pub latitude: &'a str,
    pub longitude: &'a str,
    pub validity: char,
    pub pressure_altitude: &'a str,
    pub gps_altitude: &'a str,
}

/// A decoded B-record.
#[derive(Debug, Clone, PartialEq)]
pub struct Fix {
    pub coordinate: GeoCoordinate,
    pub valid: bool,
    pub time: Option<NaiveTime>,
    pub pressure_altitude: Option<i32>,
    pub gps_altitude: Option<i32>,
}

// Columns are counted in characters, not bytes: lossy decoding may leave
// multi-byte replacement characters inside a line.
fn char_field(line: &str, start: usize, end: usize) -> Option<&str> {
    let mut offsets = line
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()));
    let start_byte = offsets.nth(start)?;
    let end_byte = offsets.nth(end - start - 1)?;
    Some(&line[start_byte..end_byte])
}

impl<'a> RawFixRecord<'a> {
    /// Returns `None` for anything that is not a B-record of at least
    /// `MIN_FIX_RECORD_LEN` characters. Surrounding whitespace is ignored.
    pub fn from_line(line: &'a str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with(FIX_RECORD_PREFIX) || line.chars().count() < MIN_FIX_RECORD_LEN {
            return None;
        }
        Some(RawFixRecord {
            time: char_field(line, 1, 7)?,
            latitude: char_field(line, 7, 15)?,
            longitude: char_field(line, 15, 24)?,
            validity: line.chars().nth(24)?,
            pressure_altitude: char_field(line, 25, 30)?,
            gps_altitude: char_field(line, 30, 35)?,
        })
    }

    pub fn is_valid_fix(&self) -> bool {
        self.validity == VALID_FIX_MARKER
    }

    pub fn decode(&self) -> Result<Fix, MalformedRecord> {
        Ok(Fix {
            coordinate: decode_coordinate(self.latitude, self.longitude)?,
            valid: self.is_valid_fix(),
            time: NaiveTime::parse_from_str(self.time, "%H%M%S").ok(),
            pressure_altitude: self.pressure_altitude.trim().parse().ok(),
            gps_altitude: self.gps_altitude.trim().parse().ok(),
        })
    }
}

// Accepts what a lenient integer parser would: surrounding whitespace and an
// optional sign.
fn parse_int(field: &str, start: usize, end: usize) -> Result<i32, String> {
    let digits = char_field(field, start, end)
        .ok_or_else(|| format!("field too short for columns {start}..{end}"))?;
    digits
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid number {digits:?}: {e}"))
}

fn hemisphere(field: &str, index: usize) -> Result<char, String> {
    field
        .chars()
        .nth(index)
        .ok_or_else(|| format!("missing hemisphere at column {index}"))
}

/// `DDMMmmm` + hemisphere, `N` positive, anything else negative.
pub fn decode_latitude(field: &str) -> Result<f64, String> {
    decode_angle(field, 2, 'N')
}

/// `DDDMMmmm` + hemisphere, `E` positive, anything else negative.
pub fn decode_longitude(field: &str) -> Result<f64, String> {
    decode_angle(field, 3, 'E')
}

fn decode_angle(field: &str, degree_digits: usize, positive: char) -> Result<f64, String> {
    let degrees = parse_int(field, 0, degree_digits)?;
    let minutes = parse_int(field, degree_digits, degree_digits + 2)?;
    let minute_fraction = parse_int(field, degree_digits + 2, degree_digits + 5)? as f64 / 1000.0;
    let sign = if hemisphere(field, degree_digits + 5)? == positive {
        1.0
    } else {
        -1.0
    };
    Ok(sign * (degrees as f64 + (minutes as f64 + minute_fraction) / 60.0))
}

pub fn decode_coordinate(
    latitude: &str,
    longitude: &str,
) -> Result<GeoCoordinate, MalformedRecord> {
    let malformed = |reason: String| MalformedRecord {
        latitude: latitude.to_owned(),
        longitude: longitude.to_owned(),
        reason,
    };
    Ok(GeoCoordinate {
        latitude: decode_latitude(latitude).map_err(malformed)?,
        longitude: decode_longitude(longitude).map_err(malformed)?,
    })
}
