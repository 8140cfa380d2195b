use crate::gps_processor::{ProcessResult, TrajectoryFilter, DEFAULT_MAX_JUMP_DEGREES};
use crate::igc_record::RawFixRecord;
use crate::track::Track;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, Read};
use std::ops::AddAssign;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// What to do with bytes that are not valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDecoding {
    /// Fail the whole file.
    Strict,
    /// Substitute U+FFFD and keep going.
    #[default]
    Lossy,
}

impl FromStr for TextDecoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(TextDecoding::Strict),
            "lossy" => Ok(TextDecoding::Lossy),
            other => Err(format!("unknown text decoding: {other:?}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportOptions {
    pub max_jump: f64,
    pub decoding: TextDecoding,
}

impl Default for ImportOptions {
    fn default() -> Self {
        ImportOptions {
            max_jump: DEFAULT_MAX_JUMP_DEGREES,
            decoding: TextDecoding::default(),
        }
    }
}

/// A file that could not be read. Recoverable: the run moves on to the next
/// file.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not valid UTF-8 (first bad byte at offset {offset})", path.display())]
    Decode { path: PathBuf, offset: usize },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub fix_records: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub ignored: usize,
    pub malformed: usize,
}

impl AddAssign for ImportStats {
    fn add_assign(&mut self, other: Self) {
        self.fix_records += other.fix_records;
        self.accepted += other.accepted;
        self.rejected += other.rejected;
        self.ignored += other.ignored;
        self.malformed += other.malformed;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportedTrack {
    pub track: Track,
    pub stats: ImportStats,
}

fn decode_text<'a>(
    path: &Path,
    bytes: &'a [u8],
    decoding: TextDecoding,
) -> Result<Cow<'a, str>, ImportError> {
    match decoding {
        TextDecoding::Lossy => Ok(String::from_utf8_lossy(bytes)),
        TextDecoding::Strict => std::str::from_utf8(bytes)
            .map(Cow::Borrowed)
            .map_err(|e| ImportError::Decode {
                path: path.to_owned(),
                offset: e.valid_up_to(),
            }),
    }
}

/// Splits on `\r\n`, `\n` or a lone `\r`, so CR-only logs still yield lines.
fn text_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = rest.find(&['\r', '\n'][..]).unwrap_or(rest.len());
        let (line, tail) = rest.split_at(end);
        rest = tail
            .strip_prefix("\r\n")
            .or_else(|| tail.strip_prefix('\r'))
            .or_else(|| tail.strip_prefix('\n'))
            .unwrap_or(tail);
        Some(line)
    })
}

/// Runs every B-record of `text` through the decoder and the jump filter.
pub fn scan_igc_text(name: &str, text: &str, max_jump: f64) -> ImportedTrack {
    let mut track = Track::new(name);
    let mut stats = ImportStats::default();
    let mut filter = TrajectoryFilter::new(max_jump);

    for (line_num, line) in text_lines(text).enumerate() {
        let record = match RawFixRecord::from_line(line) {
            Some(record) => record,
            None => continue,
        };
        stats.fix_records += 1;
        let fix = match record.decode() {
            Ok(fix) => fix,
            Err(e) if record.is_valid_fix() => {
                warn!("{}:{}: {}", name, line_num + 1, e);
                stats.malformed += 1;
                continue;
            }
            Err(_) => {
                stats.ignored += 1;
                continue;
            }
        };
        match filter.preprocess(&fix) {
            ProcessResult::Accept => {
                track.points.push(fix.coordinate);
                stats.accepted += 1;
            }
            ProcessResult::Reject => {
                debug!(
                    "{}:{}: skipping fix, jump > {} degrees",
                    name,
                    line_num + 1,
                    max_jump
                );
            }
            ProcessResult::Ignore => stats.ignored += 1,
        }
    }
    stats.rejected = filter.rejected_count();

    ImportedTrack { track, stats }
}

pub fn load_igc_from_reader<R: Read>(
    path: &Path,
    mut reader: R,
    options: &ImportOptions,
) -> Result<ImportedTrack, ImportError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| ImportError::Io {
            path: path.to_owned(),
            source,
        })?;
    let text = decode_text(path, &bytes, options.decoding)?;
    let name = path
        .file_name()
        .map(|x| x.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    Ok(scan_igc_text(&name, &text, options.max_jump))
}

pub fn load_igc(path: &Path, options: &ImportOptions) -> Result<ImportedTrack, ImportError> {
    let file = File::open(path).map_err(|source| ImportError::Io {
        path: path.to_owned(),
        source,
    })?;
    load_igc_from_reader(path, file, options)
}
