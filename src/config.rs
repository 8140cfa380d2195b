use crate::gps_processor::DEFAULT_MAX_JUMP_DEGREES;
use crate::import_data::{ImportOptions, TextDecoding};
use serde::Serialize;
use simplelog::LevelFilter;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_INPUT_FOLDER: &str = "tracks";
pub const DEFAULT_OUTPUT_MAP_FILE: &str = "igc_tracks_map.html";
pub const IGC_EXTENSION: &str = "igc";
pub const DEFAULT_LINE_COLOR: &str = "#000080";
pub const DEFAULT_LINE_WEIGHT: f64 = 2.0;
pub const DEFAULT_LINE_OPACITY: f64 = 0.8;

pub const ENV_INPUT_FOLDER: &str = "IGC_FOLDER";
pub const ENV_OUTPUT_MAP: &str = "IGC_OUTPUT_MAP";
pub const ENV_MAX_JUMP: &str = "IGC_MAX_JUMP";
pub const ENV_LINE_COLOR: &str = "IGC_LINE_COLOR";
pub const ENV_LINE_WEIGHT: &str = "IGC_LINE_WEIGHT";
pub const ENV_LINE_OPACITY: &str = "IGC_LINE_OPACITY";
pub const ENV_DECODING: &str = "IGC_DECODING";
pub const ENV_GPX_OUTPUT: &str = "IGC_GPX_OUTPUT";
pub const ENV_LOG_LEVEL: &str = "IGC_LOG_LEVEL";

#[derive(Error, Debug, PartialEq)]
#[error("invalid value {value:?} for {key}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

/// Polyline style, serialized as-is into the map document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle {
            color: DEFAULT_LINE_COLOR.to_owned(),
            weight: DEFAULT_LINE_WEIGHT,
            opacity: DEFAULT_LINE_OPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input_folder: PathBuf,
    pub output_map_file: PathBuf,
    pub gpx_output_file: Option<PathBuf>,
    pub extension: String,
    pub max_jump: f64,
    pub decoding: TextDecoding,
    pub line_style: LineStyle,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_folder: PathBuf::from(DEFAULT_INPUT_FOLDER),
            output_map_file: PathBuf::from(DEFAULT_OUTPUT_MAP_FILE),
            gpx_output_file: None,
            extension: IGC_EXTENSION.to_owned(),
            max_jump: DEFAULT_MAX_JUMP_DEGREES,
            decoding: TextDecoding::default(),
            line_style: LineStyle::default(),
            log_level: LevelFilter::Info,
        }
    }
}

fn parse_f64(
    key: &'static str,
    value: &str,
    valid: impl Fn(f64) -> bool,
) -> Result<f64, ConfigError> {
    let error = |reason: &str| ConfigError {
        key,
        value: value.to_owned(),
        reason: reason.to_owned(),
    };
    let parsed: f64 = value.trim().parse().map_err(|_| error("not a number"))?;
    if !parsed.is_finite() || !valid(parsed) {
        return Err(error("out of range"));
    }
    Ok(parsed)
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Starts from the defaults and applies every override `lookup` returns.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let lookup = |key: &str| lookup(key).filter(|v: &String| !v.trim().is_empty());

        if let Some(v) = lookup(ENV_INPUT_FOLDER) {
            config.input_folder = PathBuf::from(v);
        }
        if let Some(v) = lookup(ENV_OUTPUT_MAP) {
            config.output_map_file = PathBuf::from(v);
        }
        if let Some(v) = lookup(ENV_GPX_OUTPUT) {
            config.gpx_output_file = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup(ENV_MAX_JUMP) {
            config.max_jump = parse_f64(ENV_MAX_JUMP, &v, |x| x > 0.0)?;
        }
        if let Some(v) = lookup(ENV_LINE_COLOR) {
            config.line_style.color = v.trim().to_owned();
        }
        if let Some(v) = lookup(ENV_LINE_WEIGHT) {
            config.line_style.weight = parse_f64(ENV_LINE_WEIGHT, &v, |x| x > 0.0)?;
        }
        if let Some(v) = lookup(ENV_LINE_OPACITY) {
            config.line_style.opacity =
                parse_f64(ENV_LINE_OPACITY, &v, |x| (0.0..=1.0).contains(&x))?;
        }
        if let Some(v) = lookup(ENV_DECODING) {
            config.decoding = v.parse().map_err(|reason| ConfigError {
                key: ENV_DECODING,
                value: v.clone(),
                reason,
            })?;
        }
        if let Some(v) = lookup(ENV_LOG_LEVEL) {
            config.log_level = v.trim().parse().map_err(|_| ConfigError {
                key: ENV_LOG_LEVEL,
                value: v.clone(),
                reason: "expected off, error, warn, info, debug or trace".to_owned(),
            })?;
        }
        Ok(config)
    }

    pub fn import_options(&self) -> ImportOptions {
        ImportOptions {
            max_jump: self.max_jump,
            decoding: self.decoding,
        }
    }
}
