#![allow(clippy::new_without_default)]

#[macro_use]
extern crate log;

pub mod api;
pub mod config;
pub mod export_data;
pub mod gps_processor;
pub mod igc_record;
pub mod import_data;
pub mod logs;
pub mod renderer;
pub mod track;
