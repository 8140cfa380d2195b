use anyhow::Result;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::io;

/// Diagnostics go to stdout as plain lines: `LEVEL message`, no timestamps.
pub fn init(level: LevelFilter) -> Result<()> {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build();
    WriteLogger::init(level, config, io::stdout())?;
    Ok(())
}
