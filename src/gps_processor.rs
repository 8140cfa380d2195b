use crate::igc_record::Fix;
use crate::track::GeoCoordinate;

pub const DEFAULT_MAX_JUMP_DEGREES: f64 = 0.5;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProcessResult {
    Accept,
    Reject,
    // never reaches the filter state
    Ignore,
}

/// Drops fixes that jump implausibly far from the last accepted one.
///
/// Every candidate is compared against the last *accepted* coordinate, never
/// against a rejected outlier, so a single bad fix cannot strand the filter.
pub struct TrajectoryFilter {
    max_jump: f64,
    last_accepted: Option<GeoCoordinate>,
    rejected: usize,
}

impl TrajectoryFilter {
    pub fn new(max_jump: f64) -> Self {
        TrajectoryFilter {
            max_jump,
            last_accepted: None,
            rejected: 0,
        }
    }

    pub fn max_jump(&self) -> f64 {
        self.max_jump
    }

    pub fn last_accepted(&self) -> Option<&GeoCoordinate> {
        self.last_accepted.as_ref()
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected
    }

    /// Fixes not flagged valid by the recorder are ignored outright.
    pub fn preprocess(&mut self, fix: &Fix) -> ProcessResult {
        if !fix.valid {
            return ProcessResult::Ignore;
        }
        self.process_coordinate(fix.coordinate)
    }

    pub fn process_coordinate(&mut self, coordinate: GeoCoordinate) -> ProcessResult {
        let result = match &self.last_accepted {
            None => ProcessResult::Accept,
            Some(prev) => {
                // A jump exactly at the threshold is still accepted.
                if coordinate.degree_distance(prev) > self.max_jump {
                    ProcessResult::Reject
                } else {
                    ProcessResult::Accept
                }
            }
        };
        match result {
            ProcessResult::Accept => self.last_accepted = Some(coordinate),
            ProcessResult::Reject => self.rejected += 1,
            ProcessResult::Ignore => (),
        }
        result
    }
}

impl Default for TrajectoryFilter {
    fn default() -> Self {
        TrajectoryFilter::new(DEFAULT_MAX_JUMP_DEGREES)
    }
}
