pub mod test_utils;

use igc_tracks::gps_processor::{ProcessResult, TrajectoryFilter};
use igc_tracks::igc_record::Fix;
use igc_tracks::track::GeoCoordinate;
use std::collections::HashMap;

fn fix(latitude: f64, longitude: f64, valid: bool) -> Fix {
    Fix {
        coordinate: GeoCoordinate::new(latitude, longitude),
        valid,
        time: None,
        pressure_altitude: None,
        gps_altitude: None,
    }
}

#[test]
fn first_data() {
    let mut filter = TrajectoryFilter::new(0.5);
    assert!(filter.last_accepted().is_none());
    assert_eq!(filter.preprocess(&fix(-60.0, 170.0, true)), ProcessResult::Accept);
    assert_eq!(filter.last_accepted(), Some(&GeoCoordinate::new(-60.0, 170.0)));
}

#[test]
fn outlier_does_not_strand_the_filter() {
    let mut filter = TrajectoryFilter::new(0.5);
    let results: Vec<ProcessResult> = [
        (47.0, 9.0),
        (47.0001, 9.0001),
        (52.0, 15.0),
        (47.0002, 9.0002),
    ]
    .iter()
    .map(|&(lat, lon)| filter.preprocess(&fix(lat, lon, true)))
    .collect();

    assert_eq!(
        results,
        vec![
            ProcessResult::Accept,
            ProcessResult::Accept,
            ProcessResult::Reject,
            ProcessResult::Accept,
        ]
    );
    assert_eq!(filter.rejected_count(), 1);
    assert_eq!(
        filter.last_accepted(),
        Some(&GeoCoordinate::new(47.0002, 9.0002))
    );
}

#[test]
fn compare_against_last_accepted_not_last_seen() {
    let mut filter = TrajectoryFilter::new(0.5);
    filter.preprocess(&fix(10.0, 10.0, true));
    // 0.4 from the outlier but 1.1 from the last accepted point
    assert_eq!(filter.preprocess(&fix(10.7, 10.0, true)), ProcessResult::Reject);
    assert_eq!(filter.preprocess(&fix(11.1, 10.0, true)), ProcessResult::Reject);
    assert_eq!(filter.preprocess(&fix(10.3, 10.0, true)), ProcessResult::Accept);
    assert_eq!(filter.rejected_count(), 2);
}

#[test]
fn invalid_fix_never_touches_state() {
    let mut filter = TrajectoryFilter::new(0.5);
    assert_eq!(filter.preprocess(&fix(47.0, 9.0, false)), ProcessResult::Ignore);
    assert!(filter.last_accepted().is_none());

    filter.preprocess(&fix(47.0, 9.0, true));
    assert_eq!(filter.preprocess(&fix(47.1, 9.1, false)), ProcessResult::Ignore);
    assert_eq!(filter.preprocess(&fix(80.0, 9.1, false)), ProcessResult::Ignore);
    assert_eq!(filter.last_accepted(), Some(&GeoCoordinate::new(47.0, 9.0)));
    assert_eq!(filter.rejected_count(), 0);
}

#[test]
fn default_threshold() {
    let filter = TrajectoryFilter::default();
    assert_eq!(filter.max_jump(), 0.5);
}

#[test]
fn run_through_test_data() {
    let text = std::fs::read_to_string(test_utils::SAMPLE_FLIGHT).unwrap();
    let mut filter = TrajectoryFilter::default();
    let mut counter = HashMap::new();
    for line in text.lines() {
        if let Some(record) = igc_tracks::igc_record::RawFixRecord::from_line(line) {
            if let Ok(fix) = record.decode() {
                let result = filter.preprocess(&fix);
                counter.entry(result).and_modify(|c| *c += 1).or_insert(1);
            }
        }
    }
    assert_eq!(counter[&ProcessResult::Accept], 5);
    assert_eq!(counter[&ProcessResult::Reject], 1);
    assert_eq!(counter[&ProcessResult::Ignore], 1);
}
