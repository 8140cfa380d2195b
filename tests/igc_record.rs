#[macro_use]
extern crate assert_float_eq;

pub mod test_utils;

use igc_tracks::igc_record::{self, RawFixRecord};

#[test]
fn decode_latitude() {
    let latitude = igc_record::decode_latitude("4734823N").unwrap();
    assert_float_absolute_eq!(latitude, 47.0 + (34.0 + 0.823) / 60.0, 1e-12);
    assert_float_absolute_eq!(latitude, 47.58038, 1e-5);
}

#[test]
fn decode_longitude() {
    let longitude = igc_record::decode_longitude("00918345E").unwrap();
    assert_float_absolute_eq!(longitude, 9.0 + (18.0 + 0.345) / 60.0, 1e-12);
    assert_float_absolute_eq!(longitude, 9.30575, 1e-5);
}

#[test]
fn southern_and_western_hemispheres() {
    let coordinate = igc_record::decode_coordinate("3352000S", "15108500W").unwrap();
    assert_float_absolute_eq!(coordinate.latitude, -33.866_666_666, 1e-6);
    assert_float_absolute_eq!(coordinate.longitude, -151.141_666_666, 1e-6);
}

#[test]
fn decoding_is_deterministic() {
    let a = igc_record::decode_coordinate("4734823N", "00918345E").unwrap();
    let b = igc_record::decode_coordinate("4734823N", "00918345E").unwrap();
    assert_eq!(a.latitude.to_bits(), b.latitude.to_bits());
    assert_eq!(a.longitude.to_bits(), b.longitude.to_bits());
}

#[test]
fn results_stay_in_range() {
    for (lat, lon) in [
        ("0000000N", "00000000E"),
        ("8959999N", "17959999E"),
        ("8959999S", "17959999W"),
        ("4500000S", "09000000W"),
    ] {
        let coordinate = igc_record::decode_coordinate(lat, lon).unwrap();
        assert!((-90.0..=90.0).contains(&coordinate.latitude), "{lat}");
        assert!((-180.0..=180.0).contains(&coordinate.longitude), "{lon}");
    }
}

#[test]
fn encoded_fixtures_round_trip() {
    let line = test_utils::b_record(3661, -12.5, 130.25, 'A');
    assert_eq!(line.len(), 35);
    let fix = RawFixRecord::from_line(&line).unwrap().decode().unwrap();
    assert_float_absolute_eq!(fix.coordinate.latitude, -12.5, 1e-9);
    assert_float_absolute_eq!(fix.coordinate.longitude, 130.25, 1e-9);
    assert_eq!(fix.time.unwrap().to_string(), "01:01:01");
}

#[test]
fn malformed_record_keeps_raw_fields() {
    let err = igc_record::decode_coordinate("4734823N", "009I8345E").unwrap_err();
    assert_eq!(err.latitude, "4734823N");
    assert_eq!(err.longitude, "009I8345E");
    assert!(err.to_string().contains("009I8345E"));
}

#[test]
fn any_other_hemisphere_character_is_negative() {
    assert!(igc_record::decode_latitude("4734823X").unwrap() < 0.0);
    assert!(igc_record::decode_longitude("00918345 ").unwrap() < 0.0);
    assert_float_absolute_eq!(
        igc_record::decode_latitude("4734823?").unwrap(),
        -igc_record::decode_latitude("4734823N").unwrap(),
        1e-12
    );
}
