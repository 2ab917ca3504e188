use approx::assert_relative_eq;

use geopoint::{GeodeticPoint, LambertConfig, LambertPoint, UtmPoint};

// San Jose, California
const LAT: f64 = 37.42104;
const LON: f64 = -121.85831;

fn northern_california() -> LambertConfig {
    LambertConfig::create(33.33333, 38.6666, 35.5, -122., 2_000_000., 0.).unwrap()
}

#[test]
fn utm_forward_fixture() {
    let utm = GeodeticPoint::new(LAT, LON).to_utm().unwrap();

    assert_eq!(utm.zone(), "10S");
    assert_relative_eq!(utm.easting(), 601_021.995_134, epsilon = 1e-4);
    assert_relative_eq!(utm.northing(), 4_142_193.029_83, epsilon = 1e-4);
}

#[test]
fn utm_inverse_fixture() {
    let point = UtmPoint::from_zone(601_021.995_134, 4_142_193.029_83, "10S")
        .unwrap()
        .to_geodetic();

    assert_relative_eq!(point.latitude(), LAT, epsilon = 1e-6);
    assert_relative_eq!(point.longitude(), LON, epsilon = 1e-6);
}

#[test]
fn utm_zone_survives_a_round_trip() {
    let utm = UtmPoint::from_zone(601_021.995_134, 4_142_193.029_83, "10S").unwrap();
    let again = utm.to_geodetic().to_utm().unwrap();

    assert_eq!(again.zone(), "10S");
    // The truncated forward and inverse series are not exact inverses of
    // each other; composing them leaves a few tenths of a millimeter.
    assert_relative_eq!(again.easting(), utm.easting(), epsilon = 1e-3);
    assert_relative_eq!(again.northing(), utm.northing(), epsilon = 1e-3);
}

#[test]
fn local_tm_fixture() {
    let origin = -122.;
    let local = GeodeticPoint::new(LAT, LON).to_local_tm(origin).unwrap();

    assert_relative_eq!(local.easting(), 12_537.168_729_5, epsilon = 1e-4);
    assert_relative_eq!(local.northing(), 4_141_590.789_55, epsilon = 1e-4);
    // The designator is still derived, though Local TM does not use it
    assert_eq!(local.zone(), "10S");

    let back = local.to_geodetic_local(origin);
    assert_relative_eq!(back.latitude(), LAT, epsilon = 1e-6);
    assert_relative_eq!(back.longitude(), LON, epsilon = 1e-6);
}

#[test]
fn lambert_forward_fixture() {
    let lambert = GeodeticPoint::new(LAT, LON).to_lambert(&northern_california());

    assert_relative_eq!(lambert.easting(), 2_012_532.432_63, epsilon = 1e-4);
    assert_relative_eq!(lambert.northing(), 212_968.846_202, epsilon = 1e-4);
}

#[test]
fn lambert_inverse_fixture() {
    let point = LambertPoint::new(2_012_532.432_63, 212_968.846_202, northern_california())
        .to_geodetic();

    assert_relative_eq!(point.latitude(), LAT, epsilon = 1e-5);
    assert_relative_eq!(point.longitude(), LON, epsilon = 1e-5);
}

#[test]
fn exception_band_fixtures() {
    let norway = GeodeticPoint::new(60., 5.).to_utm().unwrap();
    assert_eq!(norway.zone_number(), 32);

    let svalbard = GeodeticPoint::new(75., 10.).to_utm().unwrap();
    assert_eq!(svalbard.zone_number(), 33);
}

// The Svalbard exception leaves no zone defined outside [0, 42) longitude
fn zone_is_defined(lat: f64, lon: f64) -> bool {
    !((72_f64..84.).contains(&lat) && !(0_f64..42.).contains(&lon))
}

#[test]
fn standard_round_trip_sweep() {
    let mut checked = 0;

    for lat_step in 0..82 {
        let lat = -79. + f64::from(lat_step) * 2.;
        for lon_step in 0..120 {
            let lon = -180. + f64::from(lon_step) * 3.;
            if !zone_is_defined(lat, lon) {
                continue;
            }

            let point = GeodeticPoint::new(lat, lon);
            let back = point.to_utm().unwrap().to_geodetic();

            assert_relative_eq!(back.latitude(), lat, epsilon = 1e-5);
            assert_relative_eq!(back.longitude(), lon, epsilon = 1e-5);
            checked += 1;
        }
    }

    // The sweep only skips the Svalbard gap
    assert!(checked > 9000);
}

#[test]
fn local_round_trip_sweep() {
    for lat_step in 0..82 {
        let lat = -79. + f64::from(lat_step) * 2.;
        for lon_step in 0..118 {
            let lon = -176. + f64::from(lon_step) * 3.;
            let origin = lon - 1.5;
            if !zone_is_defined(lat, origin) {
                continue;
            }

            let point = GeodeticPoint::new(lat, lon);
            let back = point
                .to_local_tm(origin)
                .unwrap()
                .to_geodetic_local(origin);

            assert_relative_eq!(back.latitude(), lat, epsilon = 1e-5);
            assert_relative_eq!(back.longitude(), lon, epsilon = 1e-5);
        }
    }
}

#[test]
fn local_mode_keeps_southern_hemisphere() {
    // Rosario, Argentina: negative northing in local mode, no 10,000 km shift
    let point = GeodeticPoint::new(-32.95, -60.65);
    let local = point.to_local_tm(-60.).unwrap();

    assert!(local.northing() < 0.);

    let back = local.to_geodetic_local(-60.);
    assert_relative_eq!(back.latitude(), -32.95, epsilon = 1e-6);
    assert_relative_eq!(back.longitude(), -60.65, epsilon = 1e-6);
}

#[test]
fn southern_standard_utm_round_trip() {
    let point = GeodeticPoint::new(-33.45, -70.67);
    let utm = point.to_utm().unwrap();

    // Southern-hemisphere convention keeps the northing positive
    assert!(utm.northing() > 0.);
    assert_eq!(utm.zone_letter(), 'H');

    let back = utm.to_geodetic();
    assert_relative_eq!(back.latitude(), -33.45, epsilon = 1e-5);
    assert_relative_eq!(back.longitude(), -70.67, epsilon = 1e-5);
}

#[test]
fn lambert_round_trip_sweep() {
    let config = northern_california();

    for lat_step in 0..17 {
        let lat = 28. + f64::from(lat_step);
        for lon_step in 0..21 {
            let lon = -132. + f64::from(lon_step);

            let point = GeodeticPoint::new(lat, lon);
            let back = point.to_lambert(&config).to_geodetic();

            assert_relative_eq!(back.latitude(), lat, epsilon = 1e-5);
            assert_relative_eq!(back.longitude(), lon, epsilon = 1e-5);
        }
    }
}

#[test]
fn lambert_round_trip_on_another_datum() {
    let config = northern_california();
    let point = GeodeticPoint::create(LAT, LON, "Clarke 1866").unwrap();

    let lambert = point.to_lambert(&config);
    let back = lambert.to_geodetic();

    assert_eq!(back.ellipsoid().name(), "Clarke 1866");
    assert_relative_eq!(back.latitude(), LAT, epsilon = 1e-5);
    assert_relative_eq!(back.longitude(), LON, epsilon = 1e-5);
}

#[test]
fn utm_round_trip_on_another_datum() {
    let point = GeodeticPoint::create(LAT, LON, "International").unwrap();
    let back = point.to_utm().unwrap().to_geodetic();

    assert_eq!(back.ellipsoid().name(), "International");
    assert_relative_eq!(back.latitude(), LAT, epsilon = 1e-5);
    assert_relative_eq!(back.longitude(), LON, epsilon = 1e-5);
}
