#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Conversions between geodetic coordinates and two conformal map
//! projections: Transverse Mercator (standard zoned UTM plus an unzoned
//! "Local TM" variant) and Lambert Conformal Conic.
//!
//! A [`GeodeticPoint`] is a latitude/longitude pair bound to a reference
//! [`Ellipsoid`]. Projecting it yields a [`UtmPoint`] or a [`LambertPoint`],
//! each of which carries enough metadata (origin, ellipsoid, configuration)
//! to invert itself back to a [`GeodeticPoint`].
//!
//! ```
//! use geopoint::GeodeticPoint;
//!
//! let home = GeodeticPoint::new(37.42104, -121.85831);
//! let utm = home.to_utm()?;
//!
//! assert_eq!(utm.zone(), "10S");
//!
//! let back = utm.to_geodetic();
//! assert!((back.latitude() - home.latitude()).abs() < 1e-6);
//! assert!((back.longitude() - home.longitude()).abs() < 1e-6);
//! # Ok::<(), geopoint::Error>(())
//! ```

use thiserror::Error;

pub mod ellipsoid;
pub mod geodetic;
pub mod lambert;
pub mod utm;

pub use ellipsoid::Ellipsoid;
pub use geodetic::GeodeticPoint;
pub use lambert::{LambertConfig, LambertPoint};
pub use utm::UtmPoint;

pub(crate) mod projections {
    pub mod lambert_conformal;
    pub mod transverse_mercator;
}

pub(crate) mod constants;
pub(crate) mod utility;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Datum '{0}' is not a recognized reference ellipsoid")]
    UnknownDatum(String),
    #[error("Lambert configuration is not valid: {0}")]
    InvalidConfig(String),
    #[error("UTM zone designator is not valid: {0}")]
    InvalidZoneLetter(String),
    #[error("No UTM zone is defined for latitude {latitude}, longitude {longitude}")]
    UndefinedZone { latitude: f64, longitude: f64 },
}
