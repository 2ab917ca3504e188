use std::fmt::Display;

use crate::{
    ellipsoid::Ellipsoid, geodetic::GeodeticPoint,
    projections::lambert_conformal::LambertConformalConic, Error,
};

/// Parameters of a Lambert Conformal Conic projection: the two standard
/// parallels where the cone intersects the ellipsoid, the origin of the
/// projected grid, and the false offsets added to keep coordinates positive
/// over the area of interest.
///
/// Validated once at construction; every configuration held by a
/// [`LambertPoint`] is known to be usable.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LambertConfig {
    first_parallel: f64,
    second_parallel: f64,
    latitude_of_origin: f64,
    longitude_of_origin: f64,
    false_easting: f64,
    false_northing: f64,
}

impl LambertConfig {
    /// Builds a validated configuration. Angles in degrees, offsets in
    /// meters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if either standard parallel lies
    /// outside [-90°, 90°], or if the two coincide (the cone degenerates
    /// and the projection math divides by zero).
    ///
    /// # Usage
    ///
    /// ```
    /// use geopoint::LambertConfig;
    ///
    /// let config = LambertConfig::create(33.33333, 38.6666, 35.5, -122., 2_000_000., 0.);
    /// assert!(config.is_ok());
    ///
    /// let degenerate = LambertConfig::create(35., 35., 35.5, -122., 0., 0.);
    /// assert!(degenerate.is_err());
    /// ```
    pub fn create(
        first_parallel: f64,
        second_parallel: f64,
        latitude_of_origin: f64,
        longitude_of_origin: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Result<LambertConfig, Error> {
        if !(-90_f64..=90.).contains(&first_parallel)
            || !(-90_f64..=90.).contains(&second_parallel)
        {
            return Err(Error::InvalidConfig(format!(
                "standard parallels {first_parallel} and {second_parallel} must lie within [-90, 90]"
            )));
        }

        if (first_parallel - second_parallel).abs() < f64::EPSILON {
            return Err(Error::InvalidConfig(format!(
                "standard parallels must differ, both are {first_parallel}"
            )));
        }

        Ok(Self {
            first_parallel,
            second_parallel,
            latitude_of_origin,
            longitude_of_origin,
            false_easting,
            false_northing,
        })
    }

    pub fn first_parallel(&self) -> f64 {
        self.first_parallel
    }

    pub fn second_parallel(&self) -> f64 {
        self.second_parallel
    }

    pub fn latitude_of_origin(&self) -> f64 {
        self.latitude_of_origin
    }

    pub fn longitude_of_origin(&self) -> f64 {
        self.longitude_of_origin
    }

    pub fn false_easting(&self) -> f64 {
        self.false_easting
    }

    pub fn false_northing(&self) -> f64 {
        self.false_northing
    }
}

/// A Lambert Conformal Conic coordinate, carrying the configuration and
/// ellipsoid that produced it.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LambertPoint {
    easting: f64,
    northing: f64,
    config: LambertConfig,
    ellipsoid: Ellipsoid,
}

impl LambertPoint {
    /// Creates a point on the default WGS 84 ellipsoid.
    pub fn new(easting: f64, northing: f64, config: LambertConfig) -> LambertPoint {
        Self::with_ellipsoid(easting, northing, config, Ellipsoid::wgs84())
    }

    /// Creates a point on a named datum.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDatum`] for an unrecognized datum name.
    pub fn with_datum(
        easting: f64,
        northing: f64,
        config: LambertConfig,
        datum: &str,
    ) -> Result<LambertPoint, Error> {
        Ok(Self::with_ellipsoid(
            easting,
            northing,
            config,
            Ellipsoid::lookup(datum)?,
        ))
    }

    pub(crate) fn with_ellipsoid(
        easting: f64,
        northing: f64,
        config: LambertConfig,
        ellipsoid: Ellipsoid,
    ) -> LambertPoint {
        Self {
            easting,
            northing,
            config,
            ellipsoid,
        }
    }

    pub fn easting(&self) -> f64 {
        self.easting
    }

    pub fn northing(&self) -> f64 {
        self.northing
    }

    pub fn config(&self) -> LambertConfig {
        self.config
    }

    pub fn ellipsoid(&self) -> Ellipsoid {
        self.ellipsoid
    }

    /// Converts back to latitude/longitude under the carried configuration.
    ///
    /// # Usage
    ///
    /// ```
    /// use geopoint::{LambertConfig, LambertPoint};
    ///
    /// let config = LambertConfig::create(33.33333, 38.6666, 35.5, -122., 2_000_000., 0.)?;
    /// let point = LambertPoint::new(2012532.43263, 212968.846202, config).to_geodetic();
    ///
    /// assert!((point.latitude() - 37.42104).abs() < 1e-5);
    /// assert!((point.longitude() - -121.85831).abs() < 1e-5);
    /// # Ok::<(), geopoint::Error>(())
    /// ```
    pub fn to_geodetic(&self) -> GeodeticPoint {
        let (lat, lon) = LambertConformalConic::new(self.ellipsoid, &self.config)
            .inverse(self.easting, self.northing);

        GeodeticPoint::with_ellipsoid(lat, lon, self.ellipsoid)
    }
}

impl Display for LambertPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        write!(f, "Northing: {northing}, Easting: {easting}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallels_outside_ninety_degrees_are_rejected() {
        assert!(matches!(
            LambertConfig::create(91., 38., 35.5, -122., 0., 0.),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            LambertConfig::create(33., -90.5, 35.5, -122., 0., 0.),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn coincident_parallels_are_rejected() {
        assert!(matches!(
            LambertConfig::create(35., 35., 35.5, -122., 0., 0.),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn display_is_human_readable() {
        let config = LambertConfig::create(33.33333, 38.6666, 35.5, -122., 2_000_000., 0.).unwrap();
        let point = LambertPoint::new(2012532.5, 212968.75, config);
        assert_eq!(point.to_string(), "Northing: 212968.75, Easting: 2012532.5");
    }
}
