use std::fmt::Display;

use crate::{
    constants::{UTM_FALSE_EASTING, UTM_SOUTHERN_SHIFT},
    ellipsoid::Ellipsoid,
    lambert::{LambertConfig, LambertPoint},
    projections::{
        lambert_conformal::LambertConformalConic, transverse_mercator::TransverseMercator,
    },
    utility::sanitize_longitude,
    utm::{self, UtmPoint},
    Error,
};

/// A latitude/longitude point on a reference ellipsoid.
///
/// North latitudes are positive, south latitudes negative; longitudes east
/// of Greenwich are positive and are normalized into `[-180, 180)` at
/// construction. Source and sink of both projections.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeodeticPoint {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    longitude: f64,
    ellipsoid: Ellipsoid,
}

impl GeodeticPoint {
    /// Creates a point on the default WGS 84 ellipsoid.
    ///
    /// # Usage
    ///
    /// ```
    /// use geopoint::GeodeticPoint;
    ///
    /// let point = GeodeticPoint::new(37.42104, -121.85831);
    ///
    /// assert_eq!(point.latitude(), 37.42104);
    /// assert_eq!(point.longitude(), -121.85831);
    /// assert_eq!(point.ellipsoid().name(), "WGS 84");
    ///
    /// // Longitudes are normalized into [-180, 180)
    /// let wrapped = GeodeticPoint::new(0., 200.);
    /// assert_eq!(wrapped.longitude(), -160.);
    /// ```
    pub fn new(lat: f64, lon: f64) -> GeodeticPoint {
        Self::with_ellipsoid(lat, lon, Ellipsoid::wgs84())
    }

    /// Creates a point on a named datum. An empty datum name selects
    /// `"WGS 84"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDatum`] if the datum is not a recognized
    /// reference ellipsoid.
    ///
    /// # Usage
    ///
    /// ```
    /// use geopoint::GeodeticPoint;
    ///
    /// let point = GeodeticPoint::create(55.68, 12.57, "International").unwrap();
    /// assert_eq!(point.ellipsoid().name(), "International");
    ///
    /// assert!(GeodeticPoint::create(55.68, 12.57, "Flat Earth").is_err());
    /// ```
    pub fn create(lat: f64, lon: f64, datum: &str) -> Result<GeodeticPoint, Error> {
        Ok(Self::with_ellipsoid(lat, lon, Ellipsoid::lookup(datum)?))
    }

    /// Creates a point on an already-resolved ellipsoid.
    pub fn with_ellipsoid(lat: f64, lon: f64, ellipsoid: Ellipsoid) -> GeodeticPoint {
        Self {
            latitude: lat,
            longitude: sanitize_longitude(lon),
            ellipsoid,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn ellipsoid(&self) -> Ellipsoid {
        self.ellipsoid
    }

    /// Converts to standard UTM coordinates: the zone (and with it the
    /// longitude of origin) is derived from the point, a 500 km false
    /// easting is applied, and southern-hemisphere northings are offset by
    /// 10,000 km.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedZone`] for points in the Svalbard latitude
    /// band (72-84°N) at longitudes outside [0°, 42°), where the zone
    /// exceptions leave no zone defined.
    ///
    /// # Usage
    ///
    /// ```
    /// use geopoint::GeodeticPoint;
    ///
    /// let point = GeodeticPoint::new(37.42104, -121.85831);
    /// let utm = point.to_utm()?;
    ///
    /// assert_eq!(utm.zone(), "10S");
    /// assert!((utm.easting() - 601021.995134).abs() < 1e-4);
    /// assert!((utm.northing() - 4142193.02983).abs() < 1e-4);
    /// # Ok::<(), geopoint::Error>(())
    /// ```
    pub fn to_utm(&self) -> Result<UtmPoint, Error> {
        let zone = utm::zone_number(self.latitude, self.longitude)?;
        let letter = utm::letter_designator(self.latitude);
        let lon0 = utm::longitude_of_origin(zone);

        let (x, y) = TransverseMercator::new(self.ellipsoid).forward(
            lon0,
            self.latitude,
            self.longitude,
        );

        let easting = x + UTM_FALSE_EASTING;
        let northing = if self.latitude < 0. {
            y + UTM_SOUTHERN_SHIFT
        } else {
            y
        };

        Ok(UtmPoint::new(
            easting,
            northing,
            zone,
            letter,
            lon0,
            self.latitude,
            self.ellipsoid,
        ))
    }

    /// Converts to Local Transverse Mercator coordinates around a caller
    /// chosen longitude of origin, bypassing the UTM zone conventions: no
    /// false easting (points west of the origin get negative eastings) and
    /// no southern-hemisphere offset (southern points get negative
    /// northings).
    ///
    /// The zone designator on the result is still derived from the point's
    /// latitude and the origin; it is bookkeeping only and does not feed
    /// the projection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedZone`] when no zone is defined for the
    /// latitude/origin pair, as for [`GeodeticPoint::to_utm`].
    ///
    /// # Usage
    ///
    /// ```
    /// use geopoint::GeodeticPoint;
    ///
    /// let point = GeodeticPoint::new(37.42104, -121.85831);
    /// let local = point.to_local_tm(-122.)?;
    ///
    /// assert!((local.easting() - 12537.1687295).abs() < 1e-4);
    /// assert!((local.northing() - 4141590.78955).abs() < 1e-4);
    /// assert_eq!(local.zone(), "10S");
    /// # Ok::<(), geopoint::Error>(())
    /// ```
    pub fn to_local_tm(&self, origin_lon: f64) -> Result<UtmPoint, Error> {
        let zone = utm::zone_number(self.latitude, origin_lon)?;
        let letter = utm::letter_designator(self.latitude);

        let (x, y) = TransverseMercator::new(self.ellipsoid).forward(
            origin_lon,
            self.latitude,
            self.longitude,
        );

        Ok(UtmPoint::new(
            x,
            y,
            zone,
            letter,
            origin_lon,
            self.latitude,
            self.ellipsoid,
        ))
    }

    /// Converts to Lambert Conformal Conic coordinates under the given
    /// configuration. Infallible: the configuration was validated when it
    /// was constructed.
    ///
    /// # Usage
    ///
    /// ```
    /// use geopoint::{GeodeticPoint, LambertConfig};
    ///
    /// let config = LambertConfig::create(33.33333, 38.6666, 35.5, -122., 2_000_000., 0.)?;
    /// let point = GeodeticPoint::new(37.42104, -121.85831);
    /// let lambert = point.to_lambert(&config);
    ///
    /// assert!((lambert.easting() - 2012532.43263).abs() < 1e-4);
    /// assert!((lambert.northing() - 212968.846202).abs() < 1e-4);
    /// # Ok::<(), geopoint::Error>(())
    /// ```
    pub fn to_lambert(&self, config: &LambertConfig) -> LambertPoint {
        let (easting, northing) = LambertConformalConic::new(self.ellipsoid, config)
            .forward(self.latitude, self.longitude);

        LambertPoint::with_ellipsoid(easting, northing, *config, self.ellipsoid)
    }
}

impl Display for GeodeticPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(f, "Latitude: {lat}, Longitude: {lon}")
    }
}
