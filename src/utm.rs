use std::fmt::Display;

use crate::{
    constants::{UTM_FALSE_EASTING, UTM_SOUTHERN_SHIFT},
    ellipsoid::Ellipsoid,
    geodetic::GeodeticPoint,
    projections::transverse_mercator::TransverseMercator,
    Error,
};

/// Computes the UTM zone number for a coordinate, including the Norway and
/// Svalbard exceptions.
///
/// # Errors
///
/// Returns [`Error::UndefinedZone`] inside the Svalbard latitude band
/// (72-84°N) for longitudes outside [0°, 42°), where the exception bands
/// leave no zone defined.
///
/// # Usage
///
/// ```
/// use geopoint::utm::zone_number;
///
/// assert_eq!(zone_number(37.42104, -121.85831).unwrap(), 10);
/// // The Norway exception
/// assert_eq!(zone_number(60., 5.).unwrap(), 32);
/// // The Svalbard exception
/// assert_eq!(zone_number(75., 10.).unwrap(), 33);
/// ```
pub fn zone_number(lat: f64, lon: f64) -> Result<i32, Error> {
    if (72_f64..84.).contains(&lat) {
        // The Svalbard exception: only the odd zones 31-37 exist
        return match lon {
            l if (0_f64..9.).contains(&l) => Ok(31),
            l if (9_f64..21.).contains(&l) => Ok(33),
            l if (21_f64..33.).contains(&l) => Ok(35),
            l if (33_f64..42.).contains(&l) => Ok(37),
            _ => Err(Error::UndefinedZone {
                latitude: lat,
                longitude: lon,
            }),
        };
    }

    // The Norway exception: zone 32 is widened westward
    if (56_f64..64.).contains(&lat) && (3_f64..12.).contains(&lon) {
        return Ok(32);
    }

    Ok(((lon + 180.) / 6.).floor() as i32 + 1)
}

/// Computes the UTM latitude-band letter for a latitude: eight-degree bands
/// from 'C' (80°S) through 'X' (84°N, the only band inclusive at both
/// ends). Returns the sentinel 'Z' outside the UTM limits of 84°N to 80°S.
///
/// # Usage
///
/// ```
/// use geopoint::utm::letter_designator;
///
/// assert_eq!(letter_designator(37.42104), 'S');
/// assert_eq!(letter_designator(-33.45), 'H');
/// assert_eq!(letter_designator(84.), 'X');
/// assert_eq!(letter_designator(89.), 'Z');
/// ```
pub fn letter_designator(lat: f64) -> char {
    match lat {
        l if (72_f64..=84.).contains(&l) => 'X',
        l if (64_f64..72.).contains(&l) => 'W',
        l if (56_f64..64.).contains(&l) => 'V',
        l if (48_f64..56.).contains(&l) => 'U',
        l if (40_f64..48.).contains(&l) => 'T',
        l if (32_f64..40.).contains(&l) => 'S',
        l if (24_f64..32.).contains(&l) => 'R',
        l if (16_f64..24.).contains(&l) => 'Q',
        l if (8_f64..16.).contains(&l) => 'P',
        l if (0_f64..8.).contains(&l) => 'N',
        l if (-8_f64..0.).contains(&l) => 'M',
        l if (-16_f64..-8.).contains(&l) => 'L',
        l if (-24_f64..-16.).contains(&l) => 'K',
        l if (-32_f64..-24.).contains(&l) => 'J',
        l if (-40_f64..-32.).contains(&l) => 'H',
        l if (-48_f64..-40.).contains(&l) => 'G',
        l if (-56_f64..-48.).contains(&l) => 'F',
        l if (-64_f64..-56.).contains(&l) => 'E',
        l if (-72_f64..-64.).contains(&l) => 'D',
        l if (-80_f64..-72.).contains(&l) => 'C',
        // Sentinel flagging a latitude outside the UTM limits
        _ => 'Z',
    }
}

/// The central meridian of a UTM zone; +3 puts the origin in the middle of
/// the six-degree zone.
pub fn longitude_of_origin(zone_number: i32) -> f64 {
    f64::from((zone_number - 1) * 6 - 180 + 3)
}

/// Splits a designator like `"10S"` into its number and band letter.
fn parse_zone(zone: &str) -> Result<(i32, char), Error> {
    let split = zone
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| Error::InvalidZoneLetter(format!("'{zone}' has no band letter")))?;

    let (digits, rest) = zone.split_at(split);
    let mut letters = rest.chars();
    let letter = letters.next().unwrap_or_default();
    if letters.next().is_some() {
        return Err(Error::InvalidZoneLetter(format!(
            "'{zone}' has trailing characters after the band letter"
        )));
    }

    let number = digits
        .parse()
        .map_err(|_| Error::InvalidZoneLetter(format!("'{zone}' has no zone number")))?;

    Ok((number, letter))
}

/// Approximate mid-band latitude for a band letter. Only populates the
/// origin bookkeeping of points built from a designator string; the
/// projection math never reads it.
fn band_origin_latitude(letter: char) -> Result<f64, Error> {
    let mid = match letter {
        'X' => (84. + 72.) / 2.,
        'W' => (72. + 64.) / 2.,
        'V' => (64. + 56.) / 2.,
        'U' => (56. + 48.) / 2.,
        'T' => (48. + 40.) / 2.,
        'S' => (40. + 32.) / 2.,
        'R' => (32. + 24.) / 2.,
        'Q' => (24. + 16.) / 2.,
        'P' => (16. + 8.) / 2.,
        'N' => (8. + 0.) / 2.,
        'M' => (0. - 8.) / 2.,
        'L' => (-8. - 16.) / 2.,
        'K' => (-16. - 24.) / 2.,
        'J' => (-24. - 32.) / 2.,
        'H' => (-32. - 40.) / 2.,
        'G' => (-40. - 48.) / 2.,
        'F' => (-48. - 56.) / 2.,
        'E' => (-56. - 64.) / 2.,
        'D' => (-64. - 72.) / 2.,
        'C' => (-72. - 80.) / 2.,
        _ => {
            return Err(Error::InvalidZoneLetter(format!(
                "'{letter}' is not a valid UTM band letter"
            )))
        }
    };

    Ok(mid)
}

// Band letters below 'N' cover the southern hemisphere
fn is_southern(letter: char) -> bool {
    letter < 'N'
}

/// A Transverse Mercator coordinate: easting/northing in meters plus the
/// zone designator and the projection origin needed to invert it.
///
/// Built either from a zone designator string (origins derived from the
/// zone) or from an explicit origin (zone re-derived from the origin) —
/// see [`UtmPoint::from_zone`] and [`UtmPoint::from_origin`]. Conversions
/// from [`GeodeticPoint`] use the second form.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UtmPoint {
    easting: f64,
    northing: f64,
    zone_number: i32,
    zone_letter: char,
    longitude_of_origin: f64,
    latitude_of_origin: f64,
    ellipsoid: Ellipsoid,
}

impl UtmPoint {
    pub(crate) fn new(
        easting: f64,
        northing: f64,
        zone_number: i32,
        zone_letter: char,
        longitude_of_origin: f64,
        latitude_of_origin: f64,
        ellipsoid: Ellipsoid,
    ) -> UtmPoint {
        Self {
            easting,
            northing,
            zone_number,
            zone_letter,
            longitude_of_origin,
            latitude_of_origin,
            ellipsoid,
        }
    }

    /// Creates a standard UTM point from a zone designator string like
    /// `"10S"`, on the default WGS 84 ellipsoid. The longitude of origin is
    /// the zone's central meridian; the latitude of origin is the
    /// approximate middle of the band.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZoneLetter`] if the designator is malformed
    /// or its band letter is not one of C-X (I and O excluded).
    ///
    /// # Usage
    ///
    /// ```
    /// use geopoint::UtmPoint;
    ///
    /// let utm = UtmPoint::from_zone(601021.995134, 4142193.02983, "10S")?;
    ///
    /// assert_eq!(utm.zone_number(), 10);
    /// assert_eq!(utm.zone_letter(), 'S');
    /// assert_eq!(utm.longitude_of_origin(), -123.);
    /// assert_eq!(utm.latitude_of_origin(), 36.);
    ///
    /// assert!(UtmPoint::from_zone(0., 0., "10I").is_err());
    /// # Ok::<(), geopoint::Error>(())
    /// ```
    pub fn from_zone(easting: f64, northing: f64, zone: &str) -> Result<UtmPoint, Error> {
        Self::from_zone_with_datum(easting, northing, zone, "")
    }

    /// Like [`UtmPoint::from_zone`], on a named datum.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZoneLetter`] for a malformed designator or
    /// [`Error::UnknownDatum`] for an unrecognized datum name.
    pub fn from_zone_with_datum(
        easting: f64,
        northing: f64,
        zone: &str,
        datum: &str,
    ) -> Result<UtmPoint, Error> {
        let ellipsoid = Ellipsoid::lookup(datum)?;
        let (number, letter) = parse_zone(zone)?;
        let latitude_of_origin = band_origin_latitude(letter)?;

        Ok(Self::new(
            easting,
            northing,
            number,
            letter,
            longitude_of_origin(number),
            latitude_of_origin,
            ellipsoid,
        ))
    }

    /// Creates a Transverse Mercator point from an explicit projection
    /// origin, on the default WGS 84 ellipsoid. The zone designator is
    /// re-derived from the origin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedZone`] if no zone is defined for the
    /// origin (the Svalbard gap).
    pub fn from_origin(
        easting: f64,
        northing: f64,
        latitude_of_origin: f64,
        longitude_of_origin: f64,
    ) -> Result<UtmPoint, Error> {
        Self::from_origin_with_datum(easting, northing, latitude_of_origin, longitude_of_origin, "")
    }

    /// Like [`UtmPoint::from_origin`], on a named datum.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedZone`] if no zone is defined for the
    /// origin or [`Error::UnknownDatum`] for an unrecognized datum name.
    pub fn from_origin_with_datum(
        easting: f64,
        northing: f64,
        latitude_of_origin: f64,
        longitude_of_origin: f64,
        datum: &str,
    ) -> Result<UtmPoint, Error> {
        let ellipsoid = Ellipsoid::lookup(datum)?;
        let number = zone_number(latitude_of_origin, longitude_of_origin)?;
        let letter = letter_designator(latitude_of_origin);

        Ok(Self::new(
            easting,
            northing,
            number,
            letter,
            longitude_of_origin,
            latitude_of_origin,
            ellipsoid,
        ))
    }

    pub fn easting(&self) -> f64 {
        self.easting
    }

    pub fn northing(&self) -> f64 {
        self.northing
    }

    pub fn zone_number(&self) -> i32 {
        self.zone_number
    }

    pub fn zone_letter(&self) -> char {
        self.zone_letter
    }

    /// The zone designator string, number then band letter.
    ///
    /// # Example
    /// ```
    /// use geopoint::GeodeticPoint;
    ///
    /// let utm = GeodeticPoint::new(37.42104, -121.85831).to_utm().unwrap();
    /// assert_eq!(utm.zone(), "10S");
    /// ```
    pub fn zone(&self) -> String {
        format!("{}{}", self.zone_number, self.zone_letter)
    }

    pub fn longitude_of_origin(&self) -> f64 {
        self.longitude_of_origin
    }

    pub fn latitude_of_origin(&self) -> f64 {
        self.latitude_of_origin
    }

    pub fn ellipsoid(&self) -> Ellipsoid {
        self.ellipsoid
    }

    /// Returns whether the band letter places the point in the northern
    /// hemisphere.
    pub fn is_north(&self) -> bool {
        !is_southern(self.zone_letter)
    }

    /// Converts standard UTM coordinates back to latitude/longitude: the
    /// 500 km false easting is removed, and for southern-band letters the
    /// 10,000 km northing offset as well.
    ///
    /// # Usage
    ///
    /// ```
    /// use geopoint::UtmPoint;
    ///
    /// let utm = UtmPoint::from_zone(601021.995134, 4142193.02983, "10S")?;
    /// let point = utm.to_geodetic();
    ///
    /// assert!((point.latitude() - 37.42104).abs() < 1e-6);
    /// assert!((point.longitude() - -121.85831).abs() < 1e-6);
    /// # Ok::<(), geopoint::Error>(())
    /// ```
    pub fn to_geodetic(&self) -> GeodeticPoint {
        let x = self.easting - UTM_FALSE_EASTING;
        let y = if is_southern(self.zone_letter) {
            self.northing - UTM_SOUTHERN_SHIFT
        } else {
            self.northing
        };

        let (lat, lon) =
            TransverseMercator::new(self.ellipsoid).inverse(self.longitude_of_origin, x, y);

        GeodeticPoint::with_ellipsoid(lat, lon, self.ellipsoid)
    }

    /// Converts Local Transverse Mercator coordinates back to
    /// latitude/longitude relative to the given longitude of origin. No
    /// false easting or hemisphere offset is removed; the hemisphere is
    /// whatever the sign of the northing encodes, so a southern-hemisphere
    /// standard-UTM northing handed to this function comes back as its
    /// northern equivalent.
    ///
    /// # Usage
    ///
    /// ```
    /// use geopoint::GeodeticPoint;
    ///
    /// let local = GeodeticPoint::new(37.42104, -121.85831).to_local_tm(-122.)?;
    /// let point = local.to_geodetic_local(-122.);
    ///
    /// assert!((point.latitude() - 37.42104).abs() < 1e-6);
    /// assert!((point.longitude() - -121.85831).abs() < 1e-6);
    /// # Ok::<(), geopoint::Error>(())
    /// ```
    pub fn to_geodetic_local(&self, origin_lon: f64) -> GeodeticPoint {
        let (lat, lon) =
            TransverseMercator::new(self.ellipsoid).inverse(origin_lon, self.easting, self.northing);

        GeodeticPoint::with_ellipsoid(lat, lon, self.ellipsoid)
    }
}

impl Display for UtmPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        write!(
            f,
            "Northing: {northing}, Easting: {easting}, Zone: {}{}",
            self.zone_number, self.zone_letter
        )
    }
}
