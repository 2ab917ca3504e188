use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::Error;

/// A named reference ellipsoid: equatorial radius in meters plus the square
/// of the first eccentricity.
///
/// Values are the published DMA constants carried by the registry; see
/// [`Ellipsoid::lookup`] for the recognized names.
#[derive(Clone, Copy, Debug)]
pub struct Ellipsoid {
    name: &'static str,
    a: f64,
    e2: f64,
}

lazy_static! {
    static ref ELLIPSOIDS: HashMap<&'static str, Ellipsoid> = {
        [
            ("Airy", 6_377_563., 0.006_670_54),
            ("Australian National", 6_378_160., 0.006_694_542),
            ("Bessel 1841", 6_377_397., 0.006_674_372),
            ("Bessel 1841 Nambia", 6_377_484., 0.006_674_372),
            ("Clarke 1866", 6_378_206., 0.006_768_658),
            ("Clarke 1880", 6_378_249., 0.006_803_511),
            ("Everest", 6_377_276., 0.006_637_847),
            ("Fischer 1960 Mercury", 6_378_166., 0.006_693_422),
            ("Fischer 1968", 6_378_150., 0.006_693_422),
            ("GRS 1967", 6_378_160., 0.006_694_605),
            ("GRS 1980", 6_378_137., 0.006_694_38),
            ("Helmert 1906", 6_378_200., 0.006_693_422),
            ("Hough", 6_378_270., 0.006_722_67),
            ("International", 6_378_388., 0.006_722_67),
            ("Krassovsky", 6_378_245., 0.006_693_422),
            ("Modified Airy", 6_377_340., 0.006_670_54),
            ("Modified Everest", 6_377_304., 0.006_637_847),
            ("Modified Fischer 1960", 6_378_155., 0.006_693_422),
            ("South American 1969", 6_378_160., 0.006_694_542),
            ("WGS 60", 6_378_165., 0.006_693_422),
            ("WGS 66", 6_378_145., 0.006_694_542),
            ("WGS 72", 6_378_135., 0.006_694_318),
            ("WGS 84", 6_378_137., 0.006_694_38),
        ]
        .into_iter()
        .map(|(name, a, e2)| (name, Ellipsoid { name, a, e2 }))
        .collect()
    };
}

impl Ellipsoid {
    /// Looks up a reference ellipsoid by name. An empty name selects the
    /// default, `"WGS 84"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDatum`] if the name is not in the registry.
    ///
    /// # Usage
    ///
    /// ```
    /// use geopoint::Ellipsoid;
    ///
    /// let wgs84 = Ellipsoid::lookup("WGS 84").unwrap();
    /// assert_eq!(wgs84.semi_major_axis(), 6_378_137.);
    ///
    /// let default = Ellipsoid::lookup("").unwrap();
    /// assert_eq!(default.name(), "WGS 84");
    ///
    /// assert!(Ellipsoid::lookup("Flat Earth").is_err());
    /// ```
    pub fn lookup(name: &str) -> Result<Ellipsoid, Error> {
        let name = if name.is_empty() { "WGS 84" } else { name };

        ELLIPSOIDS
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownDatum(name.to_string()))
    }

    /// The default datum, WGS 84.
    pub fn wgs84() -> Ellipsoid {
        ELLIPSOIDS["WGS 84"]
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Equatorial radius *a* in meters.
    pub fn semi_major_axis(&self) -> f64 {
        self.a
    }

    /// The squared first eccentricity *e²*.
    pub fn eccentricity_squared(&self) -> f64 {
        self.e2
    }

    /// The first eccentricity *e*.
    pub fn eccentricity(&self) -> f64 {
        self.e2.sqrt()
    }

    /// The squared second eccentricity *e'² = e² / (1 - e²)*.
    pub fn second_eccentricity_squared(&self) -> f64 {
        self.e2 / (1. - self.e2)
    }
}

impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        Ellipsoid::wgs84()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Ellipsoid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Ellipsoid {
    fn deserialize<D>(deserializer: D) -> Result<Ellipsoid, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ellipsoid::lookup(&name).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn registry_covers_the_published_table() {
        assert_eq!(ELLIPSOIDS.len(), 23);
    }

    #[test]
    fn default_is_wgs84() {
        let e = Ellipsoid::default();
        assert_eq!(e.name(), "WGS 84");
        assert_relative_eq!(e.semi_major_axis(), 6_378_137.);
        assert_relative_eq!(e.eccentricity_squared(), 0.006_694_38);
    }

    #[test]
    fn lookup_by_name() {
        let intl = Ellipsoid::lookup("International").unwrap();
        assert_relative_eq!(intl.semi_major_axis(), 6_378_388.);
        assert_relative_eq!(intl.eccentricity_squared(), 0.006_722_67);
    }

    #[test]
    fn unknown_datum_is_rejected() {
        assert!(matches!(
            Ellipsoid::lookup("NAD 1492"),
            Err(Error::UnknownDatum(_))
        ));
    }

    #[test]
    fn derived_eccentricities() {
        let e = Ellipsoid::wgs84();
        assert_relative_eq!(e.eccentricity(), 0.006_694_38_f64.sqrt());
        assert_relative_eq!(
            e.second_eccentricity_squared(),
            0.006_694_38 / (1. - 0.006_694_38)
        );
    }
}
