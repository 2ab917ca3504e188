use crate::{constants::UTM_K0, ellipsoid::Ellipsoid};

/// Transverse Mercator projection math for one ellipsoid, using the USGS
/// Bulletin 1532 series expansions.
///
/// Works in raw projection coordinates: callers apply the false-easting and
/// hemisphere-offset conventions of their coordinate system. Latitudes and
/// longitudes are degrees, eastings and northings meters.
pub(crate) struct TransverseMercator {
    a: f64,
    e2: f64,
    // Second eccentricity squared, e'^2 = e^2 / (1 - e^2)
    ep2: f64,
    // Footpoint series parameter, (1 - sqrt(1 - e^2)) / (1 + sqrt(1 - e^2))
    e1: f64,
    k0: f64,
}

impl TransverseMercator {
    pub(crate) fn new(ellipsoid: Ellipsoid) -> TransverseMercator {
        let e2 = ellipsoid.eccentricity_squared();
        let root = (1. - e2).sqrt();

        Self {
            a: ellipsoid.semi_major_axis(),
            e2,
            ep2: ellipsoid.second_eccentricity_squared(),
            e1: (1. - root) / (1. + root),
            k0: UTM_K0,
        }
    }

    /// Projects a geodetic coordinate onto the plane of the meridian `lon0`.
    ///
    /// Returns raw (easting, northing). The poles are outside the projection
    /// domain and produce non-finite values rather than an error.
    pub(crate) fn forward(&self, lon0: f64, lat: f64, lon: f64) -> (f64, f64) {
        let phi = lat.to_radians();
        let sin_phi = phi.sin();
        let cos_phi = phi.cos();
        let tan_phi = phi.tan();

        let n = self.a / (1. - self.e2 * sin_phi * sin_phi).sqrt();
        let t = tan_phi * tan_phi;
        let c = self.ep2 * cos_phi * cos_phi;
        let a = cos_phi * (lon.to_radians() - lon0.to_radians());

        let m = self.meridional_arc(phi);

        let easting = self.k0
            * n
            * (a
                + (1. - t + c) * a.powi(3) / 6.
                + (5. - 18. * t + t * t + 72. * c - 58. * self.ep2) * a.powi(5) / 120.);

        let northing = self.k0
            * (m
                + n * tan_phi
                    * (a * a / 2.
                        + (5. - t + 9. * c + 4. * c * c) * a.powi(4) / 24.
                        + (61. - 58. * t + t * t + 600. * c - 330. * self.ep2) * a.powi(6)
                            / 720.));

        (easting, northing)
    }

    /// Inverts raw (easting, northing) relative to the meridian `lon0`.
    ///
    /// Returns (latitude, longitude) in degrees. The footpoint latitude
    /// comes from the e1-based Fourier series, then the D-parameter series
    /// corrects it to the final coordinate.
    pub(crate) fn inverse(&self, lon0: f64, x: f64, y: f64) -> (f64, f64) {
        let e1 = self.e1;

        let m = y / self.k0;
        let mu = m / (self.a * self.rectifying_scale());

        let phi1 = mu
            + (3. * e1 / 2. - 27. * e1.powi(3) / 32.) * (2. * mu).sin()
            + (21. * e1 * e1 / 16. - 55. * e1.powi(4) / 32.) * (4. * mu).sin()
            + (151. * e1.powi(3) / 96.) * (6. * mu).sin();

        let sin_phi1 = phi1.sin();
        let cos_phi1 = phi1.cos();
        let tan_phi1 = phi1.tan();

        let n1 = self.a / (1. - self.e2 * sin_phi1 * sin_phi1).sqrt();
        let t1 = tan_phi1 * tan_phi1;
        let c1 = self.ep2 * cos_phi1 * cos_phi1;
        let r1 = self.a * (1. - self.e2) / (1. - self.e2 * sin_phi1 * sin_phi1).powf(1.5);
        let d = x / (n1 * self.k0);

        let lat = phi1
            - (n1 * tan_phi1 / r1)
                * (d * d / 2.
                    - (5. + 3. * t1 + 10. * c1 - 4. * c1 * c1 - 9. * self.ep2) * d.powi(4) / 24.
                    + (61. + 90. * t1 + 298. * c1 + 45. * t1 * t1
                        - 252. * self.ep2
                        - 3. * c1 * c1)
                        * d.powi(6)
                        / 720.);

        let dlon = (d - (1. + 2. * t1 + c1) * d.powi(3) / 6.
            + (5. - 2. * c1 + 28. * t1 - 3. * c1 * c1 + 8. * self.ep2 + 24. * t1 * t1)
                * d.powi(5)
                / 120.)
            / cos_phi1;

        (lat.to_degrees(), lon0 + dlon.to_degrees())
    }

    /// Meridional arc length from the equator to `phi`, the four-term
    /// closed-form series in the eccentricity.
    fn meridional_arc(&self, phi: f64) -> f64 {
        let e2 = self.e2;
        let e4 = e2 * e2;
        let e6 = e4 * e2;

        self.a
            * ((1. - e2 / 4. - 3. * e4 / 64. - 5. * e6 / 256.) * phi
                - (3. * e2 / 8. + 3. * e4 / 32. + 45. * e6 / 1024.) * (2. * phi).sin()
                + (15. * e4 / 256. + 45. * e6 / 1024.) * (4. * phi).sin()
                - (35. * e6 / 3072.) * (6. * phi).sin())
    }

    // Leading coefficient of the meridional arc, shared by the footpoint
    // series.
    fn rectifying_scale(&self) -> f64 {
        let e2 = self.e2;
        let e4 = e2 * e2;
        let e6 = e4 * e2;

        1. - e2 / 4. - 3. * e4 / 64. - 5. * e6 / 256.
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn forward_matches_reference_values() {
        let tm = TransverseMercator::new(Ellipsoid::wgs84());
        let (x, y) = tm.forward(-123., 37.42104, -121.85831);

        // Raw coordinates, before the 500km standard false easting
        assert_relative_eq!(x, 601_021.995_134 - 500_000., epsilon = 1e-4);
        assert_relative_eq!(y, 4_142_193.029_83, epsilon = 1e-4);
    }

    #[test]
    fn inverse_undoes_forward() {
        let tm = TransverseMercator::new(Ellipsoid::wgs84());
        let (x, y) = tm.forward(9., 56.3, 11.9);
        let (lat, lon) = tm.inverse(9., x, y);

        assert_relative_eq!(lat, 56.3, epsilon = 1e-7);
        assert_relative_eq!(lon, 11.9, epsilon = 1e-7);
    }

    #[test]
    fn southern_latitudes_project_to_negative_northings() {
        let tm = TransverseMercator::new(Ellipsoid::wgs84());
        let (_, y) = tm.forward(-63., -33.45, -61.5);

        assert!(y < 0.);

        let (lat, _) = tm.inverse(-63., 0., y);
        assert!(lat < 0.);
    }
}
