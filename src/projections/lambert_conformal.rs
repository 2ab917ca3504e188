use std::f64::consts::FRAC_PI_2;

use crate::{
    ellipsoid::Ellipsoid,
    lambert::LambertConfig,
    utility::{msfn, tsfn},
};

/// Lambert Conformal Conic projection math for one ellipsoid and one
/// validated configuration, following the EPSG guidance note 7-2 formulas.
///
/// The cone constant `n`, the scale term `F`, and the radius of the origin
/// parallel are derived once at construction and shared by both directions.
pub(crate) struct LambertConformalConic {
    a: f64,
    e: f64,
    n: f64,
    f: f64,
    r_origin: f64,
    lon0: f64,
    false_easting: f64,
    false_northing: f64,
}

impl LambertConformalConic {
    pub(crate) fn new(ellipsoid: Ellipsoid, config: &LambertConfig) -> LambertConformalConic {
        let e2 = ellipsoid.eccentricity_squared();
        let e = ellipsoid.eccentricity();
        let a = ellipsoid.semi_major_axis();

        let phi1 = config.first_parallel().to_radians();
        let phi2 = config.second_parallel().to_radians();
        let phi0 = config.latitude_of_origin().to_radians();

        let m1 = msfn(phi1, e2);
        let m2 = msfn(phi2, e2);
        let t1 = tsfn(phi1, e);
        let t2 = tsfn(phi2, e);
        let t0 = tsfn(phi0, e);

        let n = (m1.ln() - m2.ln()) / (t1.ln() - t2.ln());
        let f = m1 / (n * t1.powf(n));
        let r_origin = a * f * t0.powf(n);

        Self {
            a,
            e,
            n,
            f,
            r_origin,
            lon0: config.longitude_of_origin().to_radians(),
            false_easting: config.false_easting(),
            false_northing: config.false_northing(),
        }
    }

    /// Projects a geodetic coordinate; degrees in, meters out.
    pub(crate) fn forward(&self, lat: f64, lon: f64) -> (f64, f64) {
        let t = tsfn(lat.to_radians(), self.e);
        let r = self.a * self.f * t.powf(self.n);
        let theta = self.n * (lon.to_radians() - self.lon0);

        (
            self.false_easting + r * theta.sin(),
            self.false_northing + self.r_origin - r * theta.cos(),
        )
    }

    /// Inverts a projected coordinate; meters in, degrees out.
    ///
    /// The latitude is recovered by three fixed iterations of the
    /// conformal-latitude correction, not by iterating to convergence.
    pub(crate) fn inverse(&self, easting: f64, northing: f64) -> (f64, f64) {
        let dx = easting - self.false_easting;
        let dy = self.r_origin - (northing - self.false_northing);

        let r = dx.hypot(dy);
        let t = (r / (self.a * self.f)).powf(1. / self.n);
        let theta = dx.atan2(dy);

        let lon = theta / self.n + self.lon0;

        let mut phi = FRAC_PI_2 - 2. * t.atan();
        for _ in 0..3 {
            let esin = self.e * phi.sin();
            phi = FRAC_PI_2
                - 2. * (t * ((1. - esin) / (1. + esin)).powf(self.e / 2.)).atan();
        }

        (phi.to_degrees(), lon.to_degrees())
    }
}
