// UTM central scale factor
pub(crate) const UTM_K0: f64 = 9996.0 / 10_000.;

// False easting applied to standard-mode UTM coordinates
pub(crate) const UTM_FALSE_EASTING: f64 = 500_000.;
// Northing offset applied to southern-hemisphere standard-mode coordinates
pub(crate) const UTM_SOUTHERN_SHIFT: f64 = 10_000_000.;
