/// Reference ellipsoid given by its semi-major axis (meters) and flattening.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    f: f64,
}

/// WGS-84 reference ellipsoid.
pub const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_223_563);

impl Ellipsoid {
    pub const fn new(semi_major_axis: f64, flattening: f64) -> Self {
        Ellipsoid {
            a: semi_major_axis,
            f: flattening,
        }
    }

    /// Radius at the equator, in meters.
    pub fn semi_major_axis(&self) -> f64 {
        self.a
    }

    pub fn flattening(&self) -> f64 {
        self.f
    }

    /// Radius at the poles, in meters: `b = a(1 - f)`.
    pub fn semi_minor_axis(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    /// `(a² - b²) / b²`
    pub fn second_eccentricity_squared(&self) -> f64 {
        let b = self.semi_minor_axis();
        (self.a * self.a - b * b) / (b * b)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        WGS84
    }
}
