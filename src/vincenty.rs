use crate::coordinate::Coordinate;
use crate::ellipsoid::{Ellipsoid, WGS84};

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Outcome of one inverse solve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SolverResult {
    /// Ellipsoidal arc length in meters.
    Distance(f64),
    /// λ did not settle within the iteration budget (typically near-antipodal points).
    NonConvergent,
}

impl SolverResult {
    pub fn meters(&self) -> Option<f64> {
        match self {
            SolverResult::Distance(meters) => Some(*meters),
            SolverResult::NonConvergent => None,
        }
    }

    pub fn is_convergent(&self) -> bool {
        matches!(self, SolverResult::Distance(_))
    }
}

/// Terms of the last λ iteration needed by the distance series.
#[derive(Copy, Clone)]
struct Iterate {
    sin_sigma: f64,
    cos_sigma: f64,
    sigma: f64,
    cos_sq_alpha: f64,
    cos_2sigma_m: f64,
}

/// Vincenty's inverse method on a reference ellipsoid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VincentySolver {
    ellipsoid: Ellipsoid,
    max_iterations: u32,
    tolerance: f64,
}

impl Default for VincentySolver {
    fn default() -> Self {
        VincentySolver::new(WGS84)
    }
}

impl VincentySolver {
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        VincentySolver {
            ellipsoid,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: f64::EPSILON,
        }
    }

    pub fn with_max_iterations(self, max_iterations: u32) -> Self {
        VincentySolver {
            max_iterations,
            ..self
        }
    }

    /// Largest change in λ (radians) between iterations that counts as converged.
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        VincentySolver { tolerance, ..self }
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Geodesic distance between `p1` and `p2` in meters.
    /// Inputs are trusted to be in range; `Coordinate` guarantees that.
    pub fn solve(&self, p1: &Coordinate, p2: &Coordinate) -> SolverResult {
        let f = self.ellipsoid.flattening();
        let b = self.ellipsoid.semi_minor_axis();

        let l = (p2.longitude_deg() - p1.longitude_deg()).to_radians();
        // Reduced latitudes on the auxiliary sphere
        let u1 = ((1.0 - f) * p1.latitude_deg().to_radians().tan()).atan();
        let u2 = ((1.0 - f) * p2.latitude_deg().to_radians().tan()).atan();
        let (sin_u1, cos_u1) = u1.sin_cos();
        let (sin_u2, cos_u2) = u2.sin_cos();

        let mut lambda = l;
        let mut converged = None;

        for _ in 0..self.max_iterations {
            let (sin_lambda, cos_lambda) = lambda.sin_cos();
            let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
                + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
            .sqrt();

            // Coincident points
            if sin_sigma == 0.0 {
                return SolverResult::Distance(0.0);
            }

            let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
            let sigma = sin_sigma.atan2(cos_sigma);
            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            let cos_sq_alpha = 1.0 - sin_alpha.powi(2);

            // Both points on the equator
            let cos_2sigma_m = if cos_sq_alpha == 0.0 {
                0.0
            } else {
                cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
            };

            let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
            let lambda_prev = lambda;
            lambda = l
                + (1.0 - c)
                    * f
                    * sin_alpha
                    * (sigma
                        + c * sin_sigma
                            * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))));

            if (lambda - lambda_prev).abs() <= self.tolerance {
                converged = Some(Iterate {
                    sin_sigma,
                    cos_sigma,
                    sigma,
                    cos_sq_alpha,
                    cos_2sigma_m,
                });
                break;
            }
        }

        let Some(it) = converged else {
            return SolverResult::NonConvergent;
        };

        let u_sq = it.cos_sq_alpha * self.ellipsoid.second_eccentricity_squared();
        let a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
        let b_coef = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
        let delta_sigma = b_coef
            * it.sin_sigma
            * (it.cos_2sigma_m
                + b_coef / 4.0
                    * (it.cos_sigma * (-1.0 + 2.0 * it.cos_2sigma_m.powi(2))
                        - b_coef / 6.0
                            * it.cos_2sigma_m
                            * (-3.0 + 4.0 * it.sin_sigma.powi(2))
                            * (-3.0 + 4.0 * it.cos_2sigma_m.powi(2))));

        let distance = b * a * (it.sigma - delta_sigma);
        if distance.is_finite() {
            SolverResult::Distance(distance)
        } else {
            SolverResult::NonConvergent
        }
    }
}

/// Vincenty distance on WGS-84 with the default budget of 100 iterations
/// and machine-epsilon tolerance. Output in meters.
pub fn solve(p1: &Coordinate, p2: &Coordinate) -> SolverResult {
    VincentySolver::default().solve(p1, p2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn point(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    fn tokyo() -> Coordinate {
        Coordinate::named("Tokyo, Japan", 35.652832, 139.839478).unwrap()
    }

    fn manila() -> Coordinate {
        Coordinate::named("Manila, Philippines", 14.599512, 120.984222).unwrap()
    }

    fn meters(result: SolverResult) -> f64 {
        result.meters().expect("solver did not converge")
    }

    #[test]
    fn tokyo_to_manila() {
        let d = meters(solve(&tokyo(), &manila()));
        assert!(d > 2_994_000.0 && d < 3_000_000.0, "got {}", d);
        assert!(approx_eq!(f64, d, 2_996_927.130, epsilon = 1e-2), "got {}", d);
    }

    #[test]
    fn flinders_peak_to_buninyong() {
        let flinders = point(-37.951_033_42, 144.424_867_89);
        let buninyong = point(-37.652_821_14, 143.926_495_54);
        let d = meters(solve(&flinders, &buninyong));
        assert!(approx_eq!(f64, d, 54_972.271, epsilon = 1e-3), "got {}", d);
    }

    #[test]
    fn equator_to_pole() {
        let d = meters(solve(&point(0.0, 0.0), &point(90.0, 0.0)));
        assert!(approx_eq!(f64, d, 10_001_965.729, epsilon = 1e-3), "got {}", d);
    }

    #[test]
    fn pole_to_pole() {
        let d = meters(solve(&point(90.0, 0.0), &point(-90.0, 0.0)));
        assert!(approx_eq!(f64, d, 20_003_931.459, epsilon = 1e-3), "got {}", d);
    }

    #[test]
    fn coincident_points_are_exactly_zero() {
        let points = [
            tokyo(),
            manila(),
            point(0.0, 0.0),
            point(-45.5, 179.999),
            point(12.25, -180.0),
            point(-89.9, 33.0),
        ];
        for p in &points {
            assert_eq!(solve(p, p), SolverResult::Distance(0.0), "{}", p);
        }
    }

    #[test]
    fn symmetric() {
        let pairs = [
            (tokyo(), manila()),
            (point(51.4778, -0.0015), point(40.7128, -74.0060)),
            (point(-33.8688, 151.2093), point(-36.8485, 174.7633)),
            (point(0.0, 10.0), point(0.0, 80.0)),
        ];
        for (p1, p2) in &pairs {
            let forward = meters(solve(p1, p2));
            let backward = meters(solve(p2, p1));
            assert!(
                ((forward - backward) / forward).abs() <= 1e-6,
                "{} vs {}",
                forward,
                backward
            );
        }
    }

    #[test]
    fn equatorial_line_matches_arc_on_equator() {
        // Along the equator the geodesic is the equator itself: a·|Δλ|
        let a = WGS84.semi_major_axis();
        for &(lon1, lon2) in &[(0.0, 90.0), (-45.0, 45.0), (10.0, 11.0), (100.0, 30.0)] {
            let d = meters(solve(&point(0.0, lon1), &point(0.0, lon2)));
            let expected = a * (lon2 - lon1).abs().to_radians();
            assert!(
                approx_eq!(f64, d, expected, epsilon = 1e-6),
                "{} -> {}: {} vs {}",
                lon1,
                lon2,
                d,
                expected
            );
        }
    }

    #[test]
    fn near_antipodal_does_not_panic() {
        let result = solve(&point(0.0, 0.0), &point(0.5, 179.7));
        match result {
            SolverResult::Distance(d) => assert!(d.is_finite() && d > 0.0),
            SolverResult::NonConvergent => assert_eq!(result.meters(), None),
        }
    }

    #[test]
    fn exhausted_budget_is_non_convergent() {
        let solver = VincentySolver::default().with_max_iterations(1);
        let result = solver.solve(&tokyo(), &manila());
        assert_eq!(result, SolverResult::NonConvergent);
        assert!(!result.is_convergent());

        let solver = VincentySolver::default().with_max_iterations(0);
        assert_eq!(solver.solve(&tokyo(), &manila()), SolverResult::NonConvergent);
    }

    #[test]
    fn looser_tolerance_stays_close() {
        let strict = meters(solve(&tokyo(), &manila()));
        let loose = meters(
            VincentySolver::default()
                .with_tolerance(1e-12)
                .solve(&tokyo(), &manila()),
        );
        assert!((strict - loose).abs() < 1e-3, "{} vs {}", strict, loose);
    }

    #[test]
    fn default_solver_configuration() {
        let solver = VincentySolver::default();
        assert_eq!(solver.ellipsoid(), &WGS84);
        assert_eq!(solver.max_iterations(), 100);
        assert_eq!(solver.tolerance(), f64::EPSILON);
    }

    #[test]
    fn result_is_in_meters() {
        // One degree of longitude on the equator is about 111.3 km
        let d = meters(solve(&point(0.0, 0.0), &point(0.0, 1.0)));
        assert!(d > 111_000.0 && d < 112_000.0, "got {}", d);
    }
}
