use twine_solvers::equation::bisection;
use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

/// Tolerances used while resolving a steam state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverConfig {
    /// How close a given temperature must be to the saturation temperature
    /// for a `(p, T)` state to be reported as saturated.
    pub saturation_temp_tol: TemperatureInterval,

    /// Relative tolerance for treating a given property as equal to its
    /// saturated-liquid or saturated-vapor value.
    pub boundary_rel_tol: f64,

    /// Gap kept between the quality inversion bracket and the critical
    /// temperature, where saturation lookups become singular.
    pub critical_margin: TemperatureInterval,

    /// Number of saturation temperatures sampled to bracket a quality inversion.
    ///
    /// Saturated vapor enthalpy and internal energy peak well below the
    /// critical point, so a target can have two roots; the lowest is used.
    pub scan_points: usize,

    /// Maximum iteration count for the quality inversion.
    pub max_iters: usize,

    /// Absolute tolerance on the saturation temperature search variable.
    pub temp_tol: TemperatureInterval,

    /// Tolerance on the quality inversion residual, relative to the target.
    pub residual_tol: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            saturation_temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-6),
            boundary_rel_tol: 1e-9,
            critical_margin: TemperatureInterval::new::<delta_kelvin>(1e-3),
            scan_points: 64,
            max_iters: 100,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
            residual_tol: 1e-12,
        }
    }
}

impl ResolverConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.residual_tol,
        }
    }

    /// Returns `true` if `value` matches `bound` within [`Self::boundary_rel_tol`].
    pub(super) fn at_bound(&self, value: f64, bound: f64) -> bool {
        (value - bound).abs() <= self.boundary_rel_tol * value.abs().max(bound.abs())
    }
}
