use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Subtraction of absolute temperatures.
///
/// `uom` does not allow `ThermodynamicTemperature - ThermodynamicTemperature`,
/// because the result is a different kind of quantity: a
/// [`TemperatureInterval`]. The temperature change between two steam states
/// is such an interval, and rendering it in °F must scale by 9/5 without the
/// 32 °F offset.
///
/// See [uom#380](https://github.com/iliekturtles/uom/issues/380).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}
