use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// Subtracting two [`ThermodynamicTemperature`] values (absolute temperatures)
/// should yield a [`TemperatureInterval`], which [`uom`] does not support directly.
/// See [#380](https://github.com/iliekturtles/uom/issues/380).
///
/// [`TemperatureInterval`]: uom::si::f64::TemperatureInterval
/// [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature
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

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_fahrenheit as delta_fahrenheit,
        thermodynamic_temperature::degree_fahrenheit,
    };

    #[test]
    fn intake_rise_over_ambient() {
        let ambient = ThermodynamicTemperature::new::<degree_fahrenheit>(95.0);
        let intake = ThermodynamicTemperature::new::<abs_kelvin>(313.15);

        // 313.15 K is 104 °F.
        assert_relative_eq!(
            intake.minus(ambient).get::<delta_fahrenheit>(),
            9.0,
            epsilon = 1e-9
        );

        // Intake cooler than ambient gives a negative rise.
        assert_relative_eq!(
            ambient.minus(intake).get::<delta_fahrenheit>(),
            -9.0,
            epsilon = 1e-9
        );
    }
}
