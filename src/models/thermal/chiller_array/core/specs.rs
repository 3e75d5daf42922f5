//! Equipment specifications shared by every unit in the array.

use thiserror::Error;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_fahrenheit};

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

/// Errors that can occur when constructing [`ChillerSpecs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpecsError {
    #[error("rated capacity is invalid")]
    RatedCapacity(#[source] ConstraintError),

    #[error("derating slope is invalid")]
    DeratingSlope(#[source] ConstraintError),

    #[error("design load is invalid")]
    DesignLoad(#[source] ConstraintError),
}

/// Rating, derating and lockout behavior of one chiller model, plus the
/// cooling load the whole array must carry.
///
/// Capacities are in tons of refrigeration.
/// The derating slope is the percent of rated capacity lost per °F of
/// entering air above the rated entering temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChillerSpecs {
    rated_capacity: Constrained<f64, StrictlyPositive>,
    rated_entering_temp: ThermodynamicTemperature,
    derating_slope: Constrained<f64, StrictlyPositive>,
    lockout_temp: ThermodynamicTemperature,
    design_load: Constrained<f64, StrictlyPositive>,
}

impl ChillerSpecs {
    /// Creates a set of chiller specifications.
    ///
    /// A lockout temperature at or below the rated entering temperature is
    /// accepted; such a unit locks out before it ever derates.
    ///
    /// # Errors
    ///
    /// Returns a [`SpecsError`] if the rated capacity, derating slope or
    /// design load is not strictly positive.
    pub fn new(
        rated_capacity_tons: f64,
        rated_entering_temp: ThermodynamicTemperature,
        derating_slope_pct_per_f: f64,
        lockout_temp: ThermodynamicTemperature,
        design_load_tons: f64,
    ) -> Result<Self, SpecsError> {
        Ok(Self {
            rated_capacity: StrictlyPositive::new(rated_capacity_tons)
                .map_err(SpecsError::RatedCapacity)?,
            rated_entering_temp,
            derating_slope: StrictlyPositive::new(derating_slope_pct_per_f)
                .map_err(SpecsError::DeratingSlope)?,
            lockout_temp,
            design_load: StrictlyPositive::new(design_load_tons).map_err(SpecsError::DesignLoad)?,
        })
    }

    /// Returns these specs with a different lockout temperature.
    #[must_use]
    pub fn with_lockout_temp(mut self, lockout_temp: ThermodynamicTemperature) -> Self {
        self.lockout_temp = lockout_temp;
        self
    }

    #[must_use]
    pub fn rated_capacity_tons(&self) -> f64 {
        self.rated_capacity.get()
    }

    #[must_use]
    pub fn rated_entering_temp(&self) -> ThermodynamicTemperature {
        self.rated_entering_temp
    }

    #[must_use]
    pub fn derating_slope_pct_per_f(&self) -> f64 {
        self.derating_slope.get()
    }

    #[must_use]
    pub fn lockout_temp(&self) -> ThermodynamicTemperature {
        self.lockout_temp
    }

    #[must_use]
    pub fn design_load_tons(&self) -> f64 {
        self.design_load.get()
    }
}

/// 500 ton units rated at 95 °F, derating 1.5 %/°F, locking out at 127 °F,
/// serving a 2000 ton design load.
impl Default for ChillerSpecs {
    fn default() -> Self {
        Self {
            rated_capacity: Constrained::new_unchecked(500.0),
            rated_entering_temp: ThermodynamicTemperature::new::<degree_fahrenheit>(95.0),
            derating_slope: Constrained::new_unchecked(1.5),
            lockout_temp: ThermodynamicTemperature::new::<degree_fahrenheit>(127.0),
            design_load: Constrained::new_unchecked(2000.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn defaults() {
        let specs = ChillerSpecs::default();
        assert_relative_eq!(specs.rated_capacity_tons(), 500.0);
        assert_relative_eq!(
            specs.rated_entering_temp().get::<degree_fahrenheit>(),
            95.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(specs.derating_slope_pct_per_f(), 1.5);
        assert_relative_eq!(
            specs.lockout_temp().get::<degree_fahrenheit>(),
            127.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(specs.design_load_tons(), 2000.0);
    }

    #[test]
    fn rejects_non_positive_values() {
        let rated = ThermodynamicTemperature::new::<degree_fahrenheit>(95.0);
        let lockout = ThermodynamicTemperature::new::<degree_fahrenheit>(127.0);

        assert_eq!(
            ChillerSpecs::new(0.0, rated, 1.5, lockout, 2000.0),
            Err(SpecsError::RatedCapacity(ConstraintError::Zero))
        );
        assert_eq!(
            ChillerSpecs::new(500.0, rated, -1.0, lockout, 2000.0),
            Err(SpecsError::DeratingSlope(ConstraintError::Negative))
        );
        assert_eq!(
            ChillerSpecs::new(500.0, rated, 1.5, lockout, f64::NAN),
            Err(SpecsError::DesignLoad(ConstraintError::NotANumber))
        );
    }
}
