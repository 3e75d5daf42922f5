//! Valid envelope of the controllable inputs.
//!
//! Bounds are fixed to the parameter envelope the reference dataset was
//! generated over, so they are available before any dataset is loaded.

use uom::si::{
    angle::degree,
    f64::{Angle, Length, Velocity, VolumeRate},
    length::foot,
    velocity::meter_per_second,
    volume_rate::cubic_foot_per_minute,
};

use super::{ArrayGeometry, OperatingConditions};

/// Clamps `value` into `[min, max]`.
///
/// Equivalent to `min(max(value, min), max)`.
/// A value that is already in range is returned unchanged.
#[must_use]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let floored = if value < min { min } else { value };
    if floored > max { max } else { floored }
}

/// Closed interval of valid values for one input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange<Q> {
    pub min: Q,
    pub max: Q,
}

impl<Q: PartialOrd + Copy> ParameterRange<Q> {
    /// Clamps a value into this range.
    #[must_use]
    pub fn clamp(&self, value: Q) -> Q {
        clamp(value, self.min, self.max)
    }

    #[must_use]
    pub fn contains(&self, value: Q) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Valid ranges for the four inputs that drive the nearest-neighbor match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRanges {
    pub wind_speed: ParameterRange<Velocity>,
    pub flow_rate: ParameterRange<VolumeRate>,

    /// Orientation relative to the array after folding into `[0, 90]` degrees.
    pub orientation: ParameterRange<Angle>,

    pub row_spacing: ParameterRange<Length>,
}

impl InputRanges {
    /// Clamps wind speed and flow rate into range.
    ///
    /// Wind direction is left alone; it spans the full circle and is folded
    /// onto the orientation axis during matching.
    #[must_use]
    pub fn clamp_conditions(&self, conditions: OperatingConditions) -> OperatingConditions {
        OperatingConditions {
            wind_speed: self.wind_speed.clamp(conditions.wind_speed),
            flow_rate: self.flow_rate.clamp(conditions.flow_rate),
            ..conditions
        }
    }

    /// Clamps row spacing into range.
    #[must_use]
    pub fn clamp_geometry(&self, geometry: ArrayGeometry) -> ArrayGeometry {
        ArrayGeometry {
            row_spacing: self.row_spacing.clamp(geometry.row_spacing),
            ..geometry
        }
    }
}

/// Returns the fixed input envelope.
///
/// Flow is held in [`VolumeRate`]; use [`to_kcfm`](crate::support::units::to_kcfm)
/// to report it in thousands of CFM.
#[must_use]
pub fn ranges() -> InputRanges {
    InputRanges {
        wind_speed: ParameterRange {
            min: Velocity::new::<meter_per_second>(0.0),
            max: Velocity::new::<meter_per_second>(10.0),
        },
        flow_rate: ParameterRange {
            min: VolumeRate::new::<cubic_foot_per_minute>(30_000.0),
            max: VolumeRate::new::<cubic_foot_per_minute>(150_000.0),
        },
        orientation: ParameterRange {
            min: Angle::new::<degree>(0.0),
            max: Angle::new::<degree>(90.0),
        },
        row_spacing: ParameterRange {
            min: Length::new::<foot>(10.0),
            max: Length::new::<foot>(20.0),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{
        models::thermal::chiller_array::core::test_support::{conditions, geometry},
        support::units::to_kcfm,
    };

    #[test]
    fn clamp_bounds_values() {
        assert_relative_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_relative_eq!(clamp(12.5, 0.0, 10.0), 10.0);
        assert_relative_eq!(clamp(4.2, 0.0, 10.0), 4.2);
        assert_eq!(clamp(7, 7, 7), 7);

        for v in [-100.0, -0.5, 0.0, 3.3, 10.0, 55.0] {
            let c = clamp(v, -1.0, 5.0);
            assert!((-1.0..=5.0).contains(&c));
        }
    }

    #[test]
    fn envelope() {
        let r = ranges();
        assert_relative_eq!(r.wind_speed.max.get::<meter_per_second>(), 10.0);
        assert_relative_eq!(to_kcfm(r.flow_rate.min), 30.0, epsilon = 1e-9);
        assert_relative_eq!(to_kcfm(r.flow_rate.max), 150.0, epsilon = 1e-9);
        assert_relative_eq!(r.orientation.max.get::<degree>(), 90.0, epsilon = 1e-9);
        assert_relative_eq!(r.row_spacing.min.get::<foot>(), 10.0, epsilon = 1e-9);
        assert!(r.row_spacing.contains(Length::new::<foot>(12.0)));
        assert!(!r.row_spacing.contains(Length::new::<foot>(25.0)));
    }

    #[test]
    fn clamps_conditions_into_envelope() {
        let mut gusty = conditions();
        gusty.wind_speed = Velocity::new::<meter_per_second>(14.0);
        gusty.flow_rate = VolumeRate::new::<cubic_foot_per_minute>(10_000.0);

        let clamped = ranges().clamp_conditions(gusty);
        assert_relative_eq!(
            clamped.wind_speed.get::<meter_per_second>(),
            10.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(to_kcfm(clamped.flow_rate), 30.0, epsilon = 1e-9);
        assert_eq!(clamped.wind_direction, gusty.wind_direction);
        assert_eq!(clamped.ambient, gusty.ambient);
    }

    #[test]
    fn clamps_row_spacing_only() {
        let mut wide = geometry(4, 5);
        wide.row_spacing = Length::new::<foot>(32.0);

        let clamped = ranges().clamp_geometry(wide);
        assert_relative_eq!(clamped.row_spacing.get::<foot>(), 20.0, epsilon = 1e-9);
        assert_eq!(clamped.col_spacing, wide.col_spacing);
        assert_eq!(clamped.rows, 4);
    }
}
