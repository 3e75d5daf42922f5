//! Literature benchmark for array temperature rise.
//!
//! Watson & Charentenay relate the length of a chiller compound measured
//! along the wind to its average and peak intake temperature rise with a
//! linear regression in normalized length. The regression is clamped at
//! one normalized length below its reference point.

use uom::si::{
    angle::radian,
    f64::{Angle, Length, TemperatureInterval},
    length::{foot, meter},
    temperature_interval::degree_celsius as delta_celsius,
};

use super::{ArrayGeometry, LiteratureBenchmark};

/// Footprint length of one unit along a row, in feet.
const UNIT_LENGTH_FT: f64 = 16.0;

/// Footprint width of one unit across a row, in feet.
const UNIT_WIDTH_FT: f64 = 7.5;

/// Reference compound length of the regression, in meters.
const REFERENCE_LENGTH_M: f64 = 38.9;

/// Length scale of the regression, in meters.
const LENGTH_SCALE_M: f64 = 26.8;

/// Computes the benchmark rise for an array facing the given wind direction.
///
/// The direction is used over the full circle without folding.
pub(super) fn benchmark(geometry: &ArrayGeometry, wind_direction: Angle) -> LiteratureBenchmark {
    let rows = geometry.rows as f64;
    let columns = geometry.columns as f64;

    let length_ft = rows * UNIT_LENGTH_FT + (rows - 1.0) * geometry.row_spacing.get::<foot>();
    let width_ft = columns * UNIT_WIDTH_FT + (columns - 1.0) * geometry.col_spacing.get::<foot>();

    let theta = wind_direction.get::<radian>();
    let effective_length =
        Length::new::<foot>((length_ft * theta.cos()).abs() + (width_ft * theta.sin()).abs());

    let x = ((effective_length.get::<meter>() - REFERENCE_LENGTH_M) / LENGTH_SCALE_M).max(-1.0);
    let avg_rise_c = (8.7 * x + 9.0).max(0.0);
    let max_rise_c = (18.7 * x + 19.5).max(0.0);

    LiteratureBenchmark {
        effective_length,
        predicted_max_rise: TemperatureInterval::new::<delta_celsius>(max_rise_c),
        predicted_avg_rise: TemperatureInterval::new::<delta_celsius>(avg_rise_c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        angle::degree, temperature_interval::degree_fahrenheit as delta_fahrenheit,
    };

    use crate::models::thermal::chiller_array::core::test_support::geometry;

    fn at(direction_deg: f64, g: &ArrayGeometry) -> LiteratureBenchmark {
        benchmark(g, Angle::new::<degree>(direction_deg))
    }

    #[test]
    fn wind_along_rows() {
        // 4 rows: 4 * 16 ft + 3 * 12 ft = 100 ft.
        let b = at(0.0, &geometry(4, 5));
        assert_relative_eq!(b.effective_length.get::<meter>(), 30.48, epsilon = 1e-9);
        assert_relative_eq!(
            b.predicted_avg_rise.get::<delta_fahrenheit>(),
            11.279_955_223_880_597,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            b.predicted_max_rise.get::<delta_fahrenheit>(),
            24.524_731_343_283_584,
            epsilon = 1e-9
        );
    }

    #[test]
    fn wind_across_rows() {
        // 5 columns: 5 * 7.5 ft + 4 * 4 ft = 53.5 ft.
        let b = at(90.0, &geometry(4, 5));
        assert_relative_eq!(b.effective_length.get::<meter>(), 16.3068, epsilon = 1e-9);
        assert_relative_eq!(
            b.predicted_avg_rise.get::<delta_fahrenheit>(),
            2.998_152_537_313_436_6,
            epsilon = 1e-9
        );
    }

    #[test]
    fn diagonal_wind_sees_both_dimensions() {
        let b = at(45.0, &geometry(4, 5));
        assert_relative_eq!(
            b.effective_length.get::<meter>(),
            33.083_263_550_018_76,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            b.predicted_max_rise.get::<delta_fahrenheit>(),
            27.794_352_652_747_45,
            epsilon = 1e-9
        );
    }

    #[test]
    fn opposite_winds_agree() {
        let g = geometry(4, 5);
        let a = at(30.0, &g);
        let b = at(210.0, &g);
        assert_relative_eq!(
            a.effective_length.get::<meter>(),
            b.effective_length.get::<meter>(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn short_arrays_hit_the_regression_floor() {
        let b = at(0.0, &geometry(1, 1));
        assert_relative_eq!(b.effective_length.get::<meter>(), 4.8768, epsilon = 1e-9);
        assert_relative_eq!(
            b.predicted_avg_rise.get::<delta_fahrenheit>(),
            0.54,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            b.predicted_max_rise.get::<delta_fahrenheit>(),
            1.44,
            epsilon = 1e-9
        );
    }
}
