use uom::si::{
    angle::degree,
    f64::{Angle, Length, ThermodynamicTemperature, Velocity},
    length::foot,
    thermodynamic_temperature::degree_fahrenheit,
    velocity::meter_per_second,
};

use crate::support::units::kcfm;

use super::{
    ArrayGeometry, BASE_SLOTS, DatasetRow, OperatingConditions, PARAMETER_FIELDS, SimulationInputs,
};

/// A grid with 12 ft row spacing and 4 ft column spacing.
pub(super) fn geometry(rows: usize, columns: usize) -> ArrayGeometry {
    ArrayGeometry {
        rows,
        columns,
        row_spacing: Length::new::<foot>(12.0),
        col_spacing: Length::new::<foot>(4.0),
    }
}

/// 4 m/s wind from 45°, 140 kCFM fans, 104 °F ambient.
pub(super) fn conditions() -> OperatingConditions {
    OperatingConditions {
        wind_speed: Velocity::new::<meter_per_second>(4.0),
        wind_direction: Angle::new::<degree>(45.0),
        flow_rate: kcfm(140.0),
        ambient: ThermodynamicTemperature::new::<degree_fahrenheit>(104.0),
    }
}

/// Fully populated 4x5 inputs under [`conditions`].
pub(super) fn native_inputs() -> SimulationInputs {
    SimulationInputs::fully_populated(geometry(4, 5), conditions())
        .expect("fixture inputs are valid")
}

/// A raw record with every slot at the same temperature.
pub(super) fn uniform_record(
    wind_speed: f64,
    flow_rate: f64,
    orientation: f64,
    row_spacing: f64,
    temp_k: f64,
) -> Vec<f64> {
    let mut record = vec![wind_speed, flow_rate, orientation, row_spacing];
    record.extend(std::iter::repeat_n(temp_k, BASE_SLOTS));
    record
}

pub(super) fn uniform_row(
    wind_speed: f64,
    flow_rate: f64,
    orientation: f64,
    row_spacing: f64,
    temp_k: f64,
) -> DatasetRow {
    let record = uniform_record(wind_speed, flow_rate, orientation, row_spacing, temp_k);
    DatasetRow::from_record(&record).expect("fixture record is valid")
}

/// A row whose slot `i` holds `310 + i` K, so every slot is distinguishable.
pub(super) fn graded_row(
    wind_speed: f64,
    flow_rate: f64,
    orientation: f64,
    row_spacing: f64,
) -> DatasetRow {
    let mut record = uniform_record(wind_speed, flow_rate, orientation, row_spacing, 0.0);
    for (i, t) in record[PARAMETER_FIELDS..].iter_mut().enumerate() {
        *t = 310.0 + i as f64;
    }
    DatasetRow::from_record(&record).expect("fixture record is valid")
}
