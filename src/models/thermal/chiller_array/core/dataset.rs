//! Reference dataset of pre-computed array configurations.
//!
//! Each record is a flat numeric row:
//!
//! ```text
//! [wind speed (m/s), flow (CFM), orientation (deg), row spacing (ft), T0 .. T19 (K)]
//! ```
//!
//! The twenty temperatures are intake temperatures over the native 4x5
//! layout in row-major order.

use thiserror::Error;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

/// Number of leading parameter fields in a record.
pub const PARAMETER_FIELDS: usize = 4;

/// Rows in the native dataset layout.
pub const BASE_ROWS: usize = 4;

/// Columns in the native dataset layout.
pub const BASE_COLUMNS: usize = 5;

/// Intake temperature slots in each record.
pub const BASE_SLOTS: usize = BASE_ROWS * BASE_COLUMNS;

/// Minimum record length: parameters plus every temperature slot.
pub const RECORD_LEN: usize = PARAMETER_FIELDS + BASE_SLOTS;

/// Errors that can occur when parsing a dataset record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("record has {len} values, expected at least {}", RECORD_LEN)]
    TooShort { len: usize },

    #[error("value {value_index} is not finite")]
    NonFinite { value_index: usize },
}

/// One pre-computed configuration and its intake temperatures.
///
/// Parameter fields keep the dataset's native units.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetRow {
    /// Wind speed in m/s.
    pub wind_speed: f64,

    /// Fan airflow in CFM.
    pub flow_rate: f64,

    /// Wind orientation relative to the array, in degrees within `[0, 90]`.
    pub orientation: f64,

    /// Row spacing in feet.
    pub row_spacing: f64,

    /// Intake temperature per native layout slot.
    pub temperatures: [ThermodynamicTemperature; BASE_SLOTS],
}

impl DatasetRow {
    /// Column names of a record, in order.
    pub const COLUMNS: [&'static str; RECORD_LEN] = [
        "Windspeed",
        "CFM",
        "Orientation",
        "Spacing",
        "Chiller 01",
        "Chiller 02",
        "Chiller 03",
        "Chiller 04",
        "Chiller 05",
        "Chiller 06",
        "Chiller 07",
        "Chiller 08",
        "Chiller 09",
        "Chiller 10",
        "Chiller 11",
        "Chiller 12",
        "Chiller 13",
        "Chiller 14",
        "Chiller 15",
        "Chiller 16",
        "Chiller 17",
        "Chiller 18",
        "Chiller 19",
        "Chiller 20",
    ];

    /// Parses a flat numeric record.
    ///
    /// Values past the last temperature slot are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`DatasetError`] if the record is too short or if any
    /// value used by the row is not finite.
    pub fn from_record(record: &[f64]) -> Result<Self, DatasetError> {
        if record.len() < RECORD_LEN {
            return Err(DatasetError::TooShort { len: record.len() });
        }
        if let Some(value_index) = record[..RECORD_LEN].iter().position(|v| !v.is_finite()) {
            return Err(DatasetError::NonFinite { value_index });
        }

        Ok(Self {
            wind_speed: record[0],
            flow_rate: record[1],
            orientation: record[2],
            row_spacing: record[3],
            temperatures: std::array::from_fn(|slot| {
                ThermodynamicTemperature::new::<kelvin>(record[PARAMETER_FIELDS + slot])
            }),
        })
    }
}

/// An ordered collection of validated dataset rows.
///
/// Row order matters: the matcher breaks distance ties in favor of
/// the earliest row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<DatasetRow>,
}

impl Dataset {
    #[must_use]
    pub fn new(rows: Vec<DatasetRow>) -> Self {
        Self { rows }
    }

    /// Parses every record, failing on the first invalid one.
    ///
    /// # Errors
    ///
    /// Returns the index of the first invalid record and why it was rejected.
    pub fn from_records<'a, I>(records: I) -> Result<Self, (usize, DatasetError)>
    where
        I: IntoIterator<Item = &'a [f64]>,
    {
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| DatasetRow::from_record(record).map_err(|err| (i, err)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rows })
    }

    /// Parses every record, dropping invalid ones.
    ///
    /// Each dropped record is reported as a `tracing` warning.
    #[must_use]
    pub fn from_records_lossy<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a [f64]>,
    {
        let rows = records
            .into_iter()
            .enumerate()
            .filter_map(|(i, record)| match DatasetRow::from_record(record) {
                Ok(row) => Some(row),
                Err(err) => {
                    tracing::warn!(record = i, error = %err, "dropping invalid dataset record");
                    None
                }
            })
            .collect();
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<DatasetRow>> for Dataset {
    fn from(rows: Vec<DatasetRow>) -> Self {
        Self::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::thermal::chiller_array::core::test_support::uniform_record;

    #[test]
    fn parses_record_fields() {
        let mut record = uniform_record(4.0, 140_000.0, 45.0, 12.0, 313.15);
        record[PARAMETER_FIELDS + 19] = 320.0;
        record.push(999.0);

        let row = DatasetRow::from_record(&record).unwrap();
        assert_relative_eq!(row.wind_speed, 4.0);
        assert_relative_eq!(row.flow_rate, 140_000.0);
        assert_relative_eq!(row.orientation, 45.0);
        assert_relative_eq!(row.row_spacing, 12.0);
        assert_relative_eq!(row.temperatures[0].get::<kelvin>(), 313.15, epsilon = 1e-9);
        assert_relative_eq!(row.temperatures[19].get::<kelvin>(), 320.0, epsilon = 1e-9);
    }

    #[test]
    fn rejects_short_and_non_finite_records() {
        let record = uniform_record(4.0, 140_000.0, 45.0, 12.0, 313.15);
        assert_eq!(
            DatasetRow::from_record(&record[..23]),
            Err(DatasetError::TooShort { len: 23 })
        );

        let mut record = record;
        record[10] = f64::NAN;
        assert_eq!(
            DatasetRow::from_record(&record),
            Err(DatasetError::NonFinite { value_index: 10 })
        );
    }

    #[test]
    fn strict_and_lossy_loading() {
        let good = uniform_record(4.0, 140_000.0, 45.0, 12.0, 313.15);
        let bad = vec![1.0, 2.0, 3.0];
        let records = [good.as_slice(), bad.as_slice(), good.as_slice()];

        assert_eq!(
            Dataset::from_records(records),
            Err((1, DatasetError::TooShort { len: 3 }))
        );

        let dataset = Dataset::from_records_lossy(records);
        assert_eq!(dataset.len(), 2);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn column_names_match_record_layout() {
        assert_eq!(DatasetRow::COLUMNS.len(), RECORD_LEN);
        assert_eq!(DatasetRow::COLUMNS[PARAMETER_FIELDS], "Chiller 01");
    }
}
