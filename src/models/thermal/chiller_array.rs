//! Air-cooled chiller array model.
//!
//! Predicts intake temperatures and capacity derating for an array of
//! air-cooled chillers by matching the operating point against a reference
//! dataset of pre-computed CFD runs. No interpolation is performed: the
//! closest configuration in normalized parameter space is used as-is.
//!
//! [`ChillerArray`] is the [`twine_core::Model`] adapter. The free functions
//! [`compute_simulation`] and [`simulate`] expose the same computation without
//! owning a dataset.
//!
//! # Example
//!
//! ```
//! use chiller_array_models::models::thermal::chiller_array::{
//!     ArrayGeometry, ChillerArray, ChillerSpecs, Dataset, OperatingConditions,
//!     RiskLevel, SimulationInputs,
//! };
//! use chiller_array_models::support::units::kcfm;
//! use twine_core::Model;
//! use uom::si::{
//!     angle::degree,
//!     f64::{Angle, Length, ThermodynamicTemperature, Velocity},
//!     length::foot,
//!     thermodynamic_temperature::degree_fahrenheit,
//!     velocity::meter_per_second,
//! };
//!
//! let mut record = vec![4.0, 140_000.0, 45.0, 12.0];
//! record.extend([313.15; 20]);
//! let dataset = Dataset::from_records([record.as_slice()]).unwrap();
//!
//! let inputs = SimulationInputs::fully_populated(
//!     ArrayGeometry {
//!         rows: 4,
//!         columns: 5,
//!         row_spacing: Length::new::<foot>(12.0),
//!         col_spacing: Length::new::<foot>(4.0),
//!     },
//!     OperatingConditions {
//!         wind_speed: Velocity::new::<meter_per_second>(4.0),
//!         wind_direction: Angle::new::<degree>(45.0),
//!         flow_rate: kcfm(140.0),
//!         ambient: ThermodynamicTemperature::new::<degree_fahrenheit>(104.0),
//!     },
//! )
//! .unwrap();
//!
//! let model = ChillerArray::new(dataset, ChillerSpecs::default());
//! let result = model.call(&inputs).unwrap();
//!
//! assert_eq!(result.matched_row, Some(0));
//! assert_eq!(result.risk_level, RiskLevel::Low);
//! ```

mod core;

use std::convert::Infallible;

use twine_core::Model;

pub use self::core::{
    ArrayGeometry, BASE_COLUMNS, BASE_ROWS, BASE_SLOTS, CapacityAnalysis, ChillerNode,
    ChillerSpecs, Dataset, DatasetError, DatasetRow, DisplayModifiers, InputError, InputRanges,
    LiteratureBenchmark, Match, MatchScales, OperatingConditions, PARAMETER_FIELDS,
    ParameterRange, RECORD_LEN, RedundancyLabel, RiskLevel, SimulationInputs, SimulationResult,
    SpecsError, SurrogateConfig, UnitStatus, clamp, compute_simulation, ranges, simulate,
};

/// A chiller array surrogate bound to a reference dataset and equipment specs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChillerArray {
    dataset: Dataset,
    specs: ChillerSpecs,
    config: SurrogateConfig,
}

impl ChillerArray {
    /// Creates a model with the default surrogate configuration.
    #[must_use]
    pub fn new(dataset: Dataset, specs: ChillerSpecs) -> Self {
        Self {
            dataset,
            specs,
            config: SurrogateConfig::default(),
        }
    }

    /// Returns this model with a custom surrogate configuration.
    #[must_use]
    pub fn with_config(mut self, config: SurrogateConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn specs(&self) -> &ChillerSpecs {
        &self.specs
    }
}

impl Model for ChillerArray {
    type Input = SimulationInputs;
    type Output = SimulationResult;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(simulate(
            input,
            self.dataset.rows(),
            &self.specs,
            &self.config,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        angle::degree,
        f64::{Angle, Length, TemperatureInterval, ThermodynamicTemperature, Velocity},
        length::foot,
        temperature_interval::degree_fahrenheit as delta_fahrenheit,
        thermodynamic_temperature::degree_fahrenheit,
        velocity::meter_per_second,
    };

    use crate::support::units::kcfm;

    fn dataset() -> Dataset {
        let mut record = vec![4.0, 140_000.0, 45.0, 12.0];
        record.extend((0..20).map(|i| 315.0 + f64::from(i)));
        Dataset::from_records([record.as_slice()]).unwrap()
    }

    fn inputs() -> SimulationInputs {
        SimulationInputs::fully_populated(
            ArrayGeometry {
                rows: 4,
                columns: 5,
                row_spacing: Length::new::<foot>(12.0),
                col_spacing: Length::new::<foot>(4.0),
            },
            OperatingConditions {
                wind_speed: Velocity::new::<meter_per_second>(4.0),
                wind_direction: Angle::new::<degree>(45.0),
                flow_rate: kcfm(140.0),
                ambient: ThermodynamicTemperature::new::<degree_fahrenheit>(100.0),
            },
        )
        .unwrap()
    }

    #[test]
    fn model_matches_free_function() {
        let model = ChillerArray::new(dataset(), ChillerSpecs::default());
        let from_model = model.call(&inputs()).unwrap();
        let direct = compute_simulation(&inputs(), model.dataset().rows(), Some(model.specs()));
        assert_eq!(from_model, direct);
    }

    #[test]
    fn config_changes_max_band() {
        let wide = SurrogateConfig {
            max_band: TemperatureInterval::new::<delta_fahrenheit>(100.0),
            ..SurrogateConfig::default()
        };
        let model = ChillerArray::new(dataset(), ChillerSpecs::default()).with_config(wide);
        let result = model.call(&inputs()).unwrap();
        assert!(result.grid.iter().all(|n| n.is_max));
    }

    #[test]
    fn empty_model_reports_no_match() {
        let model = ChillerArray::default();
        let result = model.call(&inputs()).unwrap();
        assert_eq!(result.matched_row, None);
        assert!(result.grid.is_empty());
    }
}
