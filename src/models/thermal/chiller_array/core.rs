//! Nearest-neighbor surrogate for air-cooled chiller arrays.
//!
//! A simulation runs as a single synchronous pass:
//!
//! 1. Find the dataset row closest to the inputs in normalized parameter space.
//! 2. Project that row's intake temperatures onto the target grid.
//! 3. Compute each cell's intake temperature and rise over ambient.
//! 4. Derate each installed unit and classify array redundancy.
//! 5. Compute the literature benchmark from geometry and wind direction.
//!
//! Nothing is retained between calls, and identical arguments always
//! produce identical results.

mod benchmark;
mod capacity;
mod config;
mod dataset;
mod grid;
mod input;
mod matcher;
mod ranges;
mod results;
mod rise;
mod specs;

#[cfg(test)]
mod test_support;

pub use config::{MatchScales, SurrogateConfig};
pub use dataset::{
    BASE_COLUMNS, BASE_ROWS, BASE_SLOTS, Dataset, DatasetError, DatasetRow, PARAMETER_FIELDS,
    RECORD_LEN,
};
pub use input::{ArrayGeometry, DisplayModifiers, InputError, OperatingConditions, SimulationInputs};
pub use matcher::Match;
pub use ranges::{InputRanges, ParameterRange, clamp, ranges};
pub use results::{
    CapacityAnalysis, ChillerNode, LiteratureBenchmark, RedundancyLabel, RiskLevel,
    SimulationResult, UnitStatus,
};
pub use specs::{ChillerSpecs, SpecsError};

use uom::{
    ConstZero,
    si::f64::{Length, TemperatureInterval, ThermodynamicTemperature},
};

use capacity::{UnitCapacity, classify_unit};
use matcher::Query;
use rise::{CellTemperature, RiseStats};

/// Runs a simulation with the default configuration.
///
/// Missing specs are replaced by [`ChillerSpecs::default`].
/// An empty dataset yields a zero-valued result with no matched row.
#[must_use]
pub fn compute_simulation(
    inputs: &SimulationInputs,
    dataset: &[DatasetRow],
    specs: Option<&ChillerSpecs>,
) -> SimulationResult {
    let specs = specs.copied().unwrap_or_default();
    simulate(inputs, dataset, &specs, &SurrogateConfig::default())
}

/// Runs a simulation with an explicit configuration.
#[must_use]
pub fn simulate(
    inputs: &SimulationInputs,
    dataset: &[DatasetRow],
    specs: &ChillerSpecs,
    config: &SurrogateConfig,
) -> SimulationResult {
    let geometry = inputs.geometry();
    let conditions = inputs.conditions();

    let query = Query::new(conditions, geometry);
    let Some(matched) = matcher::nearest(dataset, &query, &config.scales) else {
        tracing::warn!("reference dataset is empty, returning an empty result");
        return empty_result(conditions.ambient);
    };
    tracing::debug!(
        row = matched.index,
        distance = matched.distance,
        "matched reference configuration"
    );

    let cells: Vec<CellTemperature> =
        grid::project(&dataset[matched.index], geometry.rows, geometry.columns)
            .into_iter()
            .enumerate()
            .map(|(i, source)| {
                if inputs.is_active(i) {
                    CellTemperature::active(source, conditions.ambient)
                } else {
                    CellTemperature::inactive(conditions.ambient)
                }
            })
            .collect();

    let stats = RiseStats::over(
        cells
            .iter()
            .enumerate()
            .filter(|(i, _)| inputs.is_active(*i))
            .map(|(_, cell)| cell),
    );

    let grid: Vec<ChillerNode> = cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let is_active = inputs.is_active(i);
            let unit = if is_active {
                classify_unit(cell.total, specs)
            } else {
                UnitCapacity {
                    effective_capacity_tons: 0.0,
                    derating_pct: 0.0,
                    status: UnitStatus::Healthy,
                }
            };
            ChillerNode {
                row: i / geometry.columns,
                col: i % geometry.columns,
                temp_rise: cell.rise,
                total_temp: cell.total,
                is_active,
                is_max: is_active && stats.max_rise - cell.stats_rise() <= config.max_band,
                effective_capacity_tons: unit.effective_capacity_tons,
                derating_pct: unit.derating_pct,
                status: unit.status,
            }
        })
        .collect();

    let capacity = capacity::analyze(&grid, specs);

    SimulationResult {
        grid,
        max_temp_rise: stats.max_rise,
        max_total_temp: stats.max_total.unwrap_or(conditions.ambient),
        avg_temp_rise: stats.avg_rise,
        risk_level: capacity.redundancy_label.into(),
        benchmark: benchmark::benchmark(geometry, conditions.wind_direction),
        capacity,
        matched_row: Some(matched.index),
    }
}

fn empty_result(ambient: ThermodynamicTemperature) -> SimulationResult {
    SimulationResult {
        grid: Vec::new(),
        max_temp_rise: TemperatureInterval::ZERO,
        max_total_temp: ambient,
        avg_temp_rise: TemperatureInterval::ZERO,
        risk_level: RiskLevel::Low,
        benchmark: LiteratureBenchmark {
            effective_length: Length::ZERO,
            predicted_max_rise: TemperatureInterval::ZERO,
            predicted_avg_rise: TemperatureInterval::ZERO,
        },
        capacity: CapacityAnalysis::default(),
        matched_row: None,
    }
}
