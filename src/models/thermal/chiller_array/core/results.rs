//! Result types for a chiller array simulation.

use std::fmt;

use uom::si::f64::{Length, TemperatureInterval, ThermodynamicTemperature};

/// Operating state of a single unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnitStatus {
    /// Derating of 10% or less.
    #[default]
    Healthy,
    /// Derating above 10%.
    Degraded,
    /// Within 5 °F of lockout.
    AtRisk,
    /// At or above lockout; the unit delivers no capacity.
    LockedOut,
}

/// Redundancy verdict for the whole array.
///
/// Variants are ordered by severity, so `Intact < Eroded < Lost < Critical`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RedundancyLabel {
    /// At least one full unit of spare capacity.
    #[default]
    Intact,
    /// Less than one unit of spare capacity, or a unit is near lockout.
    Eroded,
    /// Effective capacity is below the design load.
    Lost,
    /// A unit is locked out, or the design load cannot be met.
    Critical,
}

impl RedundancyLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Intact => "INTACT",
            Self::Eroded => "ERODED",
            Self::Lost => "LOST",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for RedundancyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Four-level risk summary derived from [`RedundancyLabel`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    #[default]
    Low,
    Moderate,
    High,
    Critical,
}

/// Predicted state of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChillerNode {
    pub row: usize,
    pub col: usize,

    /// Intake temperature rise over ambient.
    ///
    /// May be negative; inactive cells report zero.
    pub temp_rise: TemperatureInterval,

    /// Intake temperature. Inactive cells report ambient.
    pub total_temp: ThermodynamicTemperature,

    /// Whether a unit is installed in this cell.
    pub is_active: bool,

    /// Whether this unit is among the hottest in the array.
    pub is_max: bool,

    /// Delivered capacity in tons.
    pub effective_capacity_tons: f64,

    /// Percent of rated capacity lost.
    pub derating_pct: f64,

    pub status: UnitStatus,
}

/// Array-wide capacity and redundancy.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CapacityAnalysis {
    pub total_rated_capacity_tons: f64,
    pub total_effective_capacity_tons: f64,

    /// Percent of rated capacity lost across the active units.
    pub capacity_loss_pct: f64,

    /// Spare capacity above design load, in units of one rated chiller.
    pub redundancy_status: f64,

    pub redundancy_label: RedundancyLabel,

    /// Units in the [`UnitStatus::AtRisk`] state.
    pub chillers_at_risk: usize,

    /// Units in the [`UnitStatus::LockedOut`] state.
    pub chillers_locked_out: usize,
}

/// Closed-form estimate of array temperature rise from compound length.
///
/// Reported for comparison only; it never feeds into the surrogate prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiteratureBenchmark {
    /// Array length seen along the wind direction.
    pub effective_length: Length,

    pub predicted_max_rise: TemperatureInterval,
    pub predicted_avg_rise: TemperatureInterval,
}

/// Output of one chiller array simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// One node per grid cell, row-major.
    pub grid: Vec<ChillerNode>,

    /// Largest rise over the active units, floored at zero.
    pub max_temp_rise: TemperatureInterval,

    /// Hottest intake temperature over the active units, or ambient if none.
    pub max_total_temp: ThermodynamicTemperature,

    /// Mean rise over the active units, with each rise floored at zero.
    pub avg_temp_rise: TemperatureInterval,

    pub risk_level: RiskLevel,
    pub benchmark: LiteratureBenchmark,
    pub capacity: CapacityAnalysis,

    /// Index of the matched dataset row, or `None` if the dataset was empty.
    ///
    /// When `None`, `grid` is empty and every aggregate holds its zero value.
    pub matched_row: Option<usize>,
}
