//! Per-unit derating and array-wide redundancy classification.

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_fahrenheit};

use super::{CapacityAnalysis, ChillerNode, ChillerSpecs, RedundancyLabel, RiskLevel, UnitStatus};

/// Units this close to lockout are at risk.
const AT_RISK_MARGIN_F: f64 = 5.0;

/// Derating above this percentage marks a unit as degraded.
const DEGRADED_THRESHOLD_PCT: f64 = 10.0;

/// Slack for unit round-off when comparing against the °F thresholds.
const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// Capacity delivered by one installed unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct UnitCapacity {
    pub(super) effective_capacity_tons: f64,
    pub(super) derating_pct: f64,
    pub(super) status: UnitStatus,
}

/// Classifies an installed unit by its intake temperature.
pub(super) fn classify_unit(intake: ThermodynamicTemperature, specs: &ChillerSpecs) -> UnitCapacity {
    let intake_f = intake.get::<degree_fahrenheit>();
    let lockout_f = specs.lockout_temp().get::<degree_fahrenheit>();
    if intake_f >= lockout_f {
        return UnitCapacity {
            effective_capacity_tons: 0.0,
            derating_pct: 100.0,
            status: UnitStatus::LockedOut,
        };
    }

    // Thresholds are stated in °F, so compare there rather than in kelvin.
    let rated_f = specs.rated_entering_temp().get::<degree_fahrenheit>();
    let excess_f = (intake_f - rated_f).max(0.0);
    let derating_pct = (excess_f * specs.derating_slope_pct_per_f()).min(100.0);
    let effective_capacity_tons = specs.rated_capacity_tons() * (1.0 - derating_pct / 100.0);

    let status = if intake_f >= lockout_f - AT_RISK_MARGIN_F - BOUNDARY_TOLERANCE {
        UnitStatus::AtRisk
    } else if derating_pct > DEGRADED_THRESHOLD_PCT + BOUNDARY_TOLERANCE {
        UnitStatus::Degraded
    } else {
        UnitStatus::Healthy
    };

    UnitCapacity {
        effective_capacity_tons,
        derating_pct,
        status,
    }
}

/// Aggregates capacity over the active nodes of a grid.
pub(super) fn analyze(grid: &[ChillerNode], specs: &ChillerSpecs) -> CapacityAnalysis {
    let rated = specs.rated_capacity_tons();
    let design_load = specs.design_load_tons();

    let mut active = 0_usize;
    let mut total_effective = 0.0;
    let mut chillers_at_risk = 0;
    let mut chillers_locked_out = 0;
    for node in grid.iter().filter(|n| n.is_active) {
        active += 1;
        total_effective += node.effective_capacity_tons;
        match node.status {
            UnitStatus::AtRisk => chillers_at_risk += 1,
            UnitStatus::LockedOut => chillers_locked_out += 1,
            UnitStatus::Healthy | UnitStatus::Degraded => {}
        }
    }

    let total_rated = active as f64 * rated;
    let capacity_loss_pct = if total_rated > 0.0 {
        (total_rated - total_effective) / total_rated * 100.0
    } else {
        0.0
    };

    let spare = total_effective - design_load;
    let redundancy_status = spare / rated;

    let redundancy_label = if chillers_locked_out > 0 || total_effective < design_load {
        RedundancyLabel::Critical
    } else if spare < 0.0 {
        RedundancyLabel::Lost
    } else if chillers_at_risk > 0 || redundancy_status < 1.0 {
        RedundancyLabel::Eroded
    } else {
        RedundancyLabel::Intact
    };

    CapacityAnalysis {
        total_rated_capacity_tons: total_rated,
        total_effective_capacity_tons: total_effective,
        capacity_loss_pct,
        redundancy_status,
        redundancy_label,
        chillers_at_risk,
        chillers_locked_out,
    }
}

impl From<RedundancyLabel> for RiskLevel {
    fn from(label: RedundancyLabel) -> Self {
        match label {
            RedundancyLabel::Intact => RiskLevel::Low,
            RedundancyLabel::Eroded => RiskLevel::Moderate,
            RedundancyLabel::Lost => RiskLevel::High,
            RedundancyLabel::Critical => RiskLevel::Critical,
        }
    }
}
