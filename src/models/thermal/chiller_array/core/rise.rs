//! Intake temperature and rise over ambient for each grid cell.

use uom::{
    ConstZero,
    si::f64::{TemperatureInterval, ThermodynamicTemperature},
};

use crate::support::units::TemperatureDifference;

/// Intake temperature of one cell and its rise over ambient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct CellTemperature {
    pub(super) total: ThermodynamicTemperature,
    pub(super) rise: TemperatureInterval,
}

impl CellTemperature {
    /// Temperature of an installed unit drawing air at `source`.
    pub(super) fn active(
        source: ThermodynamicTemperature,
        ambient: ThermodynamicTemperature,
    ) -> Self {
        Self {
            total: source,
            rise: source.minus(ambient),
        }
    }

    /// An empty cell sits at ambient.
    pub(super) fn inactive(ambient: ThermodynamicTemperature) -> Self {
        Self {
            total: ambient,
            rise: TemperatureInterval::ZERO,
        }
    }

    /// Rise used for array statistics.
    ///
    /// Negative rises come from dataset noise and are floored at zero.
    /// The absolute temperature is never floored.
    pub(super) fn stats_rise(&self) -> TemperatureInterval {
        if self.rise < TemperatureInterval::ZERO {
            TemperatureInterval::ZERO
        } else {
            self.rise
        }
    }
}

/// Rise statistics over the installed units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct RiseStats {
    pub(super) max_rise: TemperatureInterval,
    pub(super) avg_rise: TemperatureInterval,

    /// Hottest intake temperature, or `None` if no unit is installed.
    pub(super) max_total: Option<ThermodynamicTemperature>,
}

impl RiseStats {
    /// Computes statistics over the given active cells.
    ///
    /// All zero when there are no active cells.
    pub(super) fn over<'a>(active: impl IntoIterator<Item = &'a CellTemperature>) -> Self {
        let mut count = 0_usize;
        let mut sum = TemperatureInterval::ZERO;
        let mut max_rise = TemperatureInterval::ZERO;
        let mut max_total: Option<ThermodynamicTemperature> = None;

        for cell in active {
            let rise = cell.stats_rise();
            count += 1;
            sum += rise;
            if rise > max_rise {
                max_rise = rise;
            }
            if max_total.is_none_or(|t| cell.total > t) {
                max_total = Some(cell.total);
            }
        }

        let avg_rise = if count > 0 {
            sum / count as f64
        } else {
            TemperatureInterval::ZERO
        };

        Self {
            max_rise,
            avg_rise,
            max_total,
        }
    }
}
