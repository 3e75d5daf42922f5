//! Array geometry, operating conditions and unit layout.

use thiserror::Error;
use uom::si::f64::{Angle, Length, ThermodynamicTemperature, Velocity, VolumeRate};

use crate::support::constraint::{ConstraintError, NonNegative, StrictlyPositive};

/// Physical arrangement of the chiller array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrayGeometry {
    /// Number of unit rows.
    pub rows: usize,

    /// Number of units per row.
    pub columns: usize,

    /// Clear spacing between adjacent rows.
    pub row_spacing: Length,

    /// Clear spacing between adjacent columns.
    pub col_spacing: Length,
}

impl ArrayGeometry {
    /// Number of grid cells, `rows * columns`.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }
}

/// Wind, fan airflow and ambient conditions around the array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingConditions {
    pub wind_speed: Velocity,

    /// Direction the wind blows from, measured over the full circle.
    pub wind_direction: Angle,

    /// Condenser fan airflow per unit.
    pub flow_rate: VolumeRate,

    /// Ambient dry-bulb temperature.
    pub ambient: ThermodynamicTemperature,
}

/// Display-only modifiers.
///
/// These are carried through to callers untouched and never
/// influence temperatures or capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayModifiers {
    /// Exhaust-flow technology (vertical discharge) fitted.
    pub eft_base: bool,

    /// Fan discharge extensions fitted.
    pub fan_extension: bool,
}

/// Errors that can occur when assembling [`SimulationInputs`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("array must have at least one row and one column (got {rows}x{columns})")]
    EmptyGrid { rows: usize, columns: usize },

    #[error("row spacing is invalid")]
    RowSpacing(#[source] ConstraintError),

    #[error("column spacing is invalid")]
    ColSpacing(#[source] ConstraintError),

    #[error("wind speed is invalid")]
    WindSpeed(#[source] ConstraintError),

    #[error("flow rate is invalid")]
    FlowRate(#[source] ConstraintError),

    #[error("layout has {actual} cells but the grid has {expected}")]
    LayoutMismatch { expected: usize, actual: usize },
}

/// Complete, validated input to a chiller array simulation.
///
/// The layout holds one flag per grid cell in row-major order;
/// `true` means a unit is installed in that cell.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationInputs {
    geometry: ArrayGeometry,
    conditions: OperatingConditions,
    layout: Vec<bool>,
    modifiers: DisplayModifiers,
}

impl SimulationInputs {
    /// Creates simulation inputs from a geometry, conditions and explicit layout.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the grid is empty, a spacing is not
    /// strictly positive, the wind speed or flow rate is negative, or the
    /// layout length differs from `rows * columns`.
    pub fn new(
        geometry: ArrayGeometry,
        conditions: OperatingConditions,
        layout: Vec<bool>,
    ) -> Result<Self, InputError> {
        if geometry.rows == 0 || geometry.columns == 0 {
            return Err(InputError::EmptyGrid {
                rows: geometry.rows,
                columns: geometry.columns,
            });
        }
        StrictlyPositive::new(geometry.row_spacing).map_err(InputError::RowSpacing)?;
        StrictlyPositive::new(geometry.col_spacing).map_err(InputError::ColSpacing)?;
        NonNegative::new(conditions.wind_speed).map_err(InputError::WindSpeed)?;
        NonNegative::new(conditions.flow_rate).map_err(InputError::FlowRate)?;

        let expected = geometry.cell_count();
        if layout.len() != expected {
            return Err(InputError::LayoutMismatch {
                expected,
                actual: layout.len(),
            });
        }

        Ok(Self {
            geometry,
            conditions,
            layout,
            modifiers: DisplayModifiers::default(),
        })
    }

    /// Creates simulation inputs with a unit installed in every cell.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] under the same conditions as [`SimulationInputs::new`].
    pub fn fully_populated(
        geometry: ArrayGeometry,
        conditions: OperatingConditions,
    ) -> Result<Self, InputError> {
        let layout = vec![true; geometry.cell_count()];
        Self::new(geometry, conditions, layout)
    }

    /// Returns these inputs with the given display modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: DisplayModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Returns these inputs with new operating conditions, keeping geometry and layout.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the wind speed or flow rate is negative.
    pub fn with_conditions(mut self, conditions: OperatingConditions) -> Result<Self, InputError> {
        NonNegative::new(conditions.wind_speed).map_err(InputError::WindSpeed)?;
        NonNegative::new(conditions.flow_rate).map_err(InputError::FlowRate)?;
        self.conditions = conditions;
        Ok(self)
    }

    #[must_use]
    pub fn geometry(&self) -> &ArrayGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn conditions(&self) -> &OperatingConditions {
        &self.conditions
    }

    #[must_use]
    pub fn layout(&self) -> &[bool] {
        &self.layout
    }

    #[must_use]
    pub fn modifiers(&self) -> DisplayModifiers {
        self.modifiers
    }

    /// Returns whether a unit is installed at the given cell index.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.layout.get(index).copied().unwrap_or(false)
    }
}
