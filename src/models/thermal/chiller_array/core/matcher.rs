//! Nearest-neighbor search over the reference dataset.

use uom::si::{
    angle::degree, length::foot, velocity::meter_per_second, volume_rate::cubic_foot_per_minute,
};

use super::{ArrayGeometry, DatasetRow, MatchScales, OperatingConditions};

/// Closest dataset row to a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    /// Index of the matched row in the dataset.
    pub index: usize,

    /// Squared distance in normalized parameter space.
    ///
    /// Zero for an exact match.
    pub distance: f64,
}

/// Query point in the dataset's native units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Query {
    wind_speed: f64,
    flow_rate: f64,
    orientation: f64,
    row_spacing: f64,
}

impl Query {
    pub(super) fn new(conditions: &OperatingConditions, geometry: &ArrayGeometry) -> Self {
        Self {
            wind_speed: conditions.wind_speed.get::<meter_per_second>(),
            flow_rate: conditions.flow_rate.get::<cubic_foot_per_minute>(),
            orientation: fold_orientation(conditions.wind_direction.get::<degree>()),
            row_spacing: geometry.row_spacing.get::<foot>(),
        }
    }

    fn distance(&self, row: &DatasetRow, scales: &MatchScales) -> f64 {
        let d_speed = (row.wind_speed - self.wind_speed) / scales.wind_speed;
        let d_flow = (row.flow_rate - self.flow_rate) / scales.flow_rate;
        let d_orient = (row.orientation - self.orientation) / scales.orientation;
        let d_spacing = (row.row_spacing - self.row_spacing) / scales.row_spacing;
        d_speed * d_speed + d_flow * d_flow + d_orient * d_orient + d_spacing * d_spacing
    }
}

/// Folds a wind direction in degrees onto the `[0, 90]` orientation axis.
///
/// The array is symmetric under a half turn and under reflection, so
/// `d`, `180 - d`, `180 + d` and `360 - d` share an orientation.
pub(super) fn fold_orientation(direction_deg: f64) -> f64 {
    let o = direction_deg.rem_euclid(180.0);
    if o > 90.0 { 180.0 - o } else { o }
}

/// Returns the dataset row closest to `query`, or `None` for an empty dataset.
///
/// On exact distance ties the earliest row wins.
pub(super) fn nearest(rows: &[DatasetRow], query: &Query, scales: &MatchScales) -> Option<Match> {
    let mut best: Option<Match> = None;
    for (index, row) in rows.iter().enumerate() {
        let distance = query.distance(row, scales);
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(Match { index, distance });
        }
    }
    best
}
