use uom::si::{
    f64::TemperatureInterval, temperature_interval::degree_fahrenheit as delta_fahrenheit,
};

/// Per-axis divisors used to normalize parameter deltas before matching.
///
/// Each divisor approximates the working range of its axis so that no
/// parameter dominates the distance through its numeric magnitude alone.
/// Values are in the dataset's native units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchScales {
    /// Wind speed scale in m/s.
    pub wind_speed: f64,

    /// Airflow scale in CFM.
    pub flow_rate: f64,

    /// Orientation scale in degrees.
    pub orientation: f64,

    /// Row spacing scale in feet.
    pub row_spacing: f64,
}

impl Default for MatchScales {
    fn default() -> Self {
        Self {
            wind_speed: 10.0,
            flow_rate: 120_000.0,
            orientation: 90.0,
            row_spacing: 20.0,
        }
    }
}

/// Configuration for the chiller array surrogate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurrogateConfig {
    /// Normalization used by the nearest-neighbor search.
    pub scales: MatchScales,

    /// Units whose rise is within this band of the array maximum are all
    /// flagged as hottest.
    pub max_band: TemperatureInterval,
}

impl Default for SurrogateConfig {
    fn default() -> Self {
        Self {
            scales: MatchScales::default(),
            max_band: TemperatureInterval::new::<delta_fahrenheit>(0.2),
        }
    }
}
