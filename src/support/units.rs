//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units crossing the public API
//! (wind speed, airflow, spacing, temperature).
//! This module provides extensions that chiller array modeling needs but
//! [`uom`] doesn't provide.
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval,
//! such as an intake temperature rise over ambient:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::temperature_interval::degree_fahrenheit as delta_fahrenheit;
//! use uom::si::thermodynamic_temperature::degree_fahrenheit;
//! use chiller_array_models::support::units::TemperatureDifference;
//!
//! let intake = ThermodynamicTemperature::new::<degree_fahrenheit>(112.0);
//! let ambient = ThermodynamicTemperature::new::<degree_fahrenheit>(104.0);
//! let rise = intake.minus(ambient);
//! assert!((rise.get::<delta_fahrenheit>() - 8.0).abs() < 1e-9);
//! ```
//!
//! ## Airflow in thousands of CFM
//!
//! Chiller fan airflow is quoted in kCFM. [`kcfm`] and [`to_kcfm`] convert
//! between that convention and [`VolumeRate`](uom::si::f64::VolumeRate).

mod flow;
mod temperature_difference;

pub use flow::{kcfm, to_kcfm};
pub use temperature_difference::TemperatureDifference;
