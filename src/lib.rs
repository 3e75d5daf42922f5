//! # Chiller Array Models
//!
//! Surrogate models for air-cooled chiller arrays, built on
//! [Twine](https://github.com/isentropic-dev/twine) model conventions.
//!
//! Intake air temperatures and cooling-capacity derating are predicted by
//! matching wind speed, fan airflow, wind orientation and row spacing against
//! a reference dataset of pre-computed configurations, rather than by running
//! a CFD solve.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! ## Diagnostics
//!
//! Models emit [`tracing`] events (matched dataset rows, dropped records,
//! empty datasets). No subscriber is installed by this crate.

pub mod models;
pub mod support;
