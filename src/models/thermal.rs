//! Thermal systems models.
//!
//! This module contains models for heat rejection equipment and the
//! arrays they are installed in.

pub mod chiller_array;
