//! Labor Cost Engine for the statutory working hours reform
//!
//! This crate projects monthly labor costs while the statutory base monthly
//! hours step down (230, then 220, then 210). It resolves the hourly rate for
//! each month, prices hours across the six surcharge categories, and
//! aggregates per-employee and fleet-wide costs.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod simulation;
