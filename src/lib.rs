//! Out-of-hours on-call payment engine.
//!
//! This crate turns on-call coverage intervals into per-calendar-day
//! classifications (Mon-Thu weekday, Fri-Sun weekend), aggregates them per
//! person and derives an auditable compensation total for each person on a rota.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
