//! Pay calculation engine for tutoring teachers.
//!
//! This crate turns a teacher's seniority level, position and monthly class
//! counts into a gross/net salary breakdown, including the task-hour quota
//! that is funded cheapest-first from variable class income.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
