//! Core data models for the pay calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod classification;
mod salary_state;

pub use calculation_result::{BreakdownEntry, CalculationResult, PayCategory};
pub use classification::{PositionType, StudentGrade, TeacherLevel};
pub use salary_state::{
    GroupClass, GroupClassUpdate, PersonalClassCounts, SalaryState, TrialSuccessRecord,
    TrialSuccessUpdate,
};
