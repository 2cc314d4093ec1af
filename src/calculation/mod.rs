//! Calculation logic for the pay calculation engine.
//!
//! This module contains rate resolution, gross income per class category,
//! the task-hour quota deduction, input normalization for class counts, and
//! the top-level [`calculate_pay`] that ties them together.

mod gross_income;
mod normalize;
mod pay_calculator;
mod rate_lookup;
mod task_hours;

pub use gross_income::{
    GroupIncome, PersonalIncome, TrialIncome, calculate_group_income, calculate_personal_income,
    calculate_trial_income,
};
pub use normalize::{parse_count, sanitize_count};
pub use pay_calculator::{calculate_pay, compute};
pub use rate_lookup::{ResolvedRates, resolve_rates};
pub use task_hours::{
    DeductionItem, DeductionSources, TaskHourDeduction, TaskHourQuota, apply_task_hour_deduction,
};
