//! Calculation result models for the pay calculation engine.
//!
//! This module contains the [`CalculationResult`] type produced by the pay
//! calculator, and the categorical breakdown used when charting a result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A category of income shown in a pay breakdown.
///
/// # Example
///
/// ```
/// use teacher_pay::models::PayCategory;
///
/// let category = PayCategory::TrialSuccess;
/// assert_eq!(serde_json::to_string(&category).unwrap(), "\"trial_success\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayCategory {
    /// Base salary plus post allowance.
    FixedSalary,
    /// Gross one-on-one class income.
    PersonalClass,
    /// Gross group class income, headcount bonus included.
    GroupClass,
    /// Income from trial lessons that converted.
    TrialSuccess,
    /// Registration fees from trial lessons that did not convert.
    TrialFail,
}

/// One slice of a pay breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    /// The income category.
    pub category: PayCategory,
    /// The gross amount in that category.
    pub amount: Decimal,
}

/// The complete result of a monthly pay calculation.
///
/// Every field is derived from a [`SalaryState`](super::SalaryState); a
/// result is recomputed rather than edited. Monetary amounts are exact
/// and unrounded, and `total_salary` is not clamped: it is negative when the
/// task-hour deduction exceeds fixed and variable pay combined. Use
/// [`displayed_total`](CalculationResult::displayed_total) for the clamped
/// figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Base salary for the level and position.
    pub base_salary: Decimal,
    /// Post allowance for the level and position.
    pub post_salary: Decimal,
    /// `base_salary + post_salary`.
    pub fixed_part: Decimal,
    /// `success_income + fail_income`.
    pub trial_bonus: Decimal,
    /// Gross one-on-one class income.
    pub personal_class_income: Decimal,
    /// Gross group class income (`group_base_income + group_headcount_bonus`).
    pub group_class_income: Decimal,
    /// Group class income at the base per-grade rate.
    pub group_base_income: Decimal,
    /// Group class income from extra students; never deducted.
    pub group_headcount_bonus: Decimal,
    /// Gross income from converted trial lessons.
    pub success_income: Decimal,
    /// Gross registration fees from trial lessons that did not convert.
    pub fail_income: Decimal,
    /// One-on-one plus group base income, net of the task-hour deduction.
    pub base_class_fees: Decimal,
    /// Fixed part plus all variable income, minus the task-hour deduction.
    pub total_salary: Decimal,
    /// One-on-one plus group hours.
    pub regular_hours: u64,
    /// Trial lesson hours, converted or not.
    pub trial_hours: u64,
    /// `regular_hours + trial_hours`.
    pub total_hours: u64,
    /// Income absorbed by the task-hour quota.
    pub task_hours_deduction: Decimal,
    /// Hours of the quota that were covered by classes.
    pub hours_filled: u64,
}

impl CalculationResult {
    /// Returns the income categories with a positive amount, in chart order.
    ///
    /// # Example
    ///
    /// ```
    /// use teacher_pay::calculation::compute;
    /// use teacher_pay::models::{PayCategory, SalaryState};
    ///
    /// let result = compute(&SalaryState::new());
    /// let breakdown = result.breakdown();
    /// assert_eq!(breakdown.len(), 1);
    /// assert_eq!(breakdown[0].category, PayCategory::FixedSalary);
    /// ```
    pub fn breakdown(&self) -> Vec<BreakdownEntry> {
        [
            (PayCategory::FixedSalary, self.fixed_part),
            (PayCategory::PersonalClass, self.personal_class_income),
            (PayCategory::GroupClass, self.group_class_income),
            (PayCategory::TrialSuccess, self.success_income),
            (PayCategory::TrialFail, self.fail_income),
        ]
        .into_iter()
        .filter(|(_, amount)| *amount > Decimal::ZERO)
        .map(|(category, amount)| BreakdownEntry { category, amount })
        .collect()
    }

    /// The total salary as shown to the teacher: `total_salary` floored at zero.
    pub fn displayed_total(&self) -> Decimal {
        self.total_salary.max(Decimal::ZERO)
    }
}
