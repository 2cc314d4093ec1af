//! The monthly pay calculator.
//!
//! [`calculate_pay`] is a pure function of a [`SalaryState`] and a
//! [`PayConfig`]. It is cheap enough to rerun on every input change and
//! holds no state between calls, so it can be called from any number of
//! threads at once.

use std::sync::LazyLock;

use crate::config::PayConfig;
use crate::models::{CalculationResult, SalaryState};

use super::gross_income::{
    calculate_group_income, calculate_personal_income, calculate_trial_income,
};
use super::rate_lookup::resolve_rates;
use super::task_hours::{DeductionSources, apply_task_hour_deduction};

static STANDARD_CONFIG: LazyLock<PayConfig> = LazyLock::new(PayConfig::standard);

/// Calculates monthly pay with the standard rules and tables.
///
/// # Example
///
/// ```
/// use teacher_pay::calculation::compute;
/// use teacher_pay::models::SalaryState;
/// use rust_decimal::Decimal;
///
/// let result = compute(&SalaryState::new());
/// assert_eq!(result.total_salary, Decimal::from(2300));
/// assert_eq!(result.hours_filled, 0);
/// ```
pub fn compute(state: &SalaryState) -> CalculationResult {
    calculate_pay(state, &STANDARD_CONFIG)
}

/// Calculates monthly pay for `state` under `config`.
///
/// Steps, in order:
/// 1. resolve the fixed salary and personal rates for the level/position;
/// 2. compute gross income and hours per category;
/// 3. total the regular and trial hours;
/// 4. withhold the task-hour quota, cheapest classes first;
/// 5. aggregate: `total_salary = fixed_part + variable income - deduction`.
///
/// The result is not clamped; see [`CalculationResult::displayed_total`].
pub fn calculate_pay(state: &SalaryState, config: &PayConfig) -> CalculationResult {
    let rules = &config.rules;
    let rates = resolve_rates(&config.tables, state.level, state.position_type);

    let personal = calculate_personal_income(&state.personal_class_counts, &rates);
    let group = calculate_group_income(&state.group_classes, &rates, rules);
    let trial = calculate_trial_income(
        &state.trial_success_records,
        state.trial_fail_count,
        &rates,
        rules,
    );

    let regular_hours = personal.hours + group.hours;
    let trial_hours = trial.success_hours + trial.fail_hours;
    let total_hours = regular_hours + trial_hours;

    let deduction = apply_task_hour_deduction(
        rules.task_hour_quota,
        DeductionSources {
            personal: personal.items,
            group: group.items,
            trial_success: trial.success_items,
            trial_fail: trial.fail_item,
        },
        regular_hours,
    );

    let trial_bonus = trial.success_income + trial.fail_income;
    let total_variable = personal.income + group.income + trial_bonus;
    let total_salary = rates.fixed_part + total_variable - deduction.amount;
    let base_class_fees = personal.income + group.base_income - deduction.amount;

    tracing::debug!(
        level = %state.level,
        position_type = %state.position_type,
        total_hours,
        total_salary = %total_salary,
        "Calculated pay"
    );

    CalculationResult {
        base_salary: rates.base_salary,
        post_salary: rates.post_salary,
        fixed_part: rates.fixed_part,
        trial_bonus,
        personal_class_income: personal.income,
        group_class_income: group.income,
        group_base_income: group.base_income,
        group_headcount_bonus: group.headcount_income,
        success_income: trial.success_income,
        fail_income: trial.fail_income,
        base_class_fees,
        total_salary,
        regular_hours,
        trial_hours,
        total_hours,
        task_hours_deduction: deduction.amount,
        hours_filled: deduction.hours_filled,
    }
}
