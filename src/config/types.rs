//! Configuration types for pay calculation.
//!
//! This module contains the pay rules and rate tables the calculator reads.
//! Rate tables are fixed-size arrays indexed by enum ordinal, so every
//! (level, position) and (level, grade) pair has an entry by construction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PositionType, StudentGrade, TeacherLevel};

use super::tables::{STANDARD_FIXED_SALARY, STANDARD_PERSONAL_RATES};

/// Every class, of any kind, is this many hours long.
pub const HOURS_PER_CLASS: u32 = 2;

/// Fixed monthly salary for one level and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryConfig {
    /// The base salary.
    pub base: Decimal,
    /// The post allowance.
    pub post: Decimal,
}

impl SalaryConfig {
    /// Returns `base + post`.
    pub fn total(&self) -> Decimal {
        self.base + self.post
    }
}

/// Scalar pay rules.
///
/// Fields missing from a rules file take their standard value.
///
/// # Example
///
/// ```
/// use teacher_pay::config::PayRules;
/// use rust_decimal::Decimal;
///
/// let rules = PayRules::default();
/// assert_eq!(rules.task_hour_quota, 30);
/// assert_eq!(rules.trial_fail_fee, Decimal::from(99));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayRules {
    /// Monthly teaching hours already paid for by the fixed salary.
    pub task_hour_quota: u32,
    /// Group class bonus per student beyond the first, per hour.
    pub headcount_bonus_per_student_hour: Decimal,
    /// Bonus per converted trial lesson on top of the personal rate.
    pub trial_success_bonus: Decimal,
    /// Flat registration fee per trial lesson that did not convert.
    pub trial_fail_fee: Decimal,
}

impl Default for PayRules {
    fn default() -> Self {
        Self {
            task_hour_quota: 30,
            headcount_bonus_per_student_hour: Decimal::from(10),
            trial_success_bonus: Decimal::from(50),
            trial_fail_fee: Decimal::from(99),
        }
    }
}

impl PayRules {
    /// Headcount bonus per extra student for one whole class.
    pub fn headcount_bonus_per_student_class(&self) -> Decimal {
        self.headcount_bonus_per_student_hour * Decimal::from(HOURS_PER_CLASS)
    }
}

/// Fixed salary and personal rate lookup tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayTables {
    fixed_salary: [[SalaryConfig; 2]; 8],
    personal_rates: [[Decimal; 9]; 8],
}

impl PayTables {
    /// Creates tables from explicit values, indexed by enum ordinal.
    pub fn new(fixed_salary: [[SalaryConfig; 2]; 8], personal_rates: [[Decimal; 9]; 8]) -> Self {
        Self {
            fixed_salary,
            personal_rates,
        }
    }

    /// The built-in salary and rate tables.
    pub fn standard() -> Self {
        let fixed_salary = STANDARD_FIXED_SALARY.map(|row| {
            row.map(|(base, post)| SalaryConfig {
                base: Decimal::from(base),
                post: Decimal::from(post),
            })
        });
        let personal_rates = STANDARD_PERSONAL_RATES.map(|row| row.map(Decimal::from));
        Self::new(fixed_salary, personal_rates)
    }

    /// Returns the fixed salary for a level and position.
    pub fn fixed_salary(&self, level: TeacherLevel, position: PositionType) -> SalaryConfig {
        self.fixed_salary[level.index()][position.index()]
    }

    /// Returns the per-class personal rate for a level and grade.
    pub fn personal_rate(&self, level: TeacherLevel, grade: StudentGrade) -> Decimal {
        self.personal_rates[level.index()][grade.index()]
    }

    /// Returns every personal rate for a level, indexed by grade ordinal.
    pub fn personal_rates(&self, level: TeacherLevel) -> &[Decimal; 9] {
        &self.personal_rates[level.index()]
    }
}

impl Default for PayTables {
    fn default() -> Self {
        Self::standard()
    }
}

/// Everything the calculator needs besides the salary state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayConfig {
    /// Scalar pay rules.
    pub rules: PayRules,
    /// Salary and rate tables.
    pub tables: PayTables,
}

impl PayConfig {
    /// The standard rules with the built-in tables.
    pub fn standard() -> Self {
        Self::default()
    }
}
