//! Gross class income per category, before the task-hour deduction.
//!
//! Each calculation also returns the line items the deduction later draws
//! on, priced at the rate the deduction uses (bonuses excluded).

use rust_decimal::Decimal;

use crate::config::{HOURS_PER_CLASS, PayRules};
use crate::models::{GroupClass, PersonalClassCounts, TrialSuccessRecord};

use super::rate_lookup::ResolvedRates;
use super::task_hours::DeductionItem;

/// Gross one-on-one class income.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalIncome {
    /// Sum of count x rate over every grade.
    pub income: Decimal,
    /// Hours taught.
    pub hours: u64,
    /// One item per grade taught, in grade order.
    pub items: Vec<DeductionItem>,
}

/// Gross group class income.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupIncome {
    /// `base_income + headcount_income`.
    pub income: Decimal,
    /// Income at the base per-grade rate.
    pub base_income: Decimal,
    /// Income from students beyond the first.
    pub headcount_income: Decimal,
    /// Hours taught.
    pub hours: u64,
    /// One item per group at its base rate, in list order.
    pub items: Vec<DeductionItem>,
}

/// Gross trial lesson income.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialIncome {
    /// Income from converted lessons (base rate plus bonus).
    pub success_income: Decimal,
    /// Hours of converted lessons.
    pub success_hours: u64,
    /// One item per record at its base rate, in list order.
    pub success_items: Vec<DeductionItem>,
    /// Registration fees from unconverted lessons.
    pub fail_income: Decimal,
    /// Hours of unconverted lessons.
    pub fail_hours: u64,
    /// All unconverted lessons as one item at the registration fee.
    pub fail_item: DeductionItem,
}

fn class_hours(count: u32) -> u64 {
    u64::from(count) * u64::from(HOURS_PER_CLASS)
}

/// Calculates one-on-one class income.
///
/// # Example
///
/// ```
/// use teacher_pay::calculation::{calculate_personal_income, resolve_rates};
/// use teacher_pay::config::PayTables;
/// use teacher_pay::models::{PersonalClassCounts, PositionType, StudentGrade, TeacherLevel};
/// use rust_decimal::Decimal;
///
/// let rates = resolve_rates(&PayTables::standard(), TeacherLevel::One, PositionType::HighSchool);
/// let mut counts = PersonalClassCounts::default();
/// counts.set(StudentGrade::Grade1To2, 20);
///
/// let personal = calculate_personal_income(&counts, &rates);
/// assert_eq!(personal.income, Decimal::from(1800));
/// assert_eq!(personal.hours, 40);
/// ```
pub fn calculate_personal_income(
    counts: &PersonalClassCounts,
    rates: &ResolvedRates,
) -> PersonalIncome {
    let mut income = Decimal::ZERO;
    let mut hours = 0;
    let mut items = Vec::new();

    for (grade, count) in counts.iter() {
        let rate = rates.personal_rate(grade);
        let item_hours = class_hours(count);
        income += Decimal::from(count) * rate;
        hours += item_hours;
        items.push(DeductionItem {
            rate,
            hours: item_hours,
        });
    }

    PersonalIncome {
        income,
        hours,
        items,
    }
}

/// Calculates group class income.
///
/// Each class pays the personal rate for the group's grade plus the
/// headcount bonus for every student beyond the first.
pub fn calculate_group_income(
    groups: &[GroupClass],
    rates: &ResolvedRates,
    rules: &PayRules,
) -> GroupIncome {
    let bonus_per_student = rules.headcount_bonus_per_student_class();
    let mut base_income = Decimal::ZERO;
    let mut headcount_income = Decimal::ZERO;
    let mut hours = 0;
    let mut items = Vec::with_capacity(groups.len());

    for group in groups {
        let base_rate = rates.personal_rate(group.grade);
        let extra_students = group.student_count.saturating_sub(1);
        let extra_pay_per_class = Decimal::from(extra_students) * bonus_per_student;
        let classes = Decimal::from(group.class_count);

        base_income += base_rate * classes;
        headcount_income += extra_pay_per_class * classes;

        let item_hours = class_hours(group.class_count);
        hours += item_hours;
        items.push(DeductionItem {
            rate: base_rate,
            hours: item_hours,
        });
    }

    GroupIncome {
        income: base_income + headcount_income,
        base_income,
        headcount_income,
        hours,
        items,
    }
}

/// Calculates trial lesson income, converted and unconverted.
pub fn calculate_trial_income(
    records: &[TrialSuccessRecord],
    fail_count: u32,
    rates: &ResolvedRates,
    rules: &PayRules,
) -> TrialIncome {
    let mut success_income = Decimal::ZERO;
    let mut success_hours = 0;
    let mut success_items = Vec::with_capacity(records.len());

    for record in records {
        let base_rate = rates.personal_rate(record.grade);
        success_income += Decimal::from(record.count) * (base_rate + rules.trial_success_bonus);

        let item_hours = class_hours(record.count);
        success_hours += item_hours;
        success_items.push(DeductionItem {
            rate: base_rate,
            hours: item_hours,
        });
    }

    let fail_hours = class_hours(fail_count);

    TrialIncome {
        success_income,
        success_hours,
        success_items,
        fail_income: Decimal::from(fail_count) * rules.trial_fail_fee,
        fail_hours,
        fail_item: DeductionItem {
            rate: rules.trial_fail_fee,
            hours: fail_hours,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::resolve_rates;
    use crate::config::PayTables;
    use crate::models::{PositionType, StudentGrade, TeacherLevel};

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    fn level_one_rates() -> ResolvedRates {
        resolve_rates(
            &PayTables::standard(),
            TeacherLevel::One,
            PositionType::HighSchool,
        )
    }

    fn group(grade: StudentGrade, student_count: u32, class_count: u32) -> GroupClass {
        GroupClass {
            id: format!("group_{}_{}", student_count, class_count),
            grade,
            student_count,
            class_count,
        }
    }

    #[test]
    fn test_personal_income_skips_empty_grades() {
        let counts: PersonalClassCounts = [(StudentGrade::High3, 2), (StudentGrade::Grade3To4, 3)]
            .into_iter()
            .collect();

        let personal = calculate_personal_income(&counts, &level_one_rates());
        assert_eq!(personal.income, dec(3 * 100 + 2 * 170));
        assert_eq!(personal.hours, 10);
        assert_eq!(
            personal.items,
            vec![
                DeductionItem {
                    rate: dec(100),
                    hours: 6
                },
                DeductionItem {
                    rate: dec(170),
                    hours: 4
                },
            ]
        );
    }

    #[test]
    fn test_group_income_splits_base_and_headcount() {
        let groups = vec![group(StudentGrade::Grade1To2, 3, 2)];
        let result = calculate_group_income(&groups, &level_one_rates(), &PayRules::default());

        assert_eq!(result.income, dec(260));
        assert_eq!(result.base_income, dec(180));
        assert_eq!(result.headcount_income, dec(80));
        assert_eq!(result.hours, 4);
        assert_eq!(
            result.items,
            vec![DeductionItem {
                rate: dec(90),
                hours: 4
            }]
        );
    }

    #[test]
    fn test_single_student_group_earns_no_headcount_bonus() {
        let groups = vec![group(StudentGrade::Middle1, 1, 3)];
        let result = calculate_group_income(&groups, &level_one_rates(), &PayRules::default());
        assert_eq!(result.headcount_income, Decimal::ZERO);
        assert_eq!(result.income, dec(360));
    }

    #[test]
    fn test_zero_student_group_is_not_negative() {
        let groups = vec![group(StudentGrade::Middle1, 0, 1)];
        let result = calculate_group_income(&groups, &level_one_rates(), &PayRules::default());
        assert_eq!(result.headcount_income, Decimal::ZERO);
        assert_eq!(result.income, dec(120));
    }

    #[test]
    fn test_trial_success_adds_bonus_but_item_uses_base_rate() {
        let records = vec![TrialSuccessRecord {
            id: "t1".to_string(),
            grade: StudentGrade::Grade5To6,
            count: 2,
        }];
        let result = calculate_trial_income(&records, 0, &level_one_rates(), &PayRules::default());

        assert_eq!(result.success_income, dec(2 * (110 + 50)));
        assert_eq!(result.success_hours, 4);
        assert_eq!(result.success_items[0].rate, dec(110));
        assert_eq!(result.fail_income, Decimal::ZERO);
        assert_eq!(result.fail_item.hours, 0);
    }

    #[test]
    fn test_trial_fail_pays_flat_fee_regardless_of_grade() {
        let result = calculate_trial_income(&[], 5, &level_one_rates(), &PayRules::default());
        assert_eq!(result.fail_income, dec(495));
        assert_eq!(result.fail_hours, 10);
        assert_eq!(
            result.fail_item,
            DeductionItem {
                rate: dec(99),
                hours: 10
            }
        );
    }
}
