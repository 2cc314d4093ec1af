//! Property tests for the pay calculator.

use proptest::prelude::*;
use rust_decimal::Decimal;

use teacher_pay::calculation::compute;
use teacher_pay::config::PayRules;
use teacher_pay::models::{
    GroupClass, PersonalClassCounts, PositionType, SalaryState, StudentGrade, TeacherLevel,
    TrialSuccessRecord,
};

fn grade() -> impl Strategy<Value = StudentGrade> {
    (0..StudentGrade::ALL.len()).prop_map(|i| StudentGrade::ALL[i])
}

fn group_class() -> impl Strategy<Value = GroupClass> {
    (grade(), 0u32..12, 0u32..10).prop_map(|(grade, student_count, class_count)| GroupClass {
        id: format!("g-{}-{}", student_count, class_count),
        grade,
        student_count,
        class_count,
    })
}

fn trial_record() -> impl Strategy<Value = TrialSuccessRecord> {
    (grade(), 0u32..10).prop_map(|(grade, count)| TrialSuccessRecord {
        id: format!("t-{}", count),
        grade,
        count,
    })
}

fn salary_state() -> impl Strategy<Value = SalaryState> {
    (
        0..TeacherLevel::ALL.len(),
        0..PositionType::ALL.len(),
        0u32..20,
        prop::collection::vec(trial_record(), 0..4),
        prop::collection::vec((grade(), 0u32..25), 0..9),
        prop::collection::vec(group_class(), 0..4),
    )
        .prop_map(
            |(level, position, trial_fail_count, trials, personal, groups)| SalaryState {
                level: TeacherLevel::ALL[level],
                position_type: PositionType::ALL[position],
                trial_fail_count,
                trial_success_records: trials,
                personal_class_counts: personal.into_iter().collect::<PersonalClassCounts>(),
                group_classes: groups,
            },
        )
}

proptest! {
    #[test]
    fn compute_is_deterministic(state in salary_state()) {
        prop_assert_eq!(compute(&state), compute(&state));
    }

    #[test]
    fn total_is_fixed_plus_variable_minus_deduction(state in salary_state()) {
        let r = compute(&state);
        prop_assert_eq!(
            r.total_salary,
            r.fixed_part + r.personal_class_income + r.group_class_income + r.trial_bonus
                - r.task_hours_deduction
        );
        prop_assert_eq!(r.fixed_part, r.base_salary + r.post_salary);
        prop_assert_eq!(r.trial_bonus, r.success_income + r.fail_income);
        prop_assert_eq!(
            r.base_class_fees,
            r.personal_class_income + r.group_base_income - r.task_hours_deduction
        );
    }

    #[test]
    fn group_income_splits_into_base_and_headcount(state in salary_state()) {
        let r = compute(&state);
        prop_assert_eq!(r.group_class_income, r.group_base_income + r.group_headcount_bonus);
        prop_assert!(r.group_headcount_bonus >= Decimal::ZERO);
    }

    #[test]
    fn hours_filled_is_bounded(state in salary_state()) {
        let r = compute(&state);
        let quota = u64::from(PayRules::default().task_hour_quota);
        prop_assert!(r.hours_filled <= quota);
        prop_assert!(r.hours_filled <= r.total_hours);
        prop_assert_eq!(r.total_hours, r.regular_hours + r.trial_hours);
        prop_assert_eq!(r.hours_filled, r.total_hours.min(quota));
    }

    #[test]
    fn standard_rules_never_withhold_fixed_salary(state in salary_state()) {
        let r = compute(&state);
        prop_assert!(r.total_salary >= r.fixed_part);
        prop_assert_eq!(r.displayed_total(), r.total_salary);
    }

    #[test]
    fn trials_do_not_change_deduction_once_quota_met(
        state in salary_state(),
        trials in prop::collection::vec(trial_record(), 1..4),
        fails in 1u32..20,
    ) {
        let mut state = state;
        state.trial_success_records.clear();
        state.trial_fail_count = 0;
        state.set_personal_class_count(StudentGrade::High3, 15);
        let without = compute(&state);
        prop_assert!(without.regular_hours >= 30);

        let mut with_trials = state.clone();
        with_trials.trial_success_records.extend(trials);
        with_trials.trial_fail_count = fails;
        let with = compute(&with_trials);

        prop_assert_eq!(with.task_hours_deduction, without.task_hours_deduction);
        prop_assert_eq!(with.hours_filled, without.hours_filled);
        prop_assert_eq!(with.total_salary, without.total_salary + with.trial_bonus);
    }
}
