//! Rate resolution for a teacher's level and position.

use rust_decimal::Decimal;

use crate::config::PayTables;
use crate::models::{PositionType, StudentGrade, TeacherLevel};

/// The fixed salary and personal rates that apply to one teacher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRates {
    /// The base salary.
    pub base_salary: Decimal,
    /// The post allowance.
    pub post_salary: Decimal,
    /// `base_salary + post_salary`.
    pub fixed_part: Decimal,
    personal_rates: [Decimal; 9],
}

impl ResolvedRates {
    /// Returns the per-class personal rate for `grade`.
    pub fn personal_rate(&self, grade: StudentGrade) -> Decimal {
        self.personal_rates[grade.index()]
    }
}

/// Looks up the fixed salary and personal rates for a level and position.
///
/// The tables are total over both enumerations, so this cannot fail.
///
/// # Example
///
/// ```
/// use teacher_pay::calculation::resolve_rates;
/// use teacher_pay::config::PayTables;
/// use teacher_pay::models::{PositionType, StudentGrade, TeacherLevel};
/// use rust_decimal::Decimal;
///
/// let rates = resolve_rates(&PayTables::standard(), TeacherLevel::Three, PositionType::HighSchool);
/// assert_eq!(rates.fixed_part, Decimal::from(2600));
/// assert_eq!(rates.personal_rate(StudentGrade::High1), Decimal::from(170));
/// ```
pub fn resolve_rates(
    tables: &PayTables,
    level: TeacherLevel,
    position: PositionType,
) -> ResolvedRates {
    let fixed = tables.fixed_salary(level, position);
    ResolvedRates {
        base_salary: fixed.base,
        post_salary: fixed.post,
        fixed_part: fixed.total(),
        personal_rates: *tables.personal_rates(level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_one_high_school() {
        let rates = resolve_rates(
            &PayTables::standard(),
            TeacherLevel::One,
            PositionType::HighSchool,
        );
        assert_eq!(rates.base_salary, Decimal::from(2100));
        assert_eq!(rates.post_salary, Decimal::from(200));
        assert_eq!(rates.fixed_part, Decimal::from(2300));
        assert_eq!(rates.personal_rate(StudentGrade::Grade1To2), Decimal::from(90));
    }

    #[test]
    fn test_position_changes_post_not_personal_rates() {
        let tables = PayTables::standard();
        let high = resolve_rates(&tables, TeacherLevel::Five, PositionType::HighSchool);
        let primary = resolve_rates(&tables, TeacherLevel::Five, PositionType::PrimaryMiddle);

        assert_eq!(high.post_salary, Decimal::from(900));
        assert_eq!(primary.post_salary, Decimal::from(700));
        for grade in StudentGrade::ALL {
            assert_eq!(high.personal_rate(grade), primary.personal_rate(grade));
        }
    }
}
