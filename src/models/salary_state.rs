//! The editable input state of a pay calculation.
//!
//! A [`SalaryState`] lives for one session: it starts with every count at
//! zero, is edited in place while the teacher fills in the month, and is
//! handed to the calculator by reference after every change.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::{PositionType, StudentGrade, TeacherLevel};

/// One-on-one class counts per student grade.
///
/// Grades without an entry count as zero.
///
/// # Example
///
/// ```
/// use teacher_pay::models::{PersonalClassCounts, StudentGrade};
///
/// let mut counts = PersonalClassCounts::default();
/// counts.set(StudentGrade::High1, 4);
/// assert_eq!(counts.get(StudentGrade::High1), 4);
/// assert_eq!(counts.get(StudentGrade::High2), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonalClassCounts(BTreeMap<StudentGrade, u32>);

impl PersonalClassCounts {
    /// Returns the number of classes taught at `grade`.
    pub fn get(&self, grade: StudentGrade) -> u32 {
        self.0.get(&grade).copied().unwrap_or(0)
    }

    /// Overwrites the number of classes taught at `grade`.
    pub fn set(&mut self, grade: StudentGrade, count: u32) {
        if count == 0 {
            self.0.remove(&grade);
        } else {
            self.0.insert(grade, count);
        }
    }

    /// Iterates over grades with a non-zero count, youngest grade first.
    pub fn iter(&self) -> impl Iterator<Item = (StudentGrade, u32)> + '_ {
        StudentGrade::ALL
            .into_iter()
            .map(|grade| (grade, self.get(grade)))
            .filter(|(_, count)| *count > 0)
    }

    /// Total number of one-on-one classes across all grades.
    pub fn total(&self) -> u64 {
        self.0.values().map(|&c| u64::from(c)).sum()
    }
}

impl FromIterator<(StudentGrade, u32)> for PersonalClassCounts {
    fn from_iter<I: IntoIterator<Item = (StudentGrade, u32)>>(iter: I) -> Self {
        let mut counts = PersonalClassCounts::default();
        for (grade, count) in iter {
            counts.set(grade, count);
        }
        counts
    }
}

/// A teaching group taught during the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupClass {
    /// Identifier used to edit or remove this entry.
    pub id: String,
    /// The grade band of the group.
    pub grade: StudentGrade,
    /// Number of students in the group.
    pub student_count: u32,
    /// Number of classes taught to the group.
    pub class_count: u32,
}

/// A single-field edit to a [`GroupClass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupClassUpdate {
    /// Change the grade band.
    Grade(StudentGrade),
    /// Change the number of students.
    StudentCount(u32),
    /// Change the number of classes.
    ClassCount(u32),
}

/// Trial lessons at one grade that converted to enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialSuccessRecord {
    /// Identifier used to edit or remove this entry.
    pub id: String,
    /// The grade band of the trial students.
    pub grade: StudentGrade,
    /// Number of converted trial lessons.
    pub count: u32,
}

/// A single-field edit to a [`TrialSuccessRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialSuccessUpdate {
    /// Change the grade band.
    Grade(StudentGrade),
    /// Change the number of converted lessons.
    Count(u32),
}

/// All inputs to a monthly pay calculation.
///
/// # Example
///
/// ```
/// use teacher_pay::models::{GroupClassUpdate, SalaryState, StudentGrade, TeacherLevel};
///
/// let mut state = SalaryState::new();
/// state.set_level(TeacherLevel::Three);
/// state.set_personal_class_count(StudentGrade::Middle1, 6);
///
/// let id = state.add_group_class();
/// state.update_group_class(&id, GroupClassUpdate::StudentCount(4))?;
/// assert_eq!(state.group_classes[0].student_count, 4);
/// # Ok::<(), teacher_pay::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryState {
    /// The teacher's seniority level.
    pub level: TeacherLevel,
    /// The teacher's position category.
    pub position_type: PositionType,
    /// Number of trial lessons that did not convert.
    pub trial_fail_count: u32,
    /// Trial lessons that converted, in insertion order.
    pub trial_success_records: Vec<TrialSuccessRecord>,
    /// One-on-one class counts per grade.
    pub personal_class_counts: PersonalClassCounts,
    /// Group classes, in insertion order.
    pub group_classes: Vec<GroupClass>,
}

impl SalaryState {
    /// Creates the start-of-session state: level 1, high-school position,
    /// and no classes of any kind.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the teacher's seniority level.
    pub fn set_level(&mut self, level: TeacherLevel) {
        self.level = level;
    }

    /// Sets the teacher's position category.
    pub fn set_position_type(&mut self, position_type: PositionType) {
        self.position_type = position_type;
    }

    /// Sets the number of trial lessons that did not convert.
    pub fn set_trial_fail_count(&mut self, count: u32) {
        self.trial_fail_count = count;
    }

    /// Sets the number of one-on-one classes taught at `grade`.
    pub fn set_personal_class_count(&mut self, grade: StudentGrade, count: u32) {
        self.personal_class_counts.set(grade, count);
    }

    /// Appends a group class (grade 1-2, two students, one class) and
    /// returns its id.
    pub fn add_group_class(&mut self) -> String {
        let id = new_id();
        self.group_classes.push(GroupClass {
            id: id.clone(),
            grade: StudentGrade::Grade1To2,
            student_count: 2,
            class_count: 1,
        });
        id
    }

    /// Applies `update` to the group class with the given id.
    ///
    /// Returns [`EngineError::GroupClassNotFound`] if no such group exists.
    pub fn update_group_class(&mut self, id: &str, update: GroupClassUpdate) -> EngineResult<()> {
        let group = self
            .group_classes
            .iter_mut()
            .find(|gc| gc.id == id)
            .ok_or_else(|| EngineError::GroupClassNotFound { id: id.to_string() })?;

        match update {
            GroupClassUpdate::Grade(grade) => group.grade = grade,
            GroupClassUpdate::StudentCount(count) => group.student_count = count,
            GroupClassUpdate::ClassCount(count) => group.class_count = count,
        }
        Ok(())
    }

    /// Removes the group class with the given id and returns it.
    pub fn remove_group_class(&mut self, id: &str) -> EngineResult<GroupClass> {
        let position = self
            .group_classes
            .iter()
            .position(|gc| gc.id == id)
            .ok_or_else(|| EngineError::GroupClassNotFound { id: id.to_string() })?;
        Ok(self.group_classes.remove(position))
    }

    /// Appends a trial-success record (grade 1-2, one lesson) and returns its id.
    pub fn add_trial_success(&mut self) -> String {
        let id = new_id();
        self.trial_success_records.push(TrialSuccessRecord {
            id: id.clone(),
            grade: StudentGrade::Grade1To2,
            count: 1,
        });
        id
    }

    /// Applies `update` to the trial-success record with the given id.
    ///
    /// Returns [`EngineError::TrialRecordNotFound`] if no such record exists.
    pub fn update_trial_success(
        &mut self,
        id: &str,
        update: TrialSuccessUpdate,
    ) -> EngineResult<()> {
        let record = self
            .trial_success_records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| EngineError::TrialRecordNotFound { id: id.to_string() })?;

        match update {
            TrialSuccessUpdate::Grade(grade) => record.grade = grade,
            TrialSuccessUpdate::Count(count) => record.count = count,
        }
        Ok(())
    }

    /// Removes the trial-success record with the given id and returns it.
    pub fn remove_trial_success(&mut self, id: &str) -> EngineResult<TrialSuccessRecord> {
        let position = self
            .trial_success_records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| EngineError::TrialRecordNotFound { id: id.to_string() })?;
        Ok(self.trial_success_records.remove(position))
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}
