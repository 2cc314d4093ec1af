//! Request types for the pay calculation API.
//!
//! This module defines the JSON body of the `/calculate` endpoint. It has the
//! shape of a [`SalaryState`], but every count is read leniently: form input
//! such as `""`, `"12"`, `-3` or `2.5` is normalized with
//! [`sanitize_count`] instead of being rejected.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::calculation::sanitize_count;
use crate::models::{
    GroupClass, PersonalClassCounts, PositionType, SalaryState, StudentGrade, TeacherLevel,
    TrialSuccessRecord,
};

/// A class count as typed into a form, normalized to a non-negative integer.
///
/// # Example
///
/// ```
/// use teacher_pay::api::FormCount;
///
/// let count: FormCount = serde_json::from_str("\"-5\"").unwrap();
/// assert_eq!(count, FormCount(0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormCount(pub u32);

impl<'de> Deserialize<'de> for FormCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(FormCount(sanitize_count(&value)))
    }
}

/// Request body for the `/calculate` endpoint.
///
/// Every field is optional; omitted fields take the start-of-session values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationRequest {
    /// The teacher's seniority level.
    pub level: TeacherLevel,
    /// The teacher's position category.
    pub position_type: PositionType,
    /// Number of trial lessons that did not convert.
    pub trial_fail_count: FormCount,
    /// Trial lessons that converted.
    pub trial_success_records: Vec<TrialSuccessRequest>,
    /// One-on-one class counts keyed by grade.
    pub personal_class_counts: BTreeMap<StudentGrade, FormCount>,
    /// Group classes.
    pub group_classes: Vec<GroupClassRequest>,
}

/// A group class in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupClassRequest {
    /// Client-side identifier, echoed into the salary state.
    #[serde(default)]
    pub id: String,
    /// The grade band of the group.
    pub grade: StudentGrade,
    /// Number of students in the group.
    #[serde(default)]
    pub student_count: FormCount,
    /// Number of classes taught to the group.
    #[serde(default)]
    pub class_count: FormCount,
}

/// A converted trial lesson record in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialSuccessRequest {
    /// Client-side identifier, echoed into the salary state.
    #[serde(default)]
    pub id: String,
    /// The grade band of the trial students.
    pub grade: StudentGrade,
    /// Number of converted lessons.
    #[serde(default)]
    pub count: FormCount,
}

impl From<CalculationRequest> for SalaryState {
    fn from(req: CalculationRequest) -> Self {
        SalaryState {
            level: req.level,
            position_type: req.position_type,
            trial_fail_count: req.trial_fail_count.0,
            trial_success_records: req
                .trial_success_records
                .into_iter()
                .map(Into::into)
                .collect(),
            personal_class_counts: req
                .personal_class_counts
                .into_iter()
                .map(|(grade, count)| (grade, count.0))
                .collect::<PersonalClassCounts>(),
            group_classes: req.group_classes.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<GroupClassRequest> for GroupClass {
    fn from(req: GroupClassRequest) -> Self {
        GroupClass {
            id: req.id,
            grade: req.grade,
            student_count: req.student_count.0,
            class_count: req.class_count.0,
        }
    }
}

impl From<TrialSuccessRequest> for TrialSuccessRecord {
    fn from(req: TrialSuccessRequest) -> Self {
        TrialSuccessRecord {
            id: req.id,
            grade: req.grade,
            count: req.count.0,
        }
    }
}
