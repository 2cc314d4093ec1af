//! Teacher and student classifications.
//!
//! This module defines the closed enumerations used as keys into the pay
//! tables: the teacher's seniority level, the position category, and the
//! student's grade band. Each enum exposes an ordinal [`index`](TeacherLevel::index)
//! so the tables can be plain fixed-size arrays.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A teacher's seniority tier.
///
/// # Example
///
/// ```
/// use teacher_pay::models::TeacherLevel;
///
/// let level: TeacherLevel = serde_json::from_str("\"level_3\"").unwrap();
/// assert_eq!(level, TeacherLevel::Three);
/// assert_eq!(level.index(), 2);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum TeacherLevel {
    /// Level 1 (entry level).
    #[default]
    #[serde(rename = "level_1")]
    One,
    /// Level 2.
    #[serde(rename = "level_2")]
    Two,
    /// Level 3.
    #[serde(rename = "level_3")]
    Three,
    /// Level 4.
    #[serde(rename = "level_4")]
    Four,
    /// Level 5.
    #[serde(rename = "level_5")]
    Five,
    /// Level 6.
    #[serde(rename = "level_6")]
    Six,
    /// Level 7.
    #[serde(rename = "level_7")]
    Seven,
    /// Level 8 (most senior).
    #[serde(rename = "level_8")]
    Eight,
}

impl TeacherLevel {
    /// Every level, in ascending order.
    pub const ALL: [TeacherLevel; 8] = [
        TeacherLevel::One,
        TeacherLevel::Two,
        TeacherLevel::Three,
        TeacherLevel::Four,
        TeacherLevel::Five,
        TeacherLevel::Six,
        TeacherLevel::Seven,
        TeacherLevel::Eight,
    ];

    /// Zero-based ordinal of this level.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The wire name of this level (e.g. `level_1`).
    pub fn code(self) -> &'static str {
        match self {
            TeacherLevel::One => "level_1",
            TeacherLevel::Two => "level_2",
            TeacherLevel::Three => "level_3",
            TeacherLevel::Four => "level_4",
            TeacherLevel::Five => "level_5",
            TeacherLevel::Six => "level_6",
            TeacherLevel::Seven => "level_7",
            TeacherLevel::Eight => "level_8",
        }
    }
}

impl fmt::Display for TeacherLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {}", self.index() + 1)
    }
}

/// The category of teaching position, which decides the post allowance.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PositionType {
    /// High-school teaching position.
    #[default]
    HighSchool,
    /// Primary or middle school teaching position.
    PrimaryMiddle,
}

impl PositionType {
    /// Every position type.
    pub const ALL: [PositionType; 2] = [PositionType::HighSchool, PositionType::PrimaryMiddle];

    /// Zero-based ordinal of this position type.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The wire name of this position type.
    pub fn code(self) -> &'static str {
        match self {
            PositionType::HighSchool => "high_school",
            PositionType::PrimaryMiddle => "primary_middle",
        }
    }
}

impl fmt::Display for PositionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionType::HighSchool => write!(f, "High school"),
            PositionType::PrimaryMiddle => write!(f, "Primary/middle school"),
        }
    }
}

/// A student's grade band.
///
/// Declaration order is the ordinal order used when iterating personal
/// class counts.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum StudentGrade {
    /// Primary grades 1-2.
    #[default]
    #[serde(rename = "grade_1_2")]
    Grade1To2,
    /// Primary grades 3-4.
    #[serde(rename = "grade_3_4")]
    Grade3To4,
    /// Primary grades 5-6.
    #[serde(rename = "grade_5_6")]
    Grade5To6,
    /// Middle school year 1.
    #[serde(rename = "middle_1")]
    Middle1,
    /// Middle school year 2.
    #[serde(rename = "middle_2")]
    Middle2,
    /// Middle school year 3.
    #[serde(rename = "middle_3")]
    Middle3,
    /// High school year 1.
    #[serde(rename = "high_1")]
    High1,
    /// High school year 2.
    #[serde(rename = "high_2")]
    High2,
    /// High school year 3.
    #[serde(rename = "high_3")]
    High3,
}

impl StudentGrade {
    /// Every grade band, youngest first.
    pub const ALL: [StudentGrade; 9] = [
        StudentGrade::Grade1To2,
        StudentGrade::Grade3To4,
        StudentGrade::Grade5To6,
        StudentGrade::Middle1,
        StudentGrade::Middle2,
        StudentGrade::Middle3,
        StudentGrade::High1,
        StudentGrade::High2,
        StudentGrade::High3,
    ];

    /// Zero-based ordinal of this grade band.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The wire name of this grade band (e.g. `middle_2`).
    pub fn code(self) -> &'static str {
        match self {
            StudentGrade::Grade1To2 => "grade_1_2",
            StudentGrade::Grade3To4 => "grade_3_4",
            StudentGrade::Grade5To6 => "grade_5_6",
            StudentGrade::Middle1 => "middle_1",
            StudentGrade::Middle2 => "middle_2",
            StudentGrade::Middle3 => "middle_3",
            StudentGrade::High1 => "high_1",
            StudentGrade::High2 => "high_2",
            StudentGrade::High3 => "high_3",
        }
    }
}

impl fmt::Display for StudentGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StudentGrade::Grade1To2 => "Grade 1-2",
            StudentGrade::Grade3To4 => "Grade 3-4",
            StudentGrade::Grade5To6 => "Grade 5-6",
            StudentGrade::Middle1 => "Middle 1",
            StudentGrade::Middle2 => "Middle 2",
            StudentGrade::Middle3 => "Middle 3",
            StudentGrade::High1 => "High 1",
            StudentGrade::High2 => "High 2",
            StudentGrade::High3 => "High 3",
        };
        f.write_str(label)
    }
}
