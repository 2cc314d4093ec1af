//! Built-in salary and rate tables.
//!
//! Rows are indexed by [`TeacherLevel`](crate::models::TeacherLevel) ordinal.
//! The duplicated rows (levels 1-2 fixed salary, levels 5-8 personal rates)
//! are duplicated in the published pay scale as well.

/// `(base, post)` per level, columns: high school, primary/middle.
pub(crate) const STANDARD_FIXED_SALARY: [[(u32, u32); 2]; 8] = [
    [(2100, 200), (2100, 0)],
    [(2100, 200), (2100, 0)],
    [(2100, 500), (2100, 200)],
    [(2100, 700), (2100, 400)],
    [(2100, 900), (2100, 700)],
    [(2100, 1200), (2100, 900)],
    [(2100, 1500), (2100, 1200)],
    [(2100, 1900), (2100, 1500)],
];

/// Per-class rate per level, columns: grade 1-2 through high 3.
pub(crate) const STANDARD_PERSONAL_RATES: [[u32; 9]; 8] = [
    [90, 100, 110, 120, 130, 140, 150, 160, 170],
    [100, 110, 120, 130, 140, 150, 160, 170, 180],
    [110, 120, 130, 140, 150, 160, 170, 180, 190],
    [120, 130, 140, 150, 160, 170, 180, 190, 200],
    [130, 140, 150, 160, 170, 180, 190, 200, 210],
    [130, 140, 150, 160, 170, 180, 190, 200, 210],
    [130, 140, 150, 160, 170, 180, 190, 200, 210],
    [130, 140, 150, 160, 170, 180, 190, 200, 210],
];
