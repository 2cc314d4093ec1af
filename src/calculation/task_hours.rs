//! Task-hour quota deduction.
//!
//! The fixed salary already pays for a monthly quota of teaching hours. The
//! class income earned in those hours is therefore taken back out of
//! variable pay, drawing on the cheapest classes first:
//!
//! 1. one-on-one classes, by ascending rate;
//! 2. group classes, by ascending base rate (headcount bonus excluded);
//! 3. only when one-on-one plus group hours fall short of the quota:
//!    converted trial lessons by ascending base rate (trial bonus excluded),
//!    then unconverted trial lessons at the flat registration fee.
//!
//! Ties keep list order.

use rust_decimal::Decimal;

use crate::config::HOURS_PER_CLASS;

/// A block of hours taught at one per-class rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeductionItem {
    /// The per-class amount withheld for each class absorbed by the quota.
    pub rate: Decimal,
    /// The hours taught.
    pub hours: u64,
}

/// Running state of the quota while deduction items are consumed.
///
/// # Example
///
/// ```
/// use teacher_pay::calculation::{DeductionItem, TaskHourQuota};
/// use rust_decimal::Decimal;
///
/// let mut quota = TaskHourQuota::new(30);
/// quota.absorb_cheapest_first(vec![
///     DeductionItem { rate: Decimal::from(150), hours: 40 },
///     DeductionItem { rate: Decimal::from(90), hours: 20 },
/// ]);
///
/// // 20h at 90 (10 classes), then 10h at 150 (5 classes).
/// assert_eq!(quota.deduction(), Decimal::from(900 + 750));
/// assert!(quota.is_exhausted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskHourQuota {
    quota: u64,
    remaining: u64,
    deduction: Decimal,
}

impl TaskHourQuota {
    /// Starts a quota of `hours` with nothing deducted.
    pub fn new(hours: u32) -> Self {
        Self {
            quota: u64::from(hours),
            remaining: u64::from(hours),
            deduction: Decimal::ZERO,
        }
    }

    /// Consumes items in the given order until the quota runs out.
    pub fn absorb(&mut self, items: &[DeductionItem]) {
        let hours_per_class = Decimal::from(HOURS_PER_CLASS);
        for item in items {
            if self.is_exhausted() {
                break;
            }
            let deducted_hours = item.hours.min(self.remaining);
            self.deduction += Decimal::from(deducted_hours) / hours_per_class * item.rate;
            self.remaining -= deducted_hours;
        }
    }

    /// Sorts items by ascending rate (stable) and consumes them.
    pub fn absorb_cheapest_first(&mut self, mut items: Vec<DeductionItem>) {
        items.sort_by(|a, b| a.rate.cmp(&b.rate));
        self.absorb(&items);
    }

    /// Returns true once every quota hour has been covered.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Quota hours not yet covered.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Quota hours covered so far.
    pub fn hours_filled(&self) -> u64 {
        self.quota - self.remaining
    }

    /// Total amount withheld so far.
    pub fn deduction(&self) -> Decimal {
        self.deduction
    }
}

/// Line items grouped by deduction priority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeductionSources {
    /// One-on-one classes, one item per grade taught.
    pub personal: Vec<DeductionItem>,
    /// Group classes at their base rate, one item per group.
    pub group: Vec<DeductionItem>,
    /// Converted trial lessons at their base rate, one item per record.
    pub trial_success: Vec<DeductionItem>,
    /// All unconverted trial lessons at the registration fee.
    pub trial_fail: DeductionItem,
}

/// The outcome of the task-hour deduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskHourDeduction {
    /// Amount withheld from variable pay.
    pub amount: Decimal,
    /// Quota hours covered by classes.
    pub hours_filled: u64,
    /// Whether trial lessons were eligible to cover the quota.
    pub trial_hours_counted: bool,
}

/// Runs the deduction over all sources in priority order.
///
/// `regular_hours` is the one-on-one plus group hour total; trial lessons
/// are only drawn on when it is below `quota_hours`.
pub fn apply_task_hour_deduction(
    quota_hours: u32,
    sources: DeductionSources,
    regular_hours: u64,
) -> TaskHourDeduction {
    let mut quota = TaskHourQuota::new(quota_hours);

    quota.absorb_cheapest_first(sources.personal);
    quota.absorb_cheapest_first(sources.group);

    let trial_hours_counted = regular_hours < u64::from(quota_hours);
    if trial_hours_counted {
        quota.absorb_cheapest_first(sources.trial_success);
        quota.absorb(&[sources.trial_fail]);
    }

    tracing::debug!(
        quota_hours,
        regular_hours,
        trial_hours_counted,
        hours_filled = quota.hours_filled(),
        deduction = %quota.deduction(),
        "Applied task-hour deduction"
    );

    TaskHourDeduction {
        amount: quota.deduction(),
        hours_filled: quota.hours_filled(),
        trial_hours_counted,
    }
}
