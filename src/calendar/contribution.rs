use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Contributions for one month, keyed by day of month.
///
/// Serialized as a JSON object whose keys are the unpadded decimal day (`"1"` .. `"31"`).
pub type MonthContributions = BTreeMap<u32, Contribution>;

/// Contributions for several developers, keyed by the identifier the caller supplied.
pub type DevContributions = BTreeMap<String, MonthContributions>;

/// Activity recorded for a single calendar day.
///
/// Serialized as a `[count, level]` pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u32, u8)", into = "(u32, u8)")]
pub struct Contribution {
    count: u32,
    level: u8,
}

impl Contribution {
    #[must_use]
    pub const fn new(count: u32, level: u8) -> Self {
        Self { count, level }
    }

    /// Number of contributions made that day.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Intensity bucket GitHub uses to shade the cell (0 is empty, 4 is the darkest).
    #[must_use]
    pub const fn level(&self) -> u8 {
        self.level
    }
}

impl From<(u32, u8)> for Contribution {
    fn from((count, level): (u32, u8)) -> Self {
        Self::new(count, level)
    }
}

impl From<Contribution> for (u32, u8) {
    fn from(c: Contribution) -> Self {
        (c.count, c.level)
    }
}

/// Sum of all contribution counts in a month.
#[must_use]
pub fn month_total(month: &MonthContributions) -> u64 {
    month.values().map(|c| u64::from(c.count)).sum()
}

/// The result of aggregating a team's contributions for the month containing `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthReport {
    pub date: NaiveDate,
    #[serde(rename = "contribs")]
    pub contributions: DevContributions,
}
