//! Extraction of day-level contributions from a GitHub contribution-calendar page.
//!
//! The calendar is a table of day cells. Each cell carries its ISO date in `data-date` and its
//! shading bucket in `data-level`; the human-readable count lives in a separate `<tool-tip>`
//! element whose `for` attribute names the cell's `id`. Tooltips are indexed first and then
//! resolved per cell.
//!
//! Cells without a readable date or level are skipped; a missing or unreadable count reads as
//! zero. A page with no recognizable cells simply yields an empty month.

use super::{Contribution, MonthContributions};
use chrono::{Datelike, Months, NaiveDate};
use scraper::{Html, Selector};
use std::collections::HashMap;
use std::sync::LazyLock;

const LOG_TARGET: &str = "      html";

static DAY_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td.ContributionCalendar-day[data-date]").expect("invalid selector"));

static TOOLTIP: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tool-tip[for]").expect("invalid selector"));

/// First and last day of a month, or `None` if `month` is not in `1..=12`.
#[must_use]
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some((first, last))
}

/// Scrape the contributions of one month out of a calendar page.
#[must_use]
pub fn scrape_month(html: &str, year: i32, month: u32) -> MonthContributions {
    let mut contributions = MonthContributions::new();

    let Some((first, last)) = month_bounds(year, month) else {
        log::debug!(target: LOG_TARGET, "Ignoring request for invalid month {year}-{month}");
        return contributions;
    };

    let document = Html::parse_document(html);

    let tooltips: HashMap<&str, String> = document
        .select(&TOOLTIP)
        .filter_map(|tip| Some((tip.value().attr("for")?, tip.text().collect())))
        .collect();

    for cell in document.select(&DAY_CELL) {
        let cell = cell.value();

        let Some(date) = cell
            .attr("data-date")
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
        else {
            continue;
        };

        if date < first || date > last {
            continue;
        }

        // Level comes from the cell itself, so a cell without a readable one is not a day cell
        // we understand. Only the count, which lives in a separate tooltip, falls back to zero.
        let Some(level) = cell.attr("data-level").and_then(|s| s.trim().parse::<u8>().ok()) else {
            continue;
        };

        let count = cell
            .attr("id")
            .and_then(|id| tooltips.get(id))
            .map_or(0, |text| parse_count(text));

        let _ = contributions.insert(date.day(), Contribution::new(count, level));
    }

    log::debug!(target: LOG_TARGET, "Scraped {} day(s) for {year}-{month:02}", contributions.len());

    contributions
}

/// Read the count from tooltip text such as `"5 contributions on May 2nd."`.
///
/// `"No contributions ..."` and anything else without a leading number reads as zero.
#[must_use]
pub fn parse_count(text: &str) -> u32 {
    text.split_whitespace()
        .next()
        .and_then(|token| token.replace(',', "").parse().ok())
        .unwrap_or(0)
}
