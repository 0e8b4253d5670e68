//! An in-memory [`CalendarSource`] for unit tests.

use super::{CalendarSource, FetchError};
use chrono::NaiveDate;
use core::fmt::Write;
use core::time::Duration;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves canned pages; unknown developers get a 404.
#[derive(Debug, Default)]
pub struct StubSource {
    pages: HashMap<String, String>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<(String, NaiveDate)>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, developer: &str, html: impl Into<String>) -> Self {
        let _ = self.pages.insert(developer.to_string(), html.into());
        self
    }

    pub fn with_delay(mut self, developer: &str, delay: Duration) -> Self {
        let _ = self.delays.insert(developer.to_string(), delay);
        self
    }

    pub fn calls(&self) -> Vec<(String, NaiveDate)> {
        self.calls.lock().expect("lock not poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("lock not poisoned").len()
    }
}

impl CalendarSource for StubSource {
    async fn fetch_calendar(&self, developer: &str, from: NaiveDate) -> Result<String, FetchError> {
        self.calls.lock().expect("lock not poisoned").push((developer.to_string(), from));

        if let Some(delay) = self.delays.get(developer) {
            tokio::time::sleep(*delay).await;
        }

        self.pages.get(developer).cloned().ok_or_else(|| FetchError::HttpStatus {
            developer: developer.to_string(),
            status: StatusCode::NOT_FOUND,
        })
    }
}

/// Build a minimal calendar page from `(date, count, level)` triples.
pub fn calendar_page(days: &[(&str, u32, u8)]) -> String {
    let mut cells = String::new();
    let mut tips = String::new();

    for (i, (date, count, level)) in days.iter().enumerate() {
        let id = format!("contribution-day-component-{i}");
        let _ = write!(
            cells,
            r#"<td data-date="{date}" id="{id}" data-level="{level}" role="gridcell" class="ContributionCalendar-day"></td>"#
        );
        let text = if *count == 0 {
            "No contributions on this day.".to_string()
        } else {
            format!("{count} contributions on this day.")
        };
        let _ = write!(tips, r#"<tool-tip for="{id}" popover="manual">{text}</tool-tip>"#);
    }

    format!("<html><body><table><tbody><tr>{cells}</tr></tbody></table>{tips}</body></html>")
}
