//! Interpretation of the loosely-typed request parameters: the date and the developer list.

use chrono::NaiveDate;

/// Date format accepted in requests and used in responses.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Entry in a developer list that stands for the configured roster.
pub const ROSTER_SENTINEL: &str = "*";

/// Interpret a requested date relative to `today`.
///
/// `"today"` in any case and anything that is not a `YYYY-MM-DD` date both mean `today`.
#[must_use]
pub fn parse_requested_date(input: &str, today: NaiveDate) -> NaiveDate {
    let input = input.trim();
    if input.eq_ignore_ascii_case("today") {
        return today;
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).unwrap_or_else(|_| {
        log::debug!("Unrecognized date '{input}', using {today}");
        today
    })
}

/// Split a comma-separated list of developers, trimming each entry and dropping blank ones.
#[must_use]
pub fn split_developers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|dev| !dev.is_empty())
        .map(str::to_string)
        .collect()
}

/// Like [`split_developers`], with each [`ROSTER_SENTINEL`] entry replaced by `roster`.
#[must_use]
pub fn resolve_developer_list(raw: &str, roster: &[String]) -> Vec<String> {
    split_developers(raw)
        .into_iter()
        .flat_map(|dev| {
            if dev == ROSTER_SENTINEL {
                roster.to_vec()
            } else {
                vec![dev]
            }
        })
        .collect()
}

/// Read a boolean query flag the way HTML forms and most web frameworks write one.
///
/// Accepts `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`, `y`/`n` and `t`/`f`, in any case.
#[must_use]
pub fn parse_flag(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "y" | "t" => Some(true),
        "false" | "0" | "no" | "off" | "n" | "f" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn today_keyword_in_any_case() {
        assert_eq!(parse_requested_date("today", today()), today());
        assert_eq!(parse_requested_date("TODAY", today()), today());
        assert_eq!(parse_requested_date(" Today ", today()), today());
    }

    #[test]
    fn iso_date_is_parsed() {
        assert_eq!(
            parse_requested_date("2023-02-28", today()),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
    }

    #[test]
    fn unparseable_date_falls_back_to_today() {
        assert_eq!(parse_requested_date("", today()), today());
        assert_eq!(parse_requested_date("yesterday", today()), today());
        assert_eq!(parse_requested_date("2023-02-30", today()), today());
        assert_eq!(parse_requested_date("28/02/2023", today()), today());
    }

    #[test]
    fn split_trims_and_drops_blanks() {
        assert_eq!(split_developers(" alice , bob,carol "), vec!["alice", "bob", "carol"]);
        assert_eq!(split_developers("alice,,bob,"), vec!["alice", "bob"]);
        assert!(split_developers("").is_empty());
        assert!(split_developers("  ").is_empty());
    }

    #[test]
    fn split_keeps_duplicates_and_order() {
        assert_eq!(split_developers("bob,alice,bob"), vec!["bob", "alice", "bob"]);
    }

    #[test]
    fn sentinel_expands_to_roster() {
        let roster = vec!["alice".to_string(), "bob".to_string()];

        assert_eq!(resolve_developer_list("*", &roster), roster);
        assert_eq!(resolve_developer_list("carol, *", &roster), vec!["carol", "alice", "bob"]);
        assert!(resolve_developer_list("*", &[]).is_empty());
    }

    #[test]
    fn plain_list_ignores_roster() {
        let roster = vec!["alice".to_string()];
        assert_eq!(resolve_developer_list("Bob", &roster), vec!["Bob"]);
        assert!(resolve_developer_list("", &roster).is_empty());
    }

    #[test]
    fn flags_accept_common_spellings() {
        for raw in ["true", "TRUE", "1", "yes", "on", "Y", "t", " true "] {
            assert_eq!(parse_flag(raw), Some(true), "{raw}");
        }
        for raw in ["false", "False", "0", "no", "OFF", "n", "f"] {
            assert_eq!(parse_flag(raw), Some(false), "{raw}");
        }
        for raw in ["", "2", "maybe", "truthy"] {
            assert_eq!(parse_flag(raw), None, "{raw}");
        }
    }
}
