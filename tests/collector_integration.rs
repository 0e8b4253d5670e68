//! Integration tests for collecting a team's month against a wiremock GitHub

use chrono::NaiveDate;
use contrib_calendar::calendar::{Collector, Contribution, FetchError};
use contrib_calendar::config::Settings;
use core::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate, Times};

const CALENDAR_FIXTURE: &str = include_str!("fixtures/calendar-2024.html");

fn march() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn devs(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

fn collector(server: &MockServer, dev_limit: usize) -> Collector {
    Collector::from_settings(&Settings {
        base_url: server.uri(),
        request_timeout: Duration::from_secs(5),
        dev_limit,
        ..Settings::default()
    })
    .unwrap()
}

async fn mount(server: &MockServer, developer: &str, response: ResponseTemplate, expected_requests: impl Into<Times>) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{developer}/contributions")))
        .respond_with(response)
        .expect(expected_requests)
        .mount(server)
        .await;
}

fn calendar() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(CALENDAR_FIXTURE)
}

#[tokio::test]
async fn test_month_report_for_whole_team() {
    let server = MockServer::start().await;
    mount(&server, "alice", calendar(), 1).await;
    mount(&server, "Bob", calendar(), 1).await;

    let collector = collector(&server, 10);
    let report = collector.month_report(march(), &devs(&["alice", "Bob"]), false).await.unwrap();

    assert_eq!(report.date, march());
    assert_eq!(report.contributions.keys().map(String::as_str).collect::<Vec<_>>(), vec!["Bob", "alice"]);
    assert_eq!(report.contributions["Bob"][&5], Contribution::new(12, 4));
    assert_eq!(report.contributions["alice"], report.contributions["Bob"]);
}

#[tokio::test]
async fn test_one_failure_fails_the_whole_report() {
    let server = MockServer::start().await;
    mount(&server, "alice", calendar(), 0..=1).await;
    mount(&server, "bob", ResponseTemplate::new(500), 1).await;

    let collector = collector(&server, 10);
    let err = collector
        .month_report(march(), &devs(&["alice", "bob"]), false)
        .await
        .unwrap_err();

    match err {
        FetchError::HttpStatus { developer, status } => {
            assert_eq!(developer, "bob");
            assert_eq!(status.as_u16(), 500);
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_follows_list_order_not_finish_order() {
    let server = MockServer::start().await;
    mount(
        &server,
        "alice",
        ResponseTemplate::new(500).set_delay(Duration::from_millis(300)),
        1,
    )
    .await;
    mount(&server, "bob", ResponseTemplate::new(404), 1).await;

    let collector = collector(&server, 10);
    let err = collector
        .month_report(march(), &devs(&["alice", "bob"]), false)
        .await
        .unwrap_err();

    match err {
        FetchError::HttpStatus { developer, status } => {
            assert_eq!(developer, "alice");
            assert_eq!(status.as_u16(), 500);
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_lists_make_no_requests() {
    let server = MockServer::start().await;
    mount(&server, "alice", calendar(), 0).await;
    mount(&server, "bob", calendar(), 0).await;
    mount(&server, "carol", calendar(), 0).await;

    let collector = collector(&server, 2);

    let err = collector.month_report(march(), &[], false).await.unwrap_err();
    assert!(matches!(err, FetchError::EmptyDeveloperList));
    assert_eq!(err.to_string(), "Empty devs list");

    let err = collector
        .month_report(march(), &devs(&["alice", "bob", "carol"]), false)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::DeveloperLimitExceeded { limit: 2 }));
    assert_eq!(err.to_string(), "Devs list exceeds limit: 2");

    let err = collector
        .month_report(march(), &devs(&["alice", "carol/../bob"]), false)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::InvalidDeveloper { ref developer } if developer == "carol/../bob"));
}

#[tokio::test]
async fn test_repeat_report_uses_cache_unless_forced() {
    let server = MockServer::start().await;
    mount(&server, "alice", calendar(), 2).await;

    let collector = collector(&server, 10);
    let team = devs(&["alice"]);

    let first = collector.month_report(march(), &team, false).await.unwrap();
    let cached = collector.month_report(march(), &team, false).await.unwrap();
    let forced = collector.month_report(march(), &team, true).await.unwrap();

    assert_eq!(first, cached);
    assert_eq!(first, forced);
}
