//! Unit tests for the Markdown renderer.

use super::helpers::lisbon_request;
use crate::render::write_markdown;
use chrono::{NaiveDate, TimeZone, Utc};
use itinerant_core::test_support::poi;
use itinerant_core::{DayPlan, Itinerary, Period, TimeWindow, Visit};
use rstest::{fixture, rstest};

#[fixture]
fn itinerary() -> Itinerary {
    let start = NaiveDate::from_ymd_opt(2025, 5, 5).expect("valid date");
    let request = lisbon_request().with_start_date(start);
    let days = vec![
        DayPlan {
            day_number: 1,
            title: "Arrival and First Impressions".to_owned(),
            city: Some("Lisbon".to_owned()),
            time_slots: vec![
                TimeWindow::new(
                    Period::Morning,
                    vec![Visit::from_poi(&poi("Tile Museum", "museum"))],
                ),
                TimeWindow::new(Period::Evening, Vec::new()),
            ],
        },
        DayPlan {
            day_number: 2,
            title: "Historic Heart".to_owned(),
            city: None,
            time_slots: Vec::new(),
        },
    ];
    let now = Utc
        .with_ymd_and_hms(2025, 5, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp");
    Itinerary::aggregate(&request, days, now)
}

fn render(itinerary: &Itinerary) -> String {
    let mut buffer = Vec::new();
    write_markdown(&mut buffer, itinerary).expect("render markdown");
    String::from_utf8(buffer).expect("markdown utf-8")
}

#[rstest]
fn headings_follow_days_and_windows(itinerary: Itinerary) {
    let markdown = render(&itinerary);
    assert!(markdown.starts_with("# Lisbon\n\n2 days for 2 travellers."));
    assert!(markdown.contains("## Day 1: Arrival and First Impressions (Lisbon)\n"));
    assert!(markdown.contains("## Day 2: Historic Heart\n"));
    assert!(markdown.contains("### Morning (09:00-12:00)\n"));
}

#[rstest]
fn days_show_calendar_dates(itinerary: Itinerary) {
    let markdown = render(&itinerary);
    assert!(markdown.contains("Monday 5 May 2025"));
    assert!(markdown.contains("Tuesday 6 May 2025"));
}

#[rstest]
fn visits_are_listed_with_details(itinerary: Itinerary) {
    let markdown = render(&itinerary);
    assert!(markdown.contains("- [ ] **Tile Museum** (museum, "));
}

#[rstest]
fn completed_visits_are_checked(mut itinerary: Itinerary) {
    assert!(itinerary.mark_completed(1, Period::Morning, 0));
    let markdown = render(&itinerary);
    assert!(markdown.contains("- [x] **Tile Museum**"));
}

#[rstest]
fn empty_windows_say_so(itinerary: Itinerary) {
    let markdown = render(&itinerary);
    assert!(markdown.contains("### Evening (19:00-22:00)\n\n_No affordable visits._\n"));
}
