use std::time::{Duration, Instant};

use navhub_core::scroll_spy::{classify, ScrollSpy, Section};

fn two_sections() -> Vec<Section> {
    vec![
        Section::new("s1", 0.0, 500.0),
        Section::new("s2", 500.0, 1000.0),
    ]
}

#[test]
fn near_top_activates_first_section() {
    let sections = two_sections();
    let active = classify(&sections, 50.0, 900.0, None);
    assert_eq!(active, Some("s1"));
}

#[test]
fn band_rule_picks_first_matching_section() {
    let sections = two_sections();
    // 600 >= 500 - 300 and 600 < 1000 - 100, while s1's band ends at 400.
    let active = classify(&sections, 600.0, 900.0, None);
    assert_eq!(active, Some("s2"));
}

#[test]
fn first_match_wins_when_bands_overlap() {
    let sections = two_sections();
    // 250 sits inside both bands with a 900px viewport; s1 is checked first.
    let active = classify(&sections, 250.0, 900.0, None);
    assert_eq!(active, Some("s1"));
}

#[test]
fn no_match_retains_previous_active() {
    let sections = two_sections();
    // Far past every section's band.
    let active = classify(&sections, 5000.0, 900.0, Some("s2"));
    assert_eq!(active, Some("s2"));
}

#[test]
fn no_match_without_previous_stays_none() {
    let sections = two_sections();
    assert_eq!(classify(&sections, 5000.0, 900.0, None), None);
}

#[test]
fn empty_section_list_keeps_previous() {
    assert_eq!(classify(&[], 50.0, 900.0, Some("s1")), Some("s1"));
    assert_eq!(classify(&[], 50.0, 900.0, None), None);
}

#[test]
fn tracker_throttles_scroll_events_to_100ms() {
    let mut spy = ScrollSpy::new(two_sections());
    let start = Instant::now();

    assert_eq!(spy.on_scroll(50.0, 900.0, start), Some("s1"));
    // inside the throttle window: the event is dropped, active unchanged
    assert_eq!(
        spy.on_scroll(600.0, 900.0, start + Duration::from_millis(40)),
        Some("s1")
    );
    // past the window: recomputed
    assert_eq!(
        spy.on_scroll(600.0, 900.0, start + Duration::from_millis(120)),
        Some("s2")
    );
}

#[test]
fn section_change_bypasses_the_throttle() {
    let mut spy = ScrollSpy::new(two_sections());
    let start = Instant::now();
    assert_eq!(spy.on_scroll(50.0, 900.0, start), Some("s1"));

    let replaced = vec![
        Section::new("a", 0.0, 400.0),
        Section::new("b", 400.0, 900.0),
    ];
    // immediately after the scroll event, no waiting required
    assert_eq!(spy.set_sections(replaced, 50.0, 900.0), Some("a"));
    assert_eq!(spy.active(), Some("a"));
}

#[test]
fn tracker_retains_active_section_across_dead_zones() {
    let mut spy = ScrollSpy::new(two_sections());
    let start = Instant::now();
    assert_eq!(spy.on_scroll(600.0, 900.0, start), Some("s2"));
    assert_eq!(
        spy.on_scroll(5000.0, 900.0, start + Duration::from_millis(200)),
        Some("s2")
    );
}
