//! Tests for utility functions

use std::time::Duration;

use batch_pacer::util::{display_local, utc_after, DISPLAY_FORMAT};
use chrono::{Local, NaiveDateTime, Timelike};

#[test]
fn test_display_local_parses_back() {
    let at = utc_after(Duration::from_secs(3_600));
    let shown = display_local(at);
    let parsed = NaiveDateTime::parse_from_str(&shown, DISPLAY_FORMAT).unwrap();
    let expected = at.with_timezone(&Local).naive_local().with_nanosecond(0).unwrap();
    assert_eq!(parsed, expected);
}
