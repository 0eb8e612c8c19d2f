//! Tests for wall-clock parsing, ordering, and end-of-day canonicalization.

use roomscout_engine::{ScoutError, WallTime, END_OF_DAY};

fn t(raw: &str) -> WallTime {
    WallTime::parse(raw).unwrap()
}

// ── Parsing ─────────────────────────────────────────────────────────────────

#[test]
fn parses_ordinary_times() {
    assert_eq!(t("09:00").hour(), 9);
    assert_eq!(t("09:00").minute(), 0);
    assert_eq!(t("23:59").hour(), 23);
    assert_eq!(t("23:59").minute(), 59);
    assert_eq!(t("00:00").hour(), 0);
}

#[test]
fn parses_single_digit_hour() {
    assert_eq!(t("9:05"), t("09:05"));
}

#[test]
fn parses_end_of_day() {
    assert_eq!(t("24:00"), END_OF_DAY);
    assert_eq!(t("24:00").hour(), 24);
}

#[test]
fn rejects_malformed_input() {
    for raw in [
        "", "10", "10:", ":30", "10:5", "10:600", "24:01", "25:00", "10:60", "ab:cd", "-1:00",
        "100:00", "10.30",
    ] {
        let err = WallTime::parse(raw).unwrap_err();
        assert!(
            matches!(err, ScoutError::InvalidTime(_)),
            "expected InvalidTime for {raw:?}, got {err:?}"
        );
    }
}

// ── Ordering and display ────────────────────────────────────────────────────

#[test]
fn orders_by_hour_then_minute() {
    assert!(t("09:59") < t("10:00"));
    assert!(t("10:00") < t("10:01"));
    assert!(t("23:59") < t("24:00"));
    assert_eq!(t("10:30"), t("10:30"));
}

#[test]
fn displays_zero_padded() {
    assert_eq!(t("9:05").to_string(), "09:05");
    assert_eq!(t("24:00").to_string(), "24:00");
}

// ── End-of-day canonicalization ─────────────────────────────────────────────

#[test]
fn hour_zero_end_becomes_end_of_day() {
    // A booking "ending" at midnight compares with end hour 24, never 0.
    assert_eq!(t("00:00").as_interval_end(), END_OF_DAY);
    assert_eq!(t("00:30").as_interval_end(), END_OF_DAY);
}

#[test]
fn nonzero_hour_end_is_unchanged() {
    assert_eq!(t("01:00").as_interval_end(), t("01:00"));
    assert_eq!(t("12:15").as_interval_end(), t("12:15"));
    assert_eq!(t("24:00").as_interval_end(), END_OF_DAY);
}

// ── Minute arithmetic ───────────────────────────────────────────────────────

#[test]
fn total_minutes_roundtrip() {
    for raw in ["00:00", "07:45", "12:00", "23:59", "24:00"] {
        let time = t(raw);
        assert_eq!(WallTime::from_total_minutes(time.total_minutes()), time);
    }
}

#[test]
fn from_total_minutes_clamps_past_midnight() {
    assert_eq!(WallTime::from_total_minutes(24 * 60), END_OF_DAY);
    assert_eq!(WallTime::from_total_minutes(24 * 60 + 30), END_OF_DAY);
}

// ── Serde ───────────────────────────────────────────────────────────────────

#[test]
fn serializes_as_hhmm_string() {
    assert_eq!(serde_json::to_string(&t("9:05")).unwrap(), r#""09:05""#);
}

#[test]
fn deserializes_from_hhmm_string() {
    let time: WallTime = serde_json::from_str(r#""14:30""#).unwrap();
    assert_eq!(time, t("14:30"));
    assert!(serde_json::from_str::<WallTime>(r#""14:61""#).is_err());
}
