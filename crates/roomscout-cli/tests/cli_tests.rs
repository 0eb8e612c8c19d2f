//! Integration tests for the `roomscout` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the `free` and
//! `locations` subcommands through the actual binary against directory
//! dumps in `tests/fixtures/`.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn roomscout() -> Command {
    Command::cargo_bin("roomscout").unwrap()
}

fn free_args(time: &str) -> Vec<String> {
    vec![
        "free".into(),
        "--rooms".into(),
        fixture("rooms.json"),
        "--allocations".into(),
        fixture("allocations.json"),
        "--date".into(),
        "2026-08-06".into(),
        "--time".into(),
        time.into(),
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// free subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn free_reports_unoccupied_rooms_only() {
    // At 10:00 the seminar room is booked (09:00–11:00) and the foyer is
    // denylisted; the lecture hall and the project room remain.
    roomscout()
        .args(free_args("10:00"))
        .assert()
        .success()
        .stdout(predicate::str::contains("F21/02.001"))
        .stdout(predicate::str::contains("WE5/03.004"))
        .stdout(predicate::str::contains("F21/01.009").not())
        .stdout(predicate::str::contains("Foyer").not());
}

#[test]
fn free_output_is_sorted_and_annotated() {
    let output = roomscout().args(free_args("12:00")).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let entries: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    let shorts: Vec<&str> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["short"].as_str().unwrap())
        .collect();
    assert_eq!(shorts, ["F21/01.009", "F21/02.001", "WE5/03.004"]);

    // The lecture hall's next booking starts at 14:00; the seminar room has
    // nothing upcoming, so the field is absent.
    assert_eq!(entries[1]["next_allocation"], "14:00");
    assert!(entries[0].get("next_allocation").is_none());
}

#[test]
fn free_short_prints_labels_only() {
    let mut args = free_args("12:00");
    args.push("--short".into());

    roomscout()
        .args(args)
        .assert()
        .success()
        .stdout("F21/01.009\nF21/02.001\nWE5/03.004\n");
}

#[test]
fn free_end_of_day_booking_blocks_the_last_minute() {
    // The project room is booked 20:00–24:00.
    let mut args = free_args("23:59");
    args.push("--short".into());

    roomscout()
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("WE5/03.004").not());
}

#[test]
fn free_min_size_filters_small_rooms() {
    let mut args = free_args("12:00");
    args.extend(["--min-size".into(), "30".into(), "--short".into()]);

    roomscout()
        .args(args)
        .assert()
        .success()
        .stdout("F21/02.001\n");
}

#[test]
fn free_location_scopes_to_campus_buildings() {
    let mut args = free_args("12:00");
    args.extend(["--location".into(), "Feki".into(), "--short".into()]);

    roomscout()
        .args(args)
        .assert()
        .success()
        .stdout("F21/01.009\nF21/02.001\n");
}

#[test]
fn free_building_key_scopes_to_one_building() {
    let mut args = free_args("12:00");
    args.extend(["--building-key".into(), "WE5".into(), "--short".into()]);

    roomscout()
        .args(args)
        .assert()
        .success()
        .stdout("WE5/03.004\n");
}

#[test]
fn free_folds_in_the_exam_schedule() {
    // The lecture hall hosts an exam 10:00–11:30 on the fixture date.
    let mut args = free_args("10:30");
    args.extend(["--exams".into(), fixture("exams.json"), "--short".into()]);

    roomscout()
        .args(args)
        .assert()
        .success()
        .stdout("WE5/03.004\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// Error handling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn free_rejects_an_unknown_location() {
    let mut args = free_args("12:00");
    args.extend(["--location".into(), "Atlantis".into()]);

    roomscout()
        .args(args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown location"));
}

#[test]
fn free_rejects_a_malformed_time() {
    roomscout()
        .args(free_args("25:99"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid time"));
}

#[test]
fn free_rejects_a_malformed_date() {
    let mut args = free_args("12:00");
    let date_at = args.iter().position(|arg| arg == "2026-08-06").unwrap();
    args[date_at] = "06.08.2026".into();

    roomscout()
        .args(args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn free_reports_a_missing_dump_as_upstream_failure() {
    let mut args = free_args("12:00");
    let rooms_at = args.iter().position(|arg| arg.ends_with("rooms.json")).unwrap();
    args[rooms_at] = fixture("no-such-file.json");

    roomscout()
        .args(args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("upstream rooms request failed"));
}

// ─────────────────────────────────────────────────────────────────────────────
// locations subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn locations_lists_the_known_names() {
    roomscout()
        .arg("locations")
        .assert()
        .success()
        .stdout("Erba\nFeki\nMarkushaus\nInnenstadt\n");
}
