//! Basic CLI E2E tests.
//!
//! Tests run the built binary against a throwaway data directory.

mod common;

use common::*;

#[test]
fn test_entry_add_and_show() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(
        dir.path(),
        &["entry", "add", "--date", "2024-03-01", "--pain", "5", "--notes", "ok"],
    );

    let out = run_cli_success(dir.path(), &["--json", "entry", "show", "2024-03-01"]);
    let json = parse_json(&out);
    assert_eq!(json["pain"], 5);
    assert_eq!(json["mood"], 3);
    assert_eq!(json["notes"], "ok");
}

#[test]
fn test_entry_add_clamps_and_warns() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, stderr, code) = run_cli(
        dir.path(),
        &["--json", "entry", "add", "--date", "2024-03-01", "--pain", "42", "--mood", "-3"],
    );
    assert_eq!(code, 0);
    assert_contains(&stderr, "pain");
    let json = parse_json(&stdout);
    assert_eq!(json["pain"], 10);
    assert_eq!(json["mood"], 1);
}

#[test]
fn test_entry_rejects_bad_date() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, _) = run_cli_failure(dir.path(), &["entry", "add", "--date", "03/01/2024"]);
    assert_contains(&stderr, "Invalid date");
}

#[test]
fn test_entry_delete_missing_is_fine() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli_success(dir.path(), &["entry", "delete", "2024-01-01"]);
    assert_contains(&out, "No entry");
}

#[test]
fn test_entry_list_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["entry", "add", "--date", "2024-03-01"]);
    run_cli_success(dir.path(), &["entry", "add", "--date", "2024-03-03"]);
    run_cli_success(dir.path(), &["entry", "add", "--date", "2024-03-02"]);

    let json = parse_json(&run_cli_success(dir.path(), &["--json", "entry", "list"]));
    let dates: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(dates, vec!["2024-03-03", "2024-03-02", "2024-03-01"]);
}

#[test]
fn test_stats_average() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(
        dir.path(),
        &["entry", "add", "--date", "2024-03-01", "--pain", "4", "--fatigue", "6", "--sleep", "7", "--stress", "2"],
    );
    run_cli_success(
        dir.path(),
        &["entry", "add", "--date", "2024-03-02", "--pain", "6", "--fatigue", "4", "--sleep", "5", "--stress", "4"],
    );

    let json = parse_json(&run_cli_success(dir.path(), &["--json", "stats"]));
    assert_eq!(json["pain"], 5.0);
    assert_eq!(json["sleep"], 6.0);
    assert_eq!(json["stress"], 3.0);
}

#[test]
fn test_spoons_flow() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["spoons", "use", "3"]);
    let json = parse_json(&run_cli_success(dir.path(), &["--json", "spoons", "use", "9"]));
    assert_eq!(json["used"], 10);
    assert_eq!(json["remaining"], 0);

    let json = parse_json(&run_cli_success(dir.path(), &["--json", "spoons", "capacity", "99"]));
    assert_eq!(json["total"], 30);

    let json = parse_json(&run_cli_success(dir.path(), &["--json", "spoons", "reset"]));
    assert_eq!(json["used"], 0);
}

#[test]
fn test_exercise_complete_spends_spoons() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["exercise", "complete", "stretch-5"]);
    let json = parse_json(&run_cli_success(dir.path(), &["--json", "spoons", "show"]));
    assert_eq!(json["used"], 1);

    run_cli_failure(dir.path(), &["exercise", "complete", "marathon"]);
}

#[test]
fn test_export_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(
        dir.path(),
        &[
            "entry", "add", "--date", "2024-03-01", "--pain", "5", "--fatigue", "3", "--mood", "4",
            "--sleep", "8", "--stress", "2", "--notes", "ok",
        ],
    );
    let out = run_cli_success(dir.path(), &["export", "--stdout"]);
    assert_eq!(
        out.trim_end(),
        "date,pain,fatigue,mood,sleep,stress,notes\n2024-03-01,5,3,4,8,2,ok"
    );
}

#[test]
fn test_export_writes_dated_file() {
    let dir = tempfile::tempdir().unwrap();
    let json = parse_json(&run_cli_success(dir.path(), &["--json", "export"]));
    let path = json["path"].as_str().unwrap();
    assert!(path.starts_with("fibro-balance-entries-"));
    assert!(dir.path().join(path).exists());
}

#[test]
fn test_reset_requires_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["entry", "add", "--date", "2024-03-01"]);

    let (out, _, code) = run_cli_with_stdin(dir.path(), &["reset"], "n\n");
    assert_eq!(code, 0);
    assert_contains(&out, "Nothing changed");
    let json = parse_json(&run_cli_success(dir.path(), &["--json", "entry", "list"]));
    assert_eq!(json.as_array().unwrap().len(), 1);

    run_cli_success(dir.path(), &["reset", "--yes"]);
    let json = parse_json(&run_cli_success(dir.path(), &["--json", "entry", "list"]));
    assert!(json.as_array().unwrap().is_empty());
}

#[test]
fn test_ephemeral_run_saves_nothing() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["--ephemeral", "entry", "add", "--date", "2024-03-01"]);
    run_cli_success(dir.path(), &["--ephemeral", "spoons", "use", "2"]);
    assert!(
        std::fs::read_dir(dir.path()).unwrap().next().is_none(),
        "ephemeral run wrote to the data directory"
    );
    run_cli_failure(dir.path(), &["--ephemeral", "config", "set", "spoons.default_total", "12"]);
    let json = parse_json(&run_cli_success(dir.path(), &["--json", "entry", "list"]));
    assert!(json.as_array().unwrap().is_empty());
}

#[test]
fn test_config_get_set() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(
        run_cli_success(dir.path(), &["config", "get", "spoons.default_total"]).trim(),
        "10"
    );
    run_cli_success(dir.path(), &["config", "set", "spoons.default_total", "12"]);
    assert_eq!(
        run_cli_success(dir.path(), &["config", "get", "spoons.default_total"]).trim(),
        "12"
    );
    let json = parse_json(&run_cli_success(dir.path(), &["--json", "spoons", "show"]));
    assert_eq!(json["total"], 12);

    run_cli_failure(dir.path(), &["config", "set", "spoons.nope", "1"]);
}

#[test]
fn test_learn_and_tip() {
    let dir = tempfile::tempdir().unwrap();
    let json = parse_json(&run_cli_success(dir.path(), &["--json", "learn"]));
    assert_eq!(json.as_array().unwrap().len(), 3);
    let json = parse_json(&run_cli_success(dir.path(), &["--json", "tip", "--index", "8"]));
    assert_eq!(json["index"], 8);
    assert!(json["tip"].is_string());
}

#[test]
fn test_tip_defaults_to_todays_tip() {
    use fibro_balance_core::{content, Clock, SystemClock};

    let dir = tempfile::tempdir().unwrap();
    let json = parse_json(&run_cli_success(dir.path(), &["--json", "tip"]));
    let expected = content::tip_index_for(SystemClock.today());
    assert_eq!(json["index"], expected);
    assert_eq!(json["tip"], content::tip(expected));
}
