use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, lf, setup_test_db, temp_out};

#[test]
fn test_export_text_stdout() {
    let db_path = setup_test_db("export_text");
    init_db_with_data(&db_path);

    lf().args(["--db", &db_path, "export"])
        .assert()
        .success()
        .stdout(contains("LedgerFlow Data Export"))
        .stdout(contains("Period,Date,Hours,Note,Logged_At"))
        .stdout(contains("2025-09-01"))
        .stdout(contains("evening shift"))
        .stdout(contains("Totals per period:"));
}

#[test]
fn test_export_text_empty_ledger() {
    let db_path = setup_test_db("export_empty");

    lf().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    lf().args(["--db", &db_path, "export"])
        .assert()
        .success()
        .stdout(contains("LedgerFlow Data Export"))
        .stdout(contains("Period,Date,Hours,Note,Logged_At"));
}

#[test]
fn test_export_csv_file() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_data(&db_path);

    lf().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("csv export completed"));

    let content = fs::read_to_string(&out).expect("read csv output");
    assert!(content.contains("period_start"));
    assert!(content.contains("2025-09-02"));
    assert!(content.contains("evening shift"));
}

#[test]
fn test_export_json_file() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_data(&db_path);

    lf().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("json export completed"));

    let content = fs::read_to_string(&out).expect("read json output");
    assert!(content.contains("\"hours\": 5.0"));
    assert!(content.contains("\"note\": \"evening shift\""));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_force");
    let out = temp_out("export_force", "txt");
    init_db_with_data(&db_path);

    fs::write(&out, "precious").expect("seed output file");

    lf().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    // untouched without --force
    assert_eq!(fs::read_to_string(&out).expect("reread"), "precious");

    lf().args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("text export completed"));

    let content = fs::read_to_string(&out).expect("read text output");
    assert!(content.contains("LedgerFlow Data Export"));
}

#[test]
fn test_export_rate_line_follows_settings() {
    let db_path = setup_test_db("export_rate_line");
    init_db_with_data(&db_path);

    lf().args([
        "--db", &db_path, "rates", "--base", "7.00", "--tips", "--avg-tip", "23.15",
    ])
    .assert()
    .success();

    lf().args(["--db", &db_path, "export"])
        .assert()
        .success()
        .stdout(contains("30.15"))
        .stdout(contains("avg tips"));
}
