use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

mod common;
use common::TestEnv;

fn stdout_of(env: &TestEnv, args: &[&str]) -> String {
    let out = env.cmd().args(args).assert().success().get_output().stdout.clone();
    String::from_utf8(out).expect("utf8 stdout")
}

#[test]
fn test_init_creates_database() {
    let env = TestEnv::new("init");

    env.cmd()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(env.db_path().exists());
    // test mode never writes the config file
    assert!(!env.home.path().join(".rworktracker/rworktracker.conf").exists());
}

#[test]
fn test_init_without_test_flag_writes_config() {
    let env = TestEnv::new("init_conf");
    env.cmd().arg("init").assert().success();

    let conf = env.home.path().join(".rworktracker/rworktracker.conf");
    let content = fs::read_to_string(conf).expect("config written");
    assert!(content.contains("max_hours: 24"));
    assert!(content.contains(&env.db));
}

#[test]
fn test_init_twice_preserves_records() {
    let env = TestEnv::new("init_twice");
    env.init();
    env.add("6", Some("2025-04-01 09:00:00"));
    env.init();

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("2025-04-01 09:00:00"));
}

#[test]
fn test_add_then_list() {
    let env = TestEnv::new("add_list");
    env.init();

    env.cmd()
        .args(["add", "8", "--at", "2025-06-01 09:00:00"])
        .assert()
        .success()
        .stdout(contains("Recorded 8 hours at 2025-06-01 09:00:00"));

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("2025-06-01 09:00:00"))
        .stdout(contains("Work records (1)"));
}

#[test]
fn test_list_is_most_recent_first() {
    let env = TestEnv::new("list_order");
    env.init();
    env.add("2", Some("2025-01-10 08:00:00"));
    env.add("4", Some("2025-03-10 08:00:00"));
    env.add("3", Some("2025-02-10 08:00:00"));

    let out = stdout_of(&env, &["list"]);
    let march = out.find("2025-03-10").expect("march row");
    let feb = out.find("2025-02-10").expect("february row");
    let jan = out.find("2025-01-10").expect("january row");
    assert!(march < feb && feb < jan);
}

#[test]
fn test_list_empty_store() {
    let env = TestEnv::new("list_empty");
    env.init();

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No records found."));
}

#[test]
fn test_add_rejects_out_of_range_hours() {
    let env = TestEnv::new("add_invalid");
    env.init();

    env.cmd()
        .args(["add", "0"])
        .assert()
        .failure()
        .stderr(contains("greater than 0"));

    env.cmd()
        .args(["add", "25"])
        .assert()
        .failure()
        .stderr(contains("cannot exceed 24"));

    env.cmd()
        .args(["add", "-2"])
        .assert()
        .failure()
        .stderr(contains("Invalid hours"));

    env.cmd()
        .args(["add", "lots"])
        .assert()
        .failure()
        .stderr(contains("integer"));

    // nothing reached storage
    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No records found."));
}

#[test]
fn test_add_rejects_bad_timestamp() {
    let env = TestEnv::new("add_bad_ts");
    env.init();

    env.cmd()
        .args(["add", "5", "--at", "01/06/2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp"));
}

#[test]
fn test_config_bounds_are_applied() {
    let env = TestEnv::new("config_bounds");
    let dir = env.home.path().join(".rworktracker");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("rworktracker.conf"),
        format!("database: {}\nmin_hours: 0\nmax_hours: 12\n", env.db),
    )
    .unwrap();
    env.init();

    env.add("0", Some("2025-05-05 10:00:00"));
    env.cmd()
        .args(["add", "13"])
        .assert()
        .failure()
        .stderr(contains("cannot exceed 12"));
}

#[test]
fn test_summary_today_month_total() {
    let env = TestEnv::new("summary");
    env.init();
    env.add("3", None);
    env.add("2", None);
    env.add("5", Some("2000-01-15 10:00:00"));

    env.cmd()
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Today:      5 hours"))
        .stdout(contains("This month: 5 hours"))
        .stdout(contains("Total:      10 hours"))
        .stdout(contains("Records:    3"));
}

#[test]
fn test_summary_empty_store_is_zero() {
    let env = TestEnv::new("summary_empty");
    env.init();

    env.cmd()
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Total:      0 hours"))
        .stdout(contains("Records:    0"));
}

#[test]
fn test_unreachable_database_reports_error() {
    let env = TestEnv::new("unreachable");
    let bad = env
        .home
        .path()
        .join("missing-dir")
        .join("db.sqlite")
        .to_string_lossy()
        .to_string();

    common::rwt()
        .env("HOME", env.home.path())
        .args(["--db", &bad, "list"])
        .assert()
        .failure()
        .stderr(contains("Error"));

    common::rwt()
        .env("HOME", env.home.path())
        .args(["--db", &bad, "add", "4"])
        .assert()
        .failure()
        .stderr(contains("Database error"));
}

#[test]
fn test_malformed_row_is_listed_raw() {
    let env = TestEnv::new("malformed");
    env.init();
    env.add("4", Some("2025-02-02 08:00:00"));

    let conn = rusqlite::Connection::open(&env.db).expect("open db");
    conn.execute(
        "INSERT INTO work_records (timestamp, hours) VALUES ('sometime last week', 2)",
        [],
    )
    .expect("raw insert");
    drop(conn);

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("sometime last week"))
        .stdout(contains("2025-02-02 08:00:00"));
}

#[test]
fn test_prompt_session_records_hours() {
    let env = TestEnv::new("prompt");
    env.init();

    env.cmd()
        .arg("prompt")
        .write_stdin("x\n7\nyes\nno\n")
        .assert()
        .success()
        .stdout(contains("Invalid input"))
        .stdout(contains("Recorded 7 hours at"))
        .stdout(contains("Your total records are 1 and total hours are 7"))
        .stdout(contains("Date Time"));
}

#[test]
fn test_export_csv_and_json() {
    let env = TestEnv::new("export");
    env.init();
    env.add("8", Some("2025-09-01 09:00:00"));
    env.add("6", Some("2025-09-15 09:00:00"));

    let csv_out = env.out_path("records.csv");
    env.cmd()
        .args(["export", "--format", "csv", "--file"])
        .arg(&csv_out)
        .assert()
        .success();
    let content = fs::read_to_string(&csv_out).expect("read csv");
    assert!(content.starts_with("id,timestamp,hours"));
    assert!(content.contains("2025-09-15 09:00:00,6"));

    let json_out = env.out_path("records.json");
    env.cmd()
        .args(["export", "--format", "json", "--force", "--file"])
        .arg(&json_out)
        .assert()
        .success();
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    assert_eq!(value.as_array().map(|a| a.len()), Some(2));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let env = TestEnv::new("export_overwrite");
    env.init();
    env.add("8", Some("2025-09-01 09:00:00"));

    let out = env.out_path("existing.csv");
    fs::write(&out, "keep me").unwrap();

    env.cmd()
        .args(["export", "--file"])
        .arg(&out)
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_backup_compressed() {
    let env = TestEnv::new("backup");
    env.init();
    env.add("8", Some("2025-09-01 09:00:00"));

    let dest = env.out_path("backup/copy.sqlite");
    env.cmd()
        .args(["backup", "--compress", "--file"])
        .arg(&dest)
        .assert()
        .success()
        .stdout(contains("Compressed"));

    assert!(env.out_path("backup/copy.zip").exists());
    assert!(!dest.exists());
}

#[test]
fn test_log_print_lists_operations() {
    let env = TestEnv::new("log");
    env.init();
    env.add("8", Some("2025-09-01 09:00:00"));

    env.cmd()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("Recorded 8 hours"));
}

#[test]
fn test_db_info_and_check() {
    let env = TestEnv::new("db_info");
    env.init();
    env.add("8", Some("2025-09-01 09:00:00"));

    env.cmd()
        .args(["db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total records:"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_config_print() {
    let env = TestEnv::new("config_print");

    env.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("min_hours: 1"))
        .stdout(contains(env.db.as_str()));
}

#[test]
fn test_relative_db_is_the_same_file_for_every_command() {
    let home = TempDir::new().unwrap();
    let work = home.path().join("work");
    fs::create_dir_all(&work).unwrap();

    let run = |args: &[&str]| {
        let mut c = common::rwt();
        c.env("HOME", home.path())
            .env("APPDATA", home.path())
            .current_dir(&work)
            .args(args);
        c
    };

    run(&["--test", "--db", "work.sqlite", "init"]).assert().success();
    run(&["--db", "work.sqlite", "add", "5", "--at", "2025-06-01 09:00:00"])
        .assert()
        .success();
    run(&["--db", "work.sqlite", "list"])
        .assert()
        .success()
        .stdout(contains("2025-06-01 09:00:00"));

    assert!(work.join("work.sqlite").exists());
    assert!(!home.path().join(".rworktracker/work.sqlite").exists());
}

#[test]
fn test_tilde_db_is_expanded_by_init() {
    let home = TempDir::new().unwrap();

    common::rwt()
        .env("HOME", home.path())
        .args(["--test", "--db", "~/tilde.sqlite", "init"])
        .assert()
        .success();

    assert!(home.path().join("tilde.sqlite").exists());
}

#[test]
fn test_backup_onto_live_database_is_refused() {
    let env = TestEnv::new("backup_self");
    env.init();
    env.add("8", Some("2025-09-01 09:00:00"));

    env.cmd()
        .args(["backup", "--force", "--file", &env.db])
        .assert()
        .failure()
        .stderr(contains("database itself"));

    env.cmd()
        .args(["backup", "--compress", "--force", "--file", &env.db])
        .assert()
        .success();

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("2025-09-01 09:00:00"));
}

#[test]
fn test_maintenance_commands_create_schema_on_fresh_database() {
    let env = TestEnv::new("fresh_schema");

    env.cmd()
        .args(["db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total records:"));

    env.cmd().args(["log", "--print"]).assert().success();

    let conn = rusqlite::Connection::open(&env.db).unwrap();
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='work_records'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(tables, 1);
}
