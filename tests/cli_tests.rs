use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{Fixture, tc};

#[test]
fn test_missing_employee_is_unauthorized() {
    let fx = Fixture::new();

    tc(&fx.dir)
        .args(["--db", &fx.db, "--jobs-file", &fx.jobs, "status"])
        .assert()
        .failure()
        .stderr(contains("Unauthorized Access"))
        .stdout(contains("Welcome").not());

    // nothing was initialized
    assert!(!std::path::Path::new(&fx.db).exists());
}

#[test]
fn test_unknown_employee_is_unauthorized() {
    let fx = Fixture::new();

    for code in ["E11", "e01", "ADMIN"] {
        fx.emp(code)
            .arg("clock-in")
            .assert()
            .failure()
            .stderr(contains("Unauthorized Access"))
            .stdout(contains("Clocked In").not());
    }
}

#[test]
fn test_employee_from_environment() {
    let fx = Fixture::new();

    tc(&fx.dir)
        .env("TIMECLOCK_EMP", "E04")
        .args(["--db", &fx.db, "--jobs-file", &fx.jobs, "status"])
        .assert()
        .success()
        .stdout(contains("Welcome, Matthew Bari"));
}

#[test]
fn test_greeting_and_first_load_status() {
    let fx = Fixture::new();

    fx.emp("E01")
        .arg("status")
        .assert()
        .success()
        .stdout(contains("Welcome, Shannon Kovecses"))
        .stdout(contains("Select the current job to enable clock actions."))
        .stdout(contains("Clocked in  : no"))
        .stdout(contains("clock-in     disabled"));
}

#[test]
fn test_jobs_list_hides_pay() {
    let fx = Fixture::new();

    let out = fx.emp("E02").arg("jobs").output().expect("run jobs");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Mowing"));
    assert!(stdout.contains("Raking"));
    assert!(!stdout.contains("15"));
    assert!(!stdout.contains("14"));
}

#[test]
fn test_full_shift_with_offline_endpoint() {
    let fx = Fixture::new();

    fx.emp("E01")
        .args(["select", "J1"])
        .assert()
        .success()
        .stdout(contains("Selected: Mowing"));

    fx.emp("E01")
        .arg("clock-in")
        .assert()
        .success()
        .stdout(contains("Selected: Mowing"))
        .stdout(contains("Clocked In ✅ (Mowing)"));

    fx.emp("E01")
        .arg("break-start")
        .assert()
        .success()
        .stdout(contains("Break Started 🟡"));

    fx.emp("E01")
        .arg("break-end")
        .assert()
        .success()
        .stdout(contains("Break Ended ✅"));

    fx.emp("E01")
        .args(["clock-out", "--notes", "all done"])
        .assert()
        .success()
        .stdout(contains("Clocked Out ✅ (Notes saved if entered)"));

    // no endpoint: all four punches stay unconfirmed in the journal
    fx.emp("E01")
        .arg("punches")
        .assert()
        .success()
        .stdout(contains("Clock In"))
        .stdout(contains("Break Start"))
        .stdout(contains("Break End"))
        .stdout(contains("Clock Out"))
        .stdout(contains("4 punch(es) were not confirmed"));
}

#[test]
fn test_rejections_leave_state_alone() {
    let fx = Fixture::new();

    fx.emp("E03")
        .arg("clock-in")
        .assert()
        .success()
        .stdout(contains("Please select a job before clocking in."));

    fx.emp("E03").args(["select", "J2"]).assert().success();

    fx.emp("E03")
        .arg("break-start")
        .assert()
        .success()
        .stdout(contains("You must Clock In before starting break."));

    fx.emp("E03")
        .arg("break-end")
        .assert()
        .success()
        .stdout(contains("You must Clock In before ending break."));

    fx.emp("E03")
        .arg("clock-out")
        .assert()
        .success()
        .stdout(contains("You are not clocked in."));

    fx.emp("E03").arg("clock-in").assert().success();

    fx.emp("E03")
        .arg("clock-in")
        .assert()
        .success()
        .stdout(contains("You are already clocked in."));

    fx.emp("E03")
        .arg("break-end")
        .assert()
        .success()
        .stdout(contains("No active break to end."));

    fx.emp("E03").arg("break-start").assert().success();

    fx.emp("E03")
        .arg("break-start")
        .assert()
        .success()
        .stdout(contains("Break is already active."));

    fx.emp("E03")
        .arg("status")
        .assert()
        .success()
        .stdout(contains("Clocked in  : yes"))
        .stdout(contains("On break    : yes"))
        .stdout(contains("break-end    enabled"))
        .stdout(contains("break-start  disabled"));
}

#[test]
fn test_clock_out_during_break_logs_break_end_first() {
    let fx = Fixture::new();

    fx.emp("E05").args(["select", "J1"]).assert().success();
    fx.emp("E05").arg("clock-in").assert().success();
    fx.emp("E05").arg("break-start").assert().success();
    fx.emp("E05").arg("clock-out").assert().success();

    let out = fx.emp("E05").arg("punches").output().expect("punches");
    let stdout = String::from_utf8_lossy(&out.stdout);
    let actions: Vec<&str> = stdout
        .lines()
        .filter(|l| l.trim_start().starts_with(|c: char| c.is_ascii_digit()))
        .collect();

    assert_eq!(actions.len(), 4);
    assert!(actions[2].contains("Break End"));
    assert!(actions[3].contains("Clock Out"));

    fx.emp("E05")
        .arg("status")
        .assert()
        .success()
        .stdout(contains("Clocked in  : no"))
        .stdout(contains("On break    : no"));
}

#[test]
fn test_selection_restored_only_if_still_listed() {
    let fx = Fixture::new();

    fx.emp("E06").args(["select", "J2"]).assert().success();

    fx.emp("E06")
        .arg("status")
        .assert()
        .success()
        .stdout(contains("Selected: Raking"))
        .stdout(contains("Job         : Raking (J2)"));

    fx.write_jobs(r#"[{"id":"J1","name":"Mowing","pay":15}]"#);

    fx.emp("E06")
        .arg("status")
        .assert()
        .success()
        .stdout(contains("Select the current job to enable clock actions."))
        .stdout(contains("Job         : --"));
}

#[test]
fn test_selection_is_per_employee() {
    let fx = Fixture::new();

    fx.emp("E07").args(["select", "J1"]).assert().success();

    fx.emp("E08")
        .arg("status")
        .assert()
        .success()
        .stdout(contains("Job         : --"));
}

#[test]
fn test_unknown_job_and_clear() {
    let fx = Fixture::new();

    fx.emp("E01")
        .args(["select", "J9"])
        .assert()
        .failure()
        .stderr(contains("Unknown job id: J9"));

    fx.emp("E01").args(["select", "J1"]).assert().success();

    fx.emp("E01")
        .args(["select", "--clear"])
        .assert()
        .success()
        .stdout(contains("Please select a job to continue."));

    fx.emp("E01")
        .arg("status")
        .assert()
        .success()
        .stdout(contains("Job         : --"));
}

#[test]
fn test_job_load_failure_keeps_actions_disabled() {
    let fx = Fixture::with_jobs("<html>Service unavailable</html>");

    fx.emp("E09")
        .arg("clock-in")
        .assert()
        .success()
        .stderr(contains("Jobs failed to load"))
        .stdout(contains("Please select a job before clocking in."));
}

#[test]
fn test_no_job_source_reports_failure() {
    let fx = Fixture::new();

    tc(&fx.dir)
        .args(["--db", &fx.db, "--emp", "E01", "status"])
        .assert()
        .success()
        .stderr(contains("Jobs failed to load (No endpoint configured)."));
}

#[test]
fn test_notes_only_while_clocked_in_and_cleared_after_clock_out() {
    let fx = Fixture::new();

    fx.emp("E10")
        .args(["notes", "too early"])
        .assert()
        .success()
        .stdout(contains("Clock in before adding notes."));

    fx.emp("E10").args(["select", "J1"]).assert().success();
    fx.emp("E10").arg("clock-in").assert().success();

    fx.emp("E10")
        .args(["notes", "sprinkler broken"])
        .assert()
        .success()
        .stdout(contains("Notes saved for clock out."));

    fx.emp("E10")
        .args(["notes", "--show"])
        .assert()
        .success()
        .stdout(contains("sprinkler broken"));

    fx.emp("E10").arg("clock-out").assert().success();

    fx.emp("E10")
        .args(["notes", "--show"])
        .assert()
        .success()
        .stdout(contains("No notes saved."));
}

#[test]
fn test_sessions_are_independent_and_clearable() {
    let fx = Fixture::new();

    fx.emp("E01").args(["select", "J1"]).assert().success();
    fx.emp("E01").arg("clock-in").assert().success();

    fx.emp("E01")
        .args(["--session", "tab-2", "status"])
        .assert()
        .success()
        .stdout(contains("Clocked in  : no"));

    fx.emp("E01")
        .args(["session", "--clear"])
        .assert()
        .success()
        .stdout(contains("Session 'default' cleared"));

    fx.emp("E01")
        .arg("status")
        .assert()
        .success()
        .stdout(contains("Clocked in  : no"))
        .stdout(contains("Job         : --"));
}

#[test]
fn test_lat_without_lon_is_rejected() {
    let fx = Fixture::new();

    fx.emp("E01")
        .args(["--lat", "43.6", "status"])
        .assert()
        .failure()
        .stderr(contains("--lat and --lon must be given together"));
}

#[test]
fn test_internal_log_records_punches() {
    let fx = Fixture::new();

    fx.emp("E02").args(["select", "J1"]).assert().success();
    fx.emp("E02").arg("clock-in").assert().success();

    tc(&fx.dir)
        .args(["--db", &fx.db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("select (E02)"))
        .stdout(contains("punch (E02)"))
        .stdout(contains("Clock In (J1)"));
}

#[test]
fn test_init_in_test_mode_creates_database() {
    let fx = Fixture::new();

    tc(&fx.dir)
        .args(["--db", &fx.db, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&fx.db).exists());
    assert!(!fx.dir.path().join("timeclock.conf").exists());
}

#[test]
fn test_init_writes_config_that_is_loaded_back() {
    let fx = Fixture::new();

    tc(&fx.dir)
        .args([
            "--db",
            &fx.db,
            "--endpoint",
            "http://127.0.0.1:9/exec",
            "init",
        ])
        .assert()
        .success();

    let conf = fx.dir.path().join("timeclock.conf");
    let content = std::fs::read_to_string(&conf).expect("config written");
    assert!(content.contains("http://127.0.0.1:9/exec"));
    assert!(content.contains("gps_timeout_secs: 8"));

    tc(&fx.dir)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("http://127.0.0.1:9/exec"));
}
