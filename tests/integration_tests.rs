use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use std::path::Path;

mod common;
use common::{LOGISTICS_HEADER, PRODUCTION_HEADER, days_ago, rld, write_source};

/// Production + logistics fixtures relative to the real clock.
fn fixtures(dir: &Path) -> (String, String) {
    let production = format!(
        "{PRODUCTION_HEADER}\n\
         {},J1,W1,4,20\n\
         {},J1,W2,6,18\n\
         {},J7,W3,8,8\n\
         {},J9,W4,0,5\n",
        days_ago(1),
        days_ago(2),
        days_ago(20),
        days_ago(3),
    );
    let logistics = format!(
        "{LOGISTICS_HEADER}\n\
         {},Ravi,120,10,https://photos/secret.jpg\n\
         {},Anil,80,8,\n\
         {},Ravi,500,40,\n",
        days_ago(1),
        days_ago(4),
        days_ago(200),
    );

    (
        write_source(dir, "production_logs.csv", &production),
        write_source(dir, "logistics_logs.csv", &logistics),
    )
}

fn report_json(dir: &Path, extra: &[&str]) -> Value {
    let (prod, logi) = fixtures(dir);
    let config = dir.join("absent.conf");

    let mut args = vec![
        "--config".to_string(),
        config.to_string_lossy().to_string(),
        "report".to_string(),
        "--production-url".to_string(),
        prod,
        "--logistics-url".to_string(),
        logi,
        "--json".to_string(),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));

    let output = rld().args(&args).output().expect("run rlogdash");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_report_json_weekly_figures() {
    let dir = tempfile::tempdir().unwrap();
    let v = report_json(dir.path(), &["--period", "weekly"]);

    assert_eq!(v["period"], "Weekly");

    let prod = &v["production"];
    assert_eq!(prod["fetched_rows"], 4);
    assert_eq!(prod["records"].as_array().unwrap().len(), 3);
    assert_eq!(prod["totals"]["hours"], 10.0);
    assert_eq!(prod["totals"]["output"], 43.0);

    let jobs = prod["by_job"].as_array().unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0]["job_code"], "J1");
    assert_eq!(jobs[0]["hours"], 10.0);

    // W4 has zero hours and no efficiency
    let workers = prod["by_worker"].as_array().unwrap();
    assert_eq!(workers.len(), 2);
    assert_eq!(workers[0]["worker"], "W1");
    assert_eq!(workers[0]["efficiency"], 5.0);
    assert_eq!(workers[1]["worker"], "W2");
    assert_eq!(workers[1]["efficiency"], 3.0);

    let logi = &v["logistics"];
    assert_eq!(logi["totals"]["distance"], 200.0);
    assert_eq!(logi["totals"]["fuel_ltrs"], 18.0);
    assert!(!logi.to_string().contains("secret.jpg"));
}

#[test]
fn test_report_json_yearly_widens_window() {
    let dir = tempfile::tempdir().unwrap();
    let v = report_json(dir.path(), &["--period", "yearly"]);

    assert_eq!(v["production"]["records"].as_array().unwrap().len(), 4);
    assert_eq!(v["logistics"]["totals"]["distance"], 700.0);
}

#[test]
fn test_report_json_single_section() {
    let dir = tempfile::tempdir().unwrap();
    let v = report_json(dir.path(), &["--section", "logistics"]);

    assert!(v.get("production").is_none());
    assert!(v.get("logistics").is_some());
}

#[test]
fn test_report_text_dashboard() {
    let dir = tempfile::tempdir().unwrap();
    let (prod, logi) = fixtures(dir.path());
    let config = dir.path().join("absent.conf");

    rld()
        .env("NO_COLOR", "1")
        .args([
            "--config",
            &config.to_string_lossy(),
            "report",
            "--period",
            "monthly",
            "--production-url",
            &prod,
            "--logistics-url",
            &logi,
        ])
        .assert()
        .success()
        .stdout(contains("Production Efficiency"))
        .stdout(contains("Jobwise Total Man-Hours"))
        .stdout(contains("Worker Productivity (Output/Hr)"))
        .stdout(contains("Total man-hours: 18.0"))
        .stdout(contains("KMs Driven by Driver"))
        .stdout(contains("Fuel Consumed (Litres)"))
        .stdout(contains("(60.0%)"))
        .stdout(contains("secret.jpg").not())
        .stdout(contains("Photo").not());
}

#[test]
fn test_unavailable_sources_render_zeros() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("absent.conf");
    let missing = dir.path().join("missing.csv");

    rld()
        .env("NO_COLOR", "1")
        .args([
            "--config",
            &config.to_string_lossy(),
            "report",
            "--production-url",
            &missing.to_string_lossy(),
            "--logistics-url",
            &missing.to_string_lossy(),
        ])
        .assert()
        .success()
        .stdout(contains("No production records for the selected period."))
        .stdout(contains("Total man-hours: 0.0"))
        .stdout(contains("Total distance (km): 0.0"));
}

#[test]
fn test_invalid_period_is_rejected() {
    rld()
        .args(["report", "--period", "daily"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_default_period_in_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("rlogdash.conf");
    std::fs::write(&config, "default_period: fortnightly\n").unwrap();
    let missing = dir.path().join("missing.csv");

    rld()
        .args([
            "--config",
            &config.to_string_lossy(),
            "report",
            "--production-url",
            &missing.to_string_lossy(),
            "--logistics-url",
            &missing.to_string_lossy(),
        ])
        .assert()
        .code(1)
        .stderr(contains("fortnightly"));
}

#[test]
fn test_overflowing_cache_ttl_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("rlogdash.conf");
    std::fs::write(&config, "cache_ttl: 9999999999999999999h\n").unwrap();
    let missing = dir.path().join("missing.csv");

    rld()
        .args([
            "--config",
            &config.to_string_lossy(),
            "report",
            "--production-url",
            &missing.to_string_lossy(),
            "--logistics-url",
            &missing.to_string_lossy(),
        ])
        .assert()
        .code(1)
        .stderr(contains("Invalid duration"));
}

#[test]
fn test_init_then_config_print_and_check() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("rlogdash.conf");
    let config_str = config.to_string_lossy().to_string();

    rld()
        .args(["--config", &config_str, "init"])
        .assert()
        .success();
    assert!(config.exists());

    rld()
        .args(["--config", &config_str, "init"])
        .assert()
        .success()
        .stderr(contains("already exists"));

    rld()
        .args(["--config", &config_str, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("production_url"))
        .stdout(contains("cache_ttl"))
        .stdout(contains("5m"));

    rld()
        .args(["--config", &config_str, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is valid"));
}

#[test]
fn test_watch_runs_bounded_passes() {
    let dir = tempfile::tempdir().unwrap();
    let (prod, logi) = fixtures(dir.path());
    let config = dir.path().join("absent.conf");

    rld()
        .env("NO_COLOR", "1")
        .args([
            "--config",
            &config.to_string_lossy(),
            "watch",
            "--production-url",
            &prod,
            "--logistics-url",
            &logi,
            "--interval",
            "0",
            "--iterations",
            "2",
        ])
        .assert()
        .success()
        .stdout(contains("Refreshing every 0s"))
        .stdout(contains("Production Efficiency"));
}
