//! Integration tests for newsproof CLI
//!
//! Every test points `NEWSPROOF_CONFIG` at a temp directory so the config
//! and the file contract never touch the real home directory.


use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a newsproof command bound to `home`
fn newsproof(home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("newsproof"));
    cmd.env("NEWSPROOF_CONFIG", config_path(home)).env_remove("RUST_LOG");
    cmd
}

fn config_path(home: &Path) -> PathBuf {
    home.join("config.toml")
}

/// Initialize a file-backed config and connect an account
fn setup(home: &Path) {
    newsproof(home).arg("init").assert().success();
    newsproof(home).args(["connect", "0xabc"]).assert().success();
}

/// Submit a record in JSON mode and return its ID
fn submit_json(home: &Path, source: &str, content: &str) -> String {
    let output = newsproof(home)
        .args(["--json", "submit", "-s", source, "-c", "Politics", "-m", content])
        .output()
        .unwrap();
    assert!(output.status.success(), "submit failed: {output:?}");

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    json["record"]["id"].as_str().unwrap().to_string()
}

fn list_json(home: &Path, extra: &[&str]) -> serde_json::Value {
    let output = newsproof(home).args(["--json", "list"]).args(extra).output().unwrap();
    assert!(output.status.success(), "list failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// INIT TESTS
// =============================================================================

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    newsproof(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let content = fs::read_to_string(config_path(temp.path())).unwrap();
    assert!(content.contains("backend = \"file\""));
}

#[test]
fn test_init_twice_keeps_existing_config() {
    let temp = TempDir::new().unwrap();
    newsproof(temp.path()).args(["init", "--backend", "memory"]).assert().success();

    newsproof(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));

    let content = fs::read_to_string(config_path(temp.path())).unwrap();
    assert!(content.contains("backend = \"memory\""));
}

#[test]
fn test_init_memory_backend_warns_about_persistence() {
    let temp = TempDir::new().unwrap();

    newsproof(temp.path())
        .args(["init", "--backend", "memory"])
        .assert()
        .success()
        .stdout(predicate::str::contains("does not persist between runs"));
}

#[test]
fn test_init_rejects_unknown_backend() {
    let temp = TempDir::new().unwrap();
    newsproof(temp.path()).args(["init", "--backend", "chain"]).assert().failure();
}

// =============================================================================
// SESSION TESTS
// =============================================================================

#[test]
fn test_connect_persists_account() {
    let temp = TempDir::new().unwrap();
    setup(temp.path());

    let content = fs::read_to_string(config_path(temp.path())).unwrap();
    assert!(content.contains("account = \"0xabc\""));

    newsproof(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Account: 0xabc"));
}

#[test]
fn test_disconnect_clears_account() {
    let temp = TempDir::new().unwrap();
    setup(temp.path());

    newsproof(temp.path()).arg("disconnect").assert().success();

    newsproof(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("(not connected)"));
}

#[test]
fn test_connect_rejects_blank_account() {
    let temp = TempDir::new().unwrap();
    newsproof(temp.path()).args(["connect", "  "]).assert().failure();
}

// =============================================================================
// SUBMIT TESTS
// =============================================================================

#[test]
fn test_submit_requires_connected_account() {
    let temp = TempDir::new().unwrap();
    newsproof(temp.path()).arg("init").assert().success();

    newsproof(temp.path())
        .args(["submit", "-s", "Reuters", "-m", "Election results"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please connect wallet first"));

    assert_eq!(list_json(temp.path(), &[])["records"], serde_json::json!([]));
}

#[test]
fn test_submit_rejects_blank_source() {
    let temp = TempDir::new().unwrap();
    setup(temp.path());

    newsproof(temp.path())
        .args(["submit", "-s", "  ", "-m", "Election results"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("news source is required"));

    assert_eq!(list_json(temp.path(), &[])["records"], serde_json::json!([]));
}

#[test]
fn test_submit_stores_placeholder_ciphertext() {
    let temp = TempDir::new().unwrap();
    setup(temp.path());

    let id = submit_json(temp.path(), "Reuters", "Election results");

    let list = list_json(temp.path(), &[]);
    let record = &list["records"][0];
    assert_eq!(record["id"], id.as_str());
    assert_eq!(record["source"], "Reuters");
    assert_eq!(record["category"], "Politics");
    assert_eq!(record["status"], "pending");
    assert!(record["encrypted_content"].as_str().unwrap().starts_with("FHE-"));
    assert!(record["credibility_score"].as_u64().unwrap() < 100);

    // Contract file lives next to the config
    assert!(temp.path().join("contract.json").exists());
}

#[test]
fn test_show_reveals_plaintext() {
    let temp = TempDir::new().unwrap();
    setup(temp.path());
    let id = submit_json(temp.path(), "AP", "Storm makes landfall");

    newsproof(temp.path())
        .args(["show", &id, "--reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Storm makes landfall"));
}

#[test]
fn test_show_unknown_record_fails() {
    let temp = TempDir::new().unwrap();
    setup(temp.path());

    newsproof(temp.path())
        .args(["show", "1-missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("News record not found"));
}

// =============================================================================
// REVIEW TESTS
// =============================================================================

#[test]
fn test_verify_sets_fixed_score() {
    let temp = TempDir::new().unwrap();
    setup(temp.path());
    let id = submit_json(temp.path(), "Reuters", "Election results");

    newsproof(temp.path())
        .args(["verify", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Verification completed"));

    let record = &list_json(temp.path(), &[])["records"][0];
    assert_eq!(record["status"], "verified");
    assert_eq!(record["credibility_score"], 95);
}

#[test]
fn test_dispute_sets_fixed_score() {
    let temp = TempDir::new().unwrap();
    setup(temp.path());
    let id = submit_json(temp.path(), "Reuters", "Election results");

    newsproof(temp.path()).args(["dispute", &id]).assert().success();

    let record = &list_json(temp.path(), &[])["records"][0];
    assert_eq!(record["status"], "disputed");
    assert_eq!(record["credibility_score"], 25);
}

#[test]
fn test_verify_unknown_record_fails() {
    let temp = TempDir::new().unwrap();
    setup(temp.path());

    newsproof(temp.path())
        .args(["verify", "1-missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Verification failed"));
}

// =============================================================================
// LIST AND STATS TESTS
// =============================================================================

#[test]
fn test_list_empty() {
    let temp = TempDir::new().unwrap();
    newsproof(temp.path()).arg("init").assert().success();

    newsproof(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No news records found"));
}

#[test]
fn test_list_filters_by_status() {
    let temp = TempDir::new().unwrap();
    setup(temp.path());
    let verified = submit_json(temp.path(), "Reuters", "One");
    submit_json(temp.path(), "AP", "Two");
    newsproof(temp.path()).args(["verify", &verified]).assert().success();

    let list = list_json(temp.path(), &["--status", "verified"]);
    let records = list["records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], verified.as_str());
    assert_eq!(list["status"], "verified");
}

#[test]
fn test_stats_counts_statuses() {
    let temp = TempDir::new().unwrap();
    setup(temp.path());
    let a = submit_json(temp.path(), "Reuters", "One");
    let b = submit_json(temp.path(), "AP", "Two");
    submit_json(temp.path(), "BBC", "Three");
    newsproof(temp.path()).args(["verify", &a]).assert().success();
    newsproof(temp.path()).args(["dispute", &b]).assert().success();

    let output = newsproof(temp.path()).args(["--json", "stats"]).output().unwrap();
    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["total"], 3);
    assert_eq!(stats["verified"], 1);
    assert_eq!(stats["disputed"], 1);
    assert_eq!(stats["pending"], 1);
    // The pending record's random score may share a bucket with the others
    let distribution: Vec<u64> =
        stats["distribution"].as_array().unwrap().iter().map(|n| n.as_u64().unwrap()).collect();
    assert_eq!(distribution.iter().sum::<u64>(), 3);
    assert!(distribution[4] >= 1);
    assert!(distribution[1] >= 1);
}

// =============================================================================
// STATUS TESTS
// =============================================================================

#[test]
fn test_status_reports_simulated_encryption() {
    let temp = TempDir::new().unwrap();
    newsproof(temp.path()).arg("init").assert().success();

    let output = newsproof(temp.path()).args(["--json", "status"]).output().unwrap();
    assert!(output.status.success());
    let status: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(status["available"], true);
    assert_eq!(status["backend"], "file");
    assert_eq!(status["simulated_encryption"], true);
    assert!(status["account"].is_null());
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    newsproof(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("newsproof"));
}
