//! Integration tests for the `audiocli` binary
//!
//! Runs the real binary against a fake `tinymix` shell script.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;

use super::common::dumps::{GOOGLE_DUMP, GOOGLE_DUMP_CONTROLS, GOOGLE_USAGE};
use super::common::fake_tinymix::FakeTinymix;

fn audiocli(fake: &FakeTinymix) -> Command {
    let mut cmd = Command::cargo_bin("audiocli").expect("binary should build");
    cmd.arg("--config")
        .arg(fake.dir().join("absent-config.toml"))
        .arg("mixer")
        .arg("--tinymix-path")
        .arg(&fake.path);
    cmd
}

/// `mixer save` writes the persisted JSON state
#[test]
fn test_save_writes_state_file() {
    let fake = FakeTinymix::new(GOOGLE_USAGE, GOOGLE_DUMP, "none");
    let state_path = fake.dir().join("state.json");

    audiocli(&fake)
        .arg("save")
        .arg(&state_path)
        .assert()
        .success();

    let json = std::fs::read_to_string(&state_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let controls = value.as_array().expect("state is a JSON array");
    assert_eq!(controls.len(), GOOGLE_DUMP_CONTROLS);
    assert_eq!(controls[0]["Type"], "BOOL");
    assert_eq!(controls[0]["Values"][0], "false");
    assert_eq!(controls[2]["Selected"], 1);
    assert!(controls[3].get("Selected").is_none());
}

/// `mixer load` restores every control even when one of them fails
#[test]
fn test_load_continues_after_failed_control() {
    let fake = FakeTinymix::new(GOOGLE_USAGE, GOOGLE_DUMP, "RX Route");
    let state_path = fake.dir().join("state.json");

    audiocli(&fake)
        .arg("save")
        .arg(&state_path)
        .assert()
        .success();

    audiocli(&fake)
        .arg("--device-idx")
        .arg("3")
        .arg("load")
        .arg(&state_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Failed to restore control"));

    let calls = fake.calls();
    assert_eq!(calls.len(), GOOGLE_DUMP_CONTROLS);
    assert_eq!(calls[0], vec!["-D", "3", "MasterMute", "--", "0"]);
    assert_eq!(calls[2], vec!["-D", "3", "RX Route", "--", "AIF1"]);
    assert_eq!(calls[5][2], "Cal Data");
}

/// `mixer dump` prints the decoded state
#[test]
fn test_dump_prints_json() {
    let fake = FakeTinymix::new(GOOGLE_USAGE, GOOGLE_DUMP, "none");

    audiocli(&fake)
        .arg("dump")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""Name": "RX Volume""#));
}

/// Selecting a device by name is accepted by the parser but refused at use
#[test]
fn test_device_name_is_unsupported() {
    let fake = FakeTinymix::new(GOOGLE_USAGE, GOOGLE_DUMP, "none");

    audiocli(&fake)
        .arg("--device-name")
        .arg("sm8250-mtp-snd-card")
        .arg("save")
        .arg(fake.dir().join("state.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported"));
}

/// Both device options at once is a usage error
#[test]
fn test_conflicting_device_options() {
    let fake = FakeTinymix::new(GOOGLE_USAGE, GOOGLE_DUMP, "none");

    audiocli(&fake)
        .args(["--device-idx", "0", "--device-name", "card", "dump"])
        .assert()
        .failure();
}

/// A malformed dump aborts the save and writes nothing
#[test]
fn test_malformed_dump_fails_save() {
    let broken = GOOGLE_DUMP.replace("4\tINT", "7\tINT");
    let fake = FakeTinymix::new(GOOGLE_USAGE, &broken, "none");
    let state_path = fake.dir().join("state.json");

    audiocli(&fake)
        .arg("save")
        .arg(&state_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected control index 7"));
    assert!(!state_path.exists());
}
