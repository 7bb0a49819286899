//! Integration tests for the capture -> persist -> restore flow
//!
//! Drives `Tinymix` with a `MockRunner` and real state files.

use std::sync::Arc;

use audiocli::exec::mock::MockRunner;
use audiocli::mixer::state;
use audiocli::{CommandOutput, Dialect, DialectPreference, Tinymix, TinymixConfig, ValueType};
use tempfile::TempDir;

use super::common::dumps::{GOOGLE_DUMP, GOOGLE_DUMP_CONTROLS, GOOGLE_USAGE, UPSTREAM_USAGE};

fn google_runner() -> MockRunner {
    MockRunner::new(|args| {
        if args.is_empty() {
            CommandOutput::ok(GOOGLE_USAGE)
        } else if args.first().map(String::as_str) == Some("-t") {
            CommandOutput::ok(GOOGLE_DUMP)
        } else {
            CommandOutput::ok("")
        }
    })
}

fn config(device_index: u32) -> TinymixConfig {
    TinymixConfig::builder()
        .with_path("tinymix")
        .with_device_index(device_index)
        .build()
        .expect("valid config")
}

/// Captured state decodes every control with the expected values
#[tokio::test]
async fn test_capture_decodes_all_controls() {
    let tinymix = Tinymix::new(config(0), Arc::new(google_runner()))
        .await
        .unwrap();
    assert_eq!(tinymix.dialect(), Dialect::Google);

    let records = tinymix.get_state().await.unwrap();
    assert_eq!(records.len(), GOOGLE_DUMP_CONTROLS);

    let indices: Vec<usize> = records.iter().map(|r| r.index).collect();
    assert_eq!(indices, (0..GOOGLE_DUMP_CONTROLS).collect::<Vec<_>>());

    assert_eq!(records[0].name, "MasterMute");
    assert_eq!(records[0].values, vec!["false"]);
    assert_eq!(records[1].values, vec!["true", "false"]);
    assert_eq!(records[2].selected, Some(1));
    assert_eq!(records[3].selected, None);
    assert_eq!(records[4].values, vec!["84", "-6"]);
    assert_eq!(records[5].value_type, ValueType::Byte);
    assert_eq!(records[5].values, vec!["10", "255", "0", "127"]);
}

/// Saving to disk and loading back restores each control with one call
#[tokio::test]
async fn test_save_then_load_restores_controls() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mixer.json");

    let runner = google_runner();
    let tinymix = Tinymix::new(config(2), Arc::new(runner.clone()))
        .await
        .unwrap();

    let captured = tinymix.get_state().await.unwrap();
    state::save_to_file(&path, &captured).unwrap();

    let loaded = state::load_from_file(&path).unwrap();
    assert_eq!(loaded, captured);

    runner.reset();
    let report = tinymix.load_state(&loaded).await.unwrap();
    assert_eq!(report.restored, GOOGLE_DUMP_CONTROLS);
    assert!(report.is_complete());

    assert_eq!(
        runner.captured_args(),
        vec![
            vec!["-D", "2", "MasterMute", "--", "0"],
            vec!["-D", "2", "Speaker Switch", "--", "1", "0"],
            vec!["-D", "2", "RX Route", "--", "AIF1"],
            vec!["-D", "2", "Fixed Rate", "--"],
            vec!["-D", "2", "RX Volume", "--", "84", "-6"],
            vec!["-D", "2", "Cal Data", "--", "10", "255", "0", "127"],
        ]
    );
}

/// A state file edited by hand still restores the valid controls
#[tokio::test]
async fn test_load_hand_edited_state() {
    let json = r#"[
        {"Type":"bool","Num":1,"Name":"Mute","Values":["yes"]},
        {"Type":"ENUM","Num":2,"Name":"Route","Values":["A","B"],"Selected":0},
        {"Type":"INT","Num":1,"Name":"Gain","Values":["3"]}
    ]"#;
    let records = state::from_json(json).unwrap();
    assert_eq!(records[2].index, 2);

    let runner = google_runner();
    let config = TinymixConfig::builder()
        .with_dialect(DialectPreference::Google)
        .build()
        .unwrap();
    let tinymix = Tinymix::new(config, Arc::new(runner.clone()))
        .await
        .unwrap();

    let report = tinymix.load_state(&records).await.unwrap();
    assert_eq!(report.skipped, 1);
    assert_eq!(report.restored, 2);
    assert_eq!(runner.captured_args().len(), 2);
}

/// The upstream build is detected and refused
#[tokio::test]
async fn test_upstream_build_is_refused() {
    let runner = MockRunner::new(|args| {
        if args.is_empty() {
            CommandOutput::ok(UPSTREAM_USAGE)
        } else {
            CommandOutput::ok("Mixer name: 'card'\nctl\ttype\tnum\tname\tvalue\n")
        }
    });
    let tinymix = Tinymix::new(config(0), Arc::new(runner)).await.unwrap();
    assert_eq!(tinymix.dialect(), Dialect::Upstream);

    let err = tinymix.get_state().await.unwrap_err();
    assert!(err.to_string().contains("upstream"));
}
