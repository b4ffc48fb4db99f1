//! Integration tests for rulegraph
//!
//! These tests verify that the CLI, server state and core work together.

use std::process::Command;

use rulegraph_core::{GeneratorOptions, GraphSnapshot, RuleDocument};
use rulegraph_server::{ServerConfig, ServerState};
use tempfile::TempDir;

const INTRUSION_RULE: &str = r#"{
    "visual_detection": { "target_objects": ["person", "fence", "vehicle"] },
    "trigger_logic": {
        "nodes": [
            { "id": "root", "type": "logic", "data": { "logicType": "AND", "label": "" } },
            { "id": "any", "type": "logic", "data": { "logicType": "OR", "label": "" } },
            { "id": "p", "type": "content", "data": { "logicType": "", "label": "person crosses fence" } },
            { "id": "v", "type": "content", "data": { "logicType": "", "label": "vehicle crosses fence" } },
            { "id": "night", "type": "content", "data": { "logicType": "", "label": "" } },
            { "id": "draft", "type": "todo", "data": { "logicType": "", "label": "" } }
        ],
        "edges": [
            { "id": "e1", "source": "root", "target": "any" },
            { "id": "e2", "source": "root", "target": "night" },
            { "id": "e3", "source": "any", "target": "p" },
            { "id": "e4", "source": "any", "target": "v" }
        ],
        "temporal_threshold_seconds": -1
    },
    "alert_message": "Perimeter breach."
}"#;

fn write_rule(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("rule.json");
    std::fs::write(&path, json).unwrap();
    path
}

/// Test that the CLI can be invoked
#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_rulegraph"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Compile trigger logic graphs into renderable expressions"));
}

/// Test that `render` prints one line per root
#[test]
fn test_cli_render_text() {
    let dir = TempDir::new().unwrap();
    let path = write_rule(&dir, INTRUSION_RULE);

    let output = Command::new(env!("CARGO_BIN_EXE_rulegraph"))
        .arg("render")
        .arg(&path)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "root: ( ( person crosses fence OR vehicle crosses fence ) AND No rule entered )",
            "draft: No type selected",
        ]
    );
}

/// Test that `render --format json` emits the wire shape
#[test]
fn test_cli_render_json() {
    let dir = TempDir::new().unwrap();
    let path = write_rule(&dir, INTRUSION_RULE);

    let output = Command::new(env!("CARGO_BIN_EXE_rulegraph"))
        .args(["render", "--format", "json"])
        .arg(&path)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[0]["rootId"], "root");
    assert_eq!(value[0]["tokens"][0]["type"], "logic");
    assert_eq!(value[0]["tokens"][0]["nodeId"], "root");
    assert_eq!(value[1]["tokens"][0]["type"], "todo");
}

/// Test that `render` honours the same placeholder variables as `serve`
#[test]
fn test_cli_render_env_placeholders() {
    let dir = TempDir::new().unwrap();
    let path = write_rule(&dir, INTRUSION_RULE);

    let output = Command::new(env!("CARGO_BIN_EXE_rulegraph"))
        .arg("render")
        .arg(&path)
        .current_dir(dir.path())
        .env("RULEGRAPH_CONTENT_FALLBACK", "untitled rule")
        .env("RULEGRAPH_TODO_PLACEHOLDER", "pick a type")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("AND untitled rule )"));
    assert!(stdout.contains("draft: pick a type"));
}

/// Test that a `.env` file in the working directory is picked up by `render`
#[test]
fn test_cli_render_dotenv_placeholders() {
    let dir = TempDir::new().unwrap();
    let path = write_rule(&dir, INTRUSION_RULE);
    std::fs::write(dir.path().join(".env"), "RULEGRAPH_TODO_PLACEHOLDER=from-dotenv\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_rulegraph"))
        .arg("render")
        .arg(&path)
        .current_dir(dir.path())
        .env_remove("RULEGRAPH_TODO_PLACEHOLDER")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    assert!(String::from_utf8_lossy(&output.stdout).contains("draft: from-dotenv"));
}

/// Test that a missing file fails cleanly
#[test]
fn test_cli_render_missing_file() {
    let dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_rulegraph"))
        .arg("render")
        .arg(dir.path().join("absent.json"))
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
}

/// Test that a cyclic rule is reported instead of looping forever
#[test]
fn test_cli_render_cycle() {
    let dir = TempDir::new().unwrap();
    let path = write_rule(
        &dir,
        r#"{
            "visual_detection": { "target_objects": [] },
            "trigger_logic": {
                "nodes": [
                    { "id": "r", "type": "logic", "data": { "logicType": "AND" } },
                    { "id": "a", "type": "logic", "data": { "logicType": "OR" } }
                ],
                "edges": [
                    { "id": "e1", "source": "r", "target": "a" },
                    { "id": "e2", "source": "a", "target": "a" }
                ],
                "temporal_threshold_seconds": 10
            },
            "alert_message": ""
        }"#,
    );

    let output = Command::new(env!("CARGO_BIN_EXE_rulegraph"))
        .arg("render")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cycle detected at node a"));
}

/// Test that the server state and the core agree on the same document
#[tokio::test]
async fn test_server_state_matches_core() {
    let document = RuleDocument::from_json_str(INTRUSION_RULE).unwrap();
    let options = GeneratorOptions::default();
    let direct = document.expressions(&options).unwrap();

    let config = ServerConfig::from_lookup(|_| None).unwrap();
    let state = ServerState::new(config.options);
    let snapshot = GraphSnapshot::new(
        document.trigger_logic.nodes.clone(),
        document.trigger_logic.edges.clone(),
    );
    let (sequence, held) = state.replace(snapshot).await.unwrap();

    assert_eq!(sequence, 1);
    assert_eq!(held, direct);
    assert_eq!(document.trigger_logic.temporal_threshold(), None);
}
