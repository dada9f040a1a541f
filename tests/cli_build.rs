//! E2E tests for `gxr build`
//!
//! A shell-script bundler stands in for esbuild, so these run on Unix only.

#![cfg(unix)]

mod common;

use common::*;
use std::fs;

#[test]
fn marked_component_is_bundled_and_unmarked_is_not() {
    let env = TestEnv::new();
    env.write_component("Counter.tsx", COUNTER);
    env.write_component("Header.tsx", HEADER);

    let result = env.run(&["build"]);

    assert_eq!(result.exit_code, 0, "stderr: {}", result.stderr);
    let manifest = env.manifest_json();
    let components = manifest["components"].as_object().unwrap();
    assert_eq!(components.len(), 1);
    let counter = &components["Counter"];
    assert_eq!(counter["file"], "hydrate/Counter.js");
    assert_eq!(counter["exports"], serde_json::json!(["default"]));
    assert!(counter["hash"].as_str().unwrap().starts_with("sha256:"));

    let artifact = fs::read_to_string(env.path("public/hydrate/Counter.js")).unwrap();
    assert!(artifact.starts_with("/* bundled */"));
}

#[test]
fn missing_components_dir_exits_zero_with_empty_manifest() {
    let env = TestEnv::new();
    fs::remove_dir_all(env.components()).unwrap();

    let result = env.run(&["build"]);

    assert_eq!(result.exit_code, 0, "stderr: {}", result.stderr);
    assert!(result.stderr.contains("components directory not found"));
    assert_eq!(
        env.manifest_json(),
        serde_json::json!({"version": 1, "components": {}})
    );
}

#[test]
fn one_failure_exits_one_and_keeps_manifest() {
    let env = TestEnv::new();
    env.write_component("Counter.tsx", COUNTER);
    assert_eq!(env.run(&["build"]).exit_code, 0);
    let before = env.manifest_bytes().unwrap();

    env.write_component("Other.tsx", COUNTER);
    env.write_component("Broken.tsx", BROKEN);
    let result = env.run(&["build"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("Broken"), "stderr: {}", result.stderr);
    assert!(result.stderr.contains("Expected"));
    assert_eq!(env.manifest_bytes().unwrap(), before);
    assert!(!env.path("public/hydrate/Other.js").exists());
}

#[test]
fn first_build_with_failure_writes_no_manifest() {
    let env = TestEnv::new();
    env.write_component("Counter.tsx", COUNTER);
    env.write_component("Broken.tsx", BROKEN);

    let result = env.run(&["build"]);

    assert_eq!(result.exit_code, 1);
    assert!(env.manifest_bytes().is_none());
}

#[test]
fn rebuild_without_changes_is_identical() {
    let env = TestEnv::new();
    env.write_component("Counter.tsx", COUNTER);
    env.write_component("forms/Input.jsx", COUNTER);

    assert_eq!(env.run(&["build"]).exit_code, 0);
    let first = env.manifest_bytes().unwrap();
    assert_eq!(env.run(&["build"]).exit_code, 0);

    assert_eq!(env.manifest_bytes().unwrap(), first);
}

#[test]
fn json_mode_streams_build_events() {
    let env = TestEnv::new();
    env.write_component("Counter.tsx", COUNTER);

    let result = env.run(&["build", "--json"]);

    assert_eq!(result.exit_code, 0);
    let events: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert!(events.iter().all(|e| e["command"] == "build"));
    assert_eq!(events.first().unwrap()["event"], "start");
    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["status"], "success");
}

fn json_events(stdout: &str) -> Vec<serde_json::Value> {
    stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn json_mode_reports_duplicate_component() {
    let env = TestEnv::new();
    env.write_component("Counter.tsx", COUNTER);
    env.write_component("Counter.jsx", COUNTER);

    let result = env.run(&["build", "--json"]);

    assert_eq!(result.exit_code, 1);
    let events = json_events(&result.stdout);
    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["status"], "failed");
    let error = last["error"].as_str().unwrap();
    assert!(error.contains("duplicate component 'Counter'"), "{}", error);
    assert!(error.contains("Counter.jsx") && error.contains("Counter.tsx"));
    assert!(env.manifest_bytes().is_none());
}

#[test]
fn console_mode_shows_fix_for_duplicate_component() {
    let env = TestEnv::new();
    env.write_component("Counter.tsx", COUNTER);
    env.write_component("Counter.jsx", COUNTER);

    let result = env.run(&["build"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("Build failed: duplicate component 'Counter'"));
    assert!(result.stdout.contains("FIX: Rename or remove one of the files"));
}

#[test]
fn unchanged_components_are_reused_on_rebuild() {
    let env = TestEnv::new();
    env.write_component("Counter.tsx", COUNTER);
    assert_eq!(env.run(&["build"]).exit_code, 0);

    let result = env.run(&["build", "--json"]);

    assert_eq!(result.exit_code, 0);
    let events = json_events(&result.stdout);
    assert!(events
        .iter()
        .any(|e| e["event"] == "item_reused" && e["component"] == "Counter"));
    assert!(events.iter().all(|e| e["event"] != "item_built"));
}

#[test]
fn flags_override_config_directories() {
    let env = TestEnv::new();
    fs::create_dir_all(env.path("src/islands")).unwrap();
    fs::write(env.path("src/islands/Map.tsx"), COUNTER).unwrap();

    let result = env.run(&["build", "--components", "src/islands", "--output", "dist"]);

    assert_eq!(result.exit_code, 0, "stderr: {}", result.stderr);
    let manifest: serde_json::Value =
        serde_json::from_slice(&fs::read(env.path("dist/gxr-manifest.json")).unwrap()).unwrap();
    assert!(manifest["components"]["Map"].is_object());
}

#[test]
fn env_overrides_output_dir() {
    let env = TestEnv::new();
    env.write_component("Counter.tsx", COUNTER);

    let output = env
        .command()
        .arg("build")
        .env("GXR_OUTPUT_DIR", "static")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(env.path("static/gxr-manifest.json").is_file());
}

#[test]
fn unknown_config_key_warns_with_suggestion() {
    let env = TestEnv::new();
    let mut config = fs::read_to_string(env.path("gxr.toml")).unwrap();
    config.push_str("\n[build]\ncomponents_dri = \"client/components\"\n");
    fs::write(env.path("gxr.toml"), config).unwrap();

    let result = env.run(&["build"]);

    assert_eq!(result.exit_code, 0);
    assert!(result.stderr.contains("components_dri"));
    assert!(result.stderr.contains("did you mean 'components_dir'"));
}

#[test]
fn missing_explicit_config_fails() {
    let env = TestEnv::new();

    let result = env.run(&["build", "--config", "nope.toml"]);

    assert_eq!(result.exit_code, 1);
}
