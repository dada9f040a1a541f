//! Common test utilities for gxr CLI tests.
//!
//! Provides `TestEnv`: an isolated project directory with a shell-script
//! bundler and helpers to run the `gxr` binary against it.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Marked component that bundles cleanly
pub const COUNTER: &str = "\"use client\";\n\nexport default function Counter() {\n  return null;\n}\n";

/// Unmarked (server-only) component
pub const HEADER: &str = "export default function Header() {\n  return null;\n}\n";

/// Marked component the test bundler rejects
pub const BROKEN: &str = "'use client'\n// BROKEN\nexport default function Broken( {\n";

/// Copies the entry into the output; fails on sources containing BROKEN
const BUNDLER_SCRIPT: &str = r#"#!/bin/sh
entry="$1"
out="$2"
if grep -q BROKEN "$entry"; then
  echo "$entry: Expected \")\" but found \"{\"" >&2
  exit 1
fi
{ echo "/* bundled */"; cat "$entry"; } > "$out"
"#;

/// Result of running a gxr CLI command
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Isolated project: `client/components`, `public`, `bundle.sh`, `gxr.toml`
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let script = root.path().join("bundle.sh");
        fs::write(&script, BUNDLER_SCRIPT).unwrap();
        fs::create_dir_all(root.path().join("client/components")).unwrap();

        let config = format!(
            "[bundler]\ncommand = [\"sh\", \"{}\", \"{{entry}}\", \"{{output}}\"]\n",
            script.display()
        );
        fs::write(root.path().join("gxr.toml"), config).unwrap();

        Self { root }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn components(&self) -> PathBuf {
        self.path("client/components")
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.path("public/gxr-manifest.json")
    }

    /// Write a component under `client/components`
    pub fn write_component(&self, relative: &str, content: &str) {
        let path = self.components().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn manifest_bytes(&self) -> Option<Vec<u8>> {
        fs::read(self.manifest_path()).ok()
    }

    pub fn manifest_json(&self) -> serde_json::Value {
        let bytes = self.manifest_bytes().expect("manifest should exist");
        serde_json::from_slice(&bytes).unwrap()
    }

    /// A `gxr` command rooted at the project, with GXR_* cleared
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.current_dir(self.root.path())
            .env_remove("GXR_COMPONENTS_DIR")
            .env_remove("GXR_OUTPUT_DIR")
            .env_remove("GXR_CONCURRENCY")
            .env_remove("GXR_DEBOUNCE_MS")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        TestResult::from_output(self.command().args(args).output().unwrap())
    }
}

pub fn bin() -> &'static Path {
    Path::new(env!("CARGO_BIN_EXE_gxr"))
}
