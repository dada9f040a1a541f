//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GxrError, GxrResult};

use super::types::Config;
use super::ConfigWarning;

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "gxr.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> GxrResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| GxrError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the explicit config file, else `gxr.toml` under `cwd`, else defaults.
///
/// An explicit path must exist; the implicit file is optional. Environment
/// overrides are applied on top.
pub fn load_or_default(
    explicit: Option<&Path>,
    cwd: &Path,
) -> GxrResult<(Config, Vec<ConfigWarning>)> {
    let path: Option<PathBuf> = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Some(cwd.join(CONFIG_FILE_NAME)).filter(|p| p.is_file()),
    };

    let (config, warnings) = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((config.with_env_overrides(), warnings))
}

/// Apply `GXR_*` overrides read through `lookup`.
///
/// Values that fail to parse are ignored.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup("GXR_COMPONENTS_DIR").filter(|v| !v.is_empty()) {
        config.build.components_dir = PathBuf::from(dir);
    }

    if let Some(dir) = lookup("GXR_OUTPUT_DIR").filter(|v| !v.is_empty()) {
        config.build.output_dir = PathBuf::from(dir);
    }

    if let Some(raw) = lookup("GXR_CONCURRENCY") {
        match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => config.build.concurrency = Some(n),
            _ => tracing::warn!(value = %raw, "ignoring invalid GXR_CONCURRENCY"),
        }
    }

    if let Some(raw) = lookup("GXR_DEBOUNCE_MS") {
        match raw.trim().parse::<u64>() {
            Ok(ms) => config.watch.debounce_ms = ms,
            Err(_) => tracing::warn!(value = %raw, "ignoring invalid GXR_DEBOUNCE_MS"),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "build",
        "components_dir",
        "output_dir",
        "bundle_dir",
        "manifest",
        "concurrency",
        "extensions",
        "bundler",
        "command",
        "watch",
        "debounce_ms",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
