use crossterm::style::Stylize;
use gxr::application::BuildResult;
use gxr::domain::ports::BuildEvent;

use crate::ui::primitives::icon::Icon;

/// Title line plus labelled directories
pub fn render_header(
    icon: Icon,
    title: &str,
    items: &[(&str, String)],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if supports_color {
        format!("{}", title.bold())
    } else {
        title.to_string()
    };
    let mut out = format!("{} {}\n", icon.colored(supports_color, supports_unicode), title);
    for (label, value) in items {
        out.push_str(&format!("{}: {}\n", label, value));
    }
    out
}

/// One line for a build event, or `None` when the event is not shown.
///
/// Per-target start lines and pruned files only appear with `-v`.
pub fn render_build_event(
    event: &BuildEvent,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    let icon = |i: Icon| i.colored(supports_color, supports_unicode);

    let line = match event {
        BuildEvent::Started { .. } => return None,
        BuildEvent::Warning { message } => format!("{} {}\n", icon(Icon::Warning), message),
        BuildEvent::Classified { count } => format!(
            "{} Found {} client component{}\n",
            icon(Icon::Progress),
            count,
            if *count == 1 { "" } else { "s" }
        ),
        BuildEvent::TargetStarted { component, .. } => {
            if verbose == 0 {
                return None;
            }
            format!("  {} Bundling {}\n", icon(Icon::Arrow), component)
        }
        BuildEvent::TargetSucceeded {
            component, output, ..
        } => format!("  {} {} -> {}\n", icon(Icon::Success), component, output),
        BuildEvent::TargetReused {
            component, output, ..
        } => format!(
            "  {} {} -> {} (unchanged)\n",
            icon(Icon::Success),
            component,
            output
        ),
        BuildEvent::TargetFailed {
            component, error, ..
        } => format!("  {} {}: {}\n", icon(Icon::Error), component, error),
        BuildEvent::ManifestCommitted { path, entries } => format!(
            "{} Manifest written: {} ({} entr{})\n",
            icon(Icon::Success),
            path.display(),
            entries,
            if *entries == 1 { "y" } else { "ies" }
        ),
        BuildEvent::ManifestSkipped { reason } => {
            format!("{} Manifest not updated: {}\n", icon(Icon::Warning), reason)
        }
        BuildEvent::ArtifactPruned { path } => {
            if verbose == 0 {
                return None;
            }
            format!("  {} Removed {}\n", icon(Icon::Trash), path.display())
        }
        BuildEvent::Completed { .. } => return None,
    };
    Some(line)
}

/// Closing summary for `gxr build`
pub fn render_build_summary(
    result: &BuildResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if let Some(error) = &result.error {
        let mut out = format!(
            "\n{} Build failed: {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            error
        );
        if let Some(hint) = result.hint {
            out.push_str(&format!("  FIX: {}\n", hint));
        }
        return out;
    }

    let failed = result.failed();
    if failed > 0 {
        format!(
            "\n{} Build failed: {} of {} component(s) did not bundle\n",
            Icon::Error.colored(supports_color, supports_unicode),
            failed,
            result.components
        )
    } else if result.reused > 0 {
        format!(
            "\n{} Built {} component(s), {} unchanged\n",
            Icon::Success.colored(supports_color, supports_unicode),
            result.succeeded(),
            result.reused
        )
    } else {
        format!(
            "\n{} Built {} component(s)\n",
            Icon::Success.colored(supports_color, supports_unicode),
            result.succeeded()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn renders_header_with_ascii_icon() {
        let rendered = render_header(
            Icon::Build,
            "gxr build",
            &[("Components", "client/components".to_string())],
            false,
            false,
        );
        assert_eq!(rendered, "[BUILD] gxr build\nComponents: client/components\n");
    }

    #[test]
    fn target_start_only_when_verbose() {
        let event = BuildEvent::TargetStarted {
            index: 0,
            component: "Counter".to_string(),
        };
        assert!(render_build_event(&event, 0, false, false).is_none());
        assert_eq!(
            render_build_event(&event, 1, false, false).unwrap(),
            "  [>] Bundling Counter\n"
        );
    }

    #[test]
    fn failure_line_names_component_and_error() {
        let event = BuildEvent::TargetFailed {
            index: 1,
            component: "Broken".to_string(),
            error: "unexpected token".to_string(),
        };
        assert_eq!(
            render_build_event(&event, 0, false, false).unwrap(),
            "  [FAIL] Broken: unexpected token\n"
        );
    }

    #[test]
    fn manifest_line_pluralizes() {
        let event = BuildEvent::ManifestCommitted {
            path: PathBuf::from("public/gxr-manifest.json"),
            entries: 1,
        };
        assert_eq!(
            render_build_event(&event, 0, false, true).unwrap(),
            "✓ Manifest written: public/gxr-manifest.json (1 entry)\n"
        );
    }

    #[test]
    fn summary_reports_failures() {
        let result = BuildResult {
            components: 2,
            ..BuildResult::default()
        };
        assert!(render_build_summary(&result, false, false).contains("Built 0 component(s)"));

        let errored = BuildResult {
            error: Some("duplicate component 'Counter'".to_string()),
            ..BuildResult::default()
        };
        assert!(render_build_summary(&errored, false, false)
            .contains("[FAIL] Build failed: duplicate component 'Counter'"));
    }

    #[test]
    fn summary_shows_fix_for_pass_errors() {
        let errored = BuildResult {
            error: Some("duplicate component 'Counter'".to_string()),
            hint: Some("Rename or remove one of the files so each component name is unique."),
            ..BuildResult::default()
        };
        let rendered = render_build_summary(&errored, false, false);
        assert!(rendered.ends_with("  FIX: Rename or remove one of the files so each component name is unique.\n"));
    }

    #[test]
    fn reused_target_is_marked_unchanged() {
        let event = BuildEvent::TargetReused {
            index: 0,
            component: "Counter".to_string(),
            output: "hydrate/Counter.js".to_string(),
        };
        assert_eq!(
            render_build_event(&event, 0, false, false).unwrap(),
            "  [OK] Counter -> hydrate/Counter.js (unchanged)\n"
        );
    }
}
