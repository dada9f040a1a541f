use gxr::GxrError;

use crate::ui::primitives::icon::Icon;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Error.colored(supports_color, supports_unicode);
    let mut out = format!("{} {}\n", icon, err);
    if let Some(hint) = err.downcast_ref::<GxrError>().and_then(GxrError::hint) {
        out.push_str(&format!("  FIX: {}\n", hint));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color && !caps.is_ci, caps.supports_unicode)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn duplicate_component_includes_fix() {
        let err = anyhow::Error::new(GxrError::DuplicateComponent {
            id: "Counter".to_string(),
            first: PathBuf::from("Counter.jsx"),
            second: PathBuf::from("Counter.tsx"),
        });

        let rendered = format_error(&err, false, false);
        assert!(rendered.starts_with("[FAIL] duplicate component 'Counter'"));
        assert!(rendered.contains("FIX:"));
    }

    #[test]
    fn empty_bundler_command_includes_fix() {
        let err = anyhow::Error::new(GxrError::EmptyBundlerCommand);
        assert!(format_error(&err, false, false).contains("FIX: Set [bundler] command"));
    }

    #[test]
    fn plain_errors_have_no_fix() {
        let err = anyhow::anyhow!("something broke");
        assert_eq!(format_error(&err, false, true), "✗ something broke\n");
    }
}
