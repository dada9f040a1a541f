//! Subcommand implementations

use std::path::Path;

use anyhow::Result;
use gxr::config::{load_or_default, Config};
use gxr::presentation::{Cli, Commands};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub mod build;
pub mod watch;

/// Run the parsed command; returns the process exit code
pub fn dispatch(cli: Cli) -> Result<i32> {
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);

    match cli.command {
        Commands::Build { args } => {
            let config = args.apply(load_config(cli.config.as_deref(), &ui, "build")?);
            build::cmd_build(&config, &ui)
        }
        Commands::Watch { args, debounce_ms } => {
            let mut config = args.apply(load_config(cli.config.as_deref(), &ui, "watch")?);
            if let Some(ms) = debounce_ms {
                config.watch.debounce_ms = ms;
            }
            watch::cmd_watch(&config, &ui)?;
            Ok(0)
        }
    }
}

/// Load layered config and surface unknown-key warnings
fn load_config(explicit: Option<&Path>, ui: &UiContext, command: &str) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    let (config, warnings) = load_or_default(explicit, &cwd)?;

    for warning in &warnings {
        if ui.json {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "warning",
                "command": command,
                "message": warning.to_string(),
            }));
        } else {
            eprintln!(
                "{} {}",
                Icon::Warning.colored(ui.color, ui.unicode),
                warning
            );
        }
    }

    Ok(config)
}
