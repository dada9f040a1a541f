use anyhow::Result;
use gxr::config::Config;
use gxr::infrastructure::JsonEventSink;
use gxr::presentation::create_build_use_case;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::sink::ConsoleEventSink;
use crate::ui::views::build::{render_build_summary, render_header};

/// One build pass. Exit code 1 when the pass did not commit cleanly.
pub fn cmd_build(config: &Config, ui: &UiContext) -> Result<i32> {
    let use_case = create_build_use_case(config)?;

    let result = if ui.json {
        use_case.run(&JsonEventSink::stdout("build"))
    } else {
        print!(
            "{}",
            render_header(
                Icon::Build,
                "gxr build",
                &[
                    ("Components", config.build.components_dir.display().to_string()),
                    ("Output", config.build.output_dir.display().to_string()),
                ],
                ui.color,
                ui.unicode,
            )
        );
        let result = use_case.run(&ConsoleEventSink::new(*ui));
        print!("{}", render_build_summary(&result, ui.color, ui.unicode));
        result
    };

    Ok(if result.is_success() { 0 } else { 1 })
}
