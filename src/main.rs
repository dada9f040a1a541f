//! gxr CLI - hydration bundles for server-rendered React components
//!
//! Usage: gxr <COMMAND>
//!
//! Commands:
//!   build   Bundle every client component and write the manifest
//!   watch   Rebuild whenever a component changes
//!   help    Print help

mod commands;
mod ui;

use clap::error::ErrorKind;
use clap::Parser;
use gxr::presentation::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    gxr::tracing_setup::init_tracing(cli.verbose);

    let json = cli.json;
    let code = match commands::dispatch(cli) {
        Ok(code) => code,
        Err(e) => {
            ui::error::print_error(&e, json);
            1
        }
    };
    std::process::exit(code);
}
