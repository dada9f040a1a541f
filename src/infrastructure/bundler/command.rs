//! External command bundler
//!
//! Runs the configured bundler (esbuild by default) once per component.
//! `{entry}` and `{output}` are substituted anywhere in the arguments.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::{BundleRequest, Bundler, BundlerError};
use crate::error::{GxrError, GxrResult};

pub const ENTRY_PLACEHOLDER: &str = "{entry}";
pub const OUTPUT_PLACEHOLDER: &str = "{output}";

#[derive(Debug, Clone)]
pub struct CommandBundler {
    program: String,
    args: Vec<String>,
}

impl CommandBundler {
    pub fn new(command: &[String]) -> GxrResult<Self> {
        let (program, args) = command
            .split_first()
            .filter(|(program, _)| !program.trim().is_empty())
            .ok_or(GxrError::EmptyBundlerCommand)?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    /// Arguments for one invocation, placeholders filled in
    pub fn render_args(&self, entry: &Path, output: &Path) -> Vec<String> {
        let entry = entry.display().to_string();
        let output = output.display().to_string();
        self.args
            .iter()
            .map(|arg| {
                arg.replace(ENTRY_PLACEHOLDER, &entry)
                    .replace(OUTPUT_PLACEHOLDER, &output)
            })
            .collect()
    }
}

impl Bundler for CommandBundler {
    fn name(&self) -> &str {
        &self.program
    }

    fn bundle(&self, request: &BundleRequest<'_>) -> Result<(), BundlerError> {
        let args = self.render_args(request.entry, request.output);
        tracing::debug!(
            component = %request.component,
            program = %self.program,
            ?args,
            "invoking bundler"
        );

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| BundlerError::Launch {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let message = if stderr.is_empty() {
            format!("{} exited with {}", self.program, output.status)
        } else {
            stderr
        };
        Err(BundlerError::Failed(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ComponentId;

    fn command(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_command_is_rejected() {
        assert!(matches!(
            CommandBundler::new(&[]),
            Err(GxrError::EmptyBundlerCommand)
        ));
        assert!(CommandBundler::new(&command(&["  "])).is_err());
    }

    #[test]
    fn placeholders_are_substituted_inside_arguments() {
        let bundler = CommandBundler::new(&command(&[
            "esbuild",
            "{entry}",
            "--bundle",
            "--outfile={output}",
        ]))
        .unwrap();

        let args = bundler.render_args(Path::new("src/Counter.tsx"), Path::new("out/Counter.js"));

        assert_eq!(bundler.name(), "esbuild");
        assert_eq!(
            args,
            vec!["src/Counter.tsx", "--bundle", "--outfile=out/Counter.js"]
        );
    }

    #[test]
    fn launch_failure_names_the_program() {
        let bundler = CommandBundler::new(&command(&["gxr-no-such-bundler-binary"])).unwrap();
        let id = ComponentId::from_relative_path(Path::new("Counter.tsx")).unwrap();

        let err = bundler
            .bundle(&BundleRequest {
                component: &id,
                entry: Path::new("Counter.tsx"),
                output: Path::new("Counter.js"),
            })
            .unwrap_err();

        assert!(matches!(err, BundlerError::Launch { .. }));
        assert!(err.to_string().contains("gxr-no-such-bundler-binary"));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_captures_stderr() {
        let bundler = CommandBundler::new(&command(&[
            "sh",
            "-c",
            "echo 'Expected \";\" but found \"}\"' >&2; exit 1",
        ]))
        .unwrap();
        let id = ComponentId::from_relative_path(Path::new("Counter.tsx")).unwrap();

        let err = bundler
            .bundle(&BundleRequest {
                component: &id,
                entry: Path::new("Counter.tsx"),
                output: Path::new("Counter.js"),
            })
            .unwrap_err();

        assert_eq!(
            err,
            BundlerError::Failed("Expected \";\" but found \"}\"".to_string())
        );
    }

    #[cfg(unix)]
    #[test]
    fn silent_failure_reports_exit_status() {
        let bundler = CommandBundler::new(&command(&["sh", "-c", "exit 3"])).unwrap();
        let id = ComponentId::from_relative_path(Path::new("Counter.tsx")).unwrap();

        let err = bundler
            .bundle(&BundleRequest {
                component: &id,
                entry: Path::new("Counter.tsx"),
                output: Path::new("Counter.js"),
            })
            .unwrap_err();

        assert!(err.to_string().starts_with("sh exited with"));
    }
}
