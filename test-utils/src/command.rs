use std::path::Path;
use std::process::{Command, Output};
use assert_fs::TempDir;

use crate::CONFIG_PATH;

pub fn new_configured_command(bin_path: impl AsRef<Path>, dir: &TempDir) -> Command {
    let mut command = Command::new(bin_path.as_ref());
    command
        .arg(
            format!(
                "--config-file={}",
                dir.join(CONFIG_PATH)
                    .to_str().expect("failed to get config path")
            )
        )
        .env_remove("RUST_LOG");
    command
}

#[derive(Clone, Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Runs `command` and panics with its stderr unless it succeeds.
pub fn run_ok(command: &mut Command) -> CommandOutput {
    let output = command.output().expect("failed to run command");
    let status = output.status;
    let output = CommandOutput::from(output);
    assert!(status.success(), "{command:?} failed with {status}: {}", output.stderr);
    assert!(
        !output.stderr.contains("ERROR"),
        "errors in the log: {}",
        output.stderr,
    );
    output
}
