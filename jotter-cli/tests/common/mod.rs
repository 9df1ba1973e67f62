use std::process::{Command, Stdio};
use assert_fs::TempDir;
use test_utils::new_configured_command;

pub const BIN_PATH: &str = env!("CARGO_BIN_EXE_jotter");

pub fn new_command(dir: &TempDir, args: &[&str]) -> Command {
    let mut command = new_configured_command(BIN_PATH, dir);
    command
        .args(args)
        .stdin(Stdio::null());
    command
}
