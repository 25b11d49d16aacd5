//! `completions SHELL` — emit a shell completion script for the CLI to stdout.

use clap::Command;
use clap_complete::{generate, Shell};

pub fn run(cmd: &mut Command, shell: Shell) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, &mut std::io::stdout());
}
