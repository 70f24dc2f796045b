//! Shell completion generation.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Write the completion script for `cmd` to `out`, under the command's own
/// binary name (falling back to its name).
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    let bin_name = cmd
        .get_bin_name()
        .unwrap_or_else(|| cmd.get_name())
        .to_string();
    generate(shell, cmd, bin_name, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_bash_completion() {
        let mut cmd = Command::new("fibbench").arg(clap::Arg::new("n"));
        let mut buf = Vec::new();
        generate_completion(&mut cmd, Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("fibbench"));
    }

    #[test]
    fn completion_uses_command_name() {
        let mut cmd = Command::new("fibbench-dev").arg(clap::Arg::new("n"));
        let mut buf = Vec::new();
        generate_completion(&mut cmd, Shell::Zsh, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("#compdef fibbench-dev"));
    }

    #[test]
    fn completion_prefers_bin_name() {
        let mut cmd = Command::new("fibbench").bin_name("fb");
        let mut buf = Vec::new();
        generate_completion(&mut cmd, Shell::Fish, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("-c fb"));
    }
}
