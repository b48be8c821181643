//! Shell completions generation.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::QuickAddError;

/// Execute the `completions` command.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, QuickAddError> {
    generate_completions(shell)
}

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, QuickAddError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate_to(&mut buf, shell, &mut cmd);
    String::from_utf8(buf)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

fn generate_to<W: Write>(buf: &mut W, shell: Shell, cmd: &mut clap::Command) {
    clap_complete::generate(shell, cmd, "quickadd", buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let script = generate_completions(Shell::Bash).unwrap();
        assert!(script.contains("quickadd"));
        assert!(script.contains("preview"));
    }

    #[test]
    fn test_zsh_completions() {
        let script = generate_completions(Shell::Zsh).unwrap();
        assert!(script.contains("#compdef quickadd"));
    }
}
