//! Shell completions command

use std::io::Write;

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::{MergeError, Result};

/// Generate shell completions on stdout
pub fn run(args: CompletionsArgs) -> Result<()> {
    generate(&args.shell, &mut std::io::stdout().lock())
}

fn generate(shell_name: &str, out: &mut dyn Write) -> Result<()> {
    let shell = match shell_name.to_lowercase().as_str() {
        "bash" => clap_complete::Shell::Bash,
        "elvish" => clap_complete::Shell::Elvish,
        "fish" => clap_complete::Shell::Fish,
        "powershell" | "pwsh" => clap_complete::Shell::PowerShell,
        "zsh" => clap_complete::Shell::Zsh,
        _ => {
            return Err(MergeError::UnknownShell {
                shell: shell_name.to_string(),
            });
        }
    };

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "mdmerge", out);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completions_for(shell: &str) -> String {
        let mut buf = Vec::new();
        generate(shell, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_completions_bash() {
        let script = completions_for("bash");
        assert!(script.contains("mdmerge"));
        assert!(script.contains("--separator"));
    }

    #[test]
    fn test_completions_all_shells() {
        for shell in ["elvish", "fish", "powershell", "pwsh", "zsh"] {
            assert!(!completions_for(shell).is_empty(), "no output for {shell}");
        }
    }

    #[test]
    fn test_completions_mixed_case() {
        assert!(!completions_for("Zsh").is_empty());
    }

    #[test]
    fn test_completions_unknown_shell() {
        let mut buf = Vec::new();
        let err = generate("tcsh", &mut buf).unwrap_err();
        assert!(matches!(err, MergeError::UnknownShell { .. }));
        assert!(buf.is_empty());
    }
}
