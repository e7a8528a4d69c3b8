//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::HiitError;

/// Generate a shell completion script for the named shell.
///
/// # Errors
///
/// Returns `HiitError::Config` if the shell name is not recognized.
pub fn completions(shell: &str) -> Result<String, HiitError> {
    let shell = shell_from_str(shell)
        .ok_or_else(|| HiitError::Config(format!("Unsupported shell: {shell}")))?;

    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "hiit", &mut buf);

    String::from_utf8(buf).map_err(|e| HiitError::Config(format!("UTF-8 error: {e}")))
}

/// Get shell from string name.
fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}
