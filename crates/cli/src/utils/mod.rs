use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use grmod_core::ToolCommand;

/// Print the invocation for `--dry-run`, otherwise execute it and
/// propagate the external exit code.
pub fn run_tool(command: &ToolCommand, dry_run: bool) -> Result<()> {
    if dry_run {
        println!("{}", command.to_shell_command());
        if let Some(dir) = &command.working_dir {
            println!("Working directory: {}", dir.display());
        }
        return Ok(());
    }

    info!("Running: {}", command.to_shell_command());
    let status = command
        .execute()
        .with_context(|| format!("failed to execute: {}", command.to_shell_command()))?;
    if !status.success() {
        std::process::exit(status.code().unwrap_or(1));
    }
    Ok(())
}

/// Ask for confirmation on stdin. Anything but `y`/`yes` declines.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Copyright holder default for new blocks, taken from git when available.
pub fn git_user_name() -> Option<String> {
    let output = std::process::Command::new("git")
        .args(["config", "user.name"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let name = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!name.is_empty()).then_some(name)
}
