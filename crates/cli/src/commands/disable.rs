use std::path::Path;

use anyhow::Result;

use grmod_core::ToolCommand;

use super::{confirm_target, workspace};
use crate::utils::run_tool;

pub fn disable_command(cwd: &Path, pattern: &str, dry_run: bool, yes: bool) -> Result<()> {
    let ws = workspace(cwd)?;
    let candidates = ws.candidates()?;
    let Some(target) = confirm_target(&ws, &candidates, pattern, "disable", dry_run, yes)?
    else {
        return Ok(());
    };

    let command = ToolCommand::disable_blocks(&ws.config, target.argument())
        .with_working_dir(&ws.module.root);
    run_tool(&command, dry_run)?;
    if !dry_run {
        println!("✅ Disabled {} block(s)", target.blocks().len());
    }
    Ok(())
}
