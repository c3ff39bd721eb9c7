use std::path::Path;

use anyhow::Result;

use grmod_core::{Error, ToolCommand, validate_block_name};

use super::workspace;
use crate::display::print_block_files;
use crate::utils::{confirm, run_tool};

pub fn rename_command(
    cwd: &Path,
    old_name: &str,
    new_name: &str,
    dry_run: bool,
    yes: bool,
) -> Result<()> {
    let ws = workspace(cwd)?;
    let existing = ws.registry.all_blocks()?;
    if !existing.contains(old_name) {
        return Err(Error::BlockNotFound(old_name.to_string()).into());
    }
    validate_block_name(new_name, &existing)?;

    let files = ws.registry.block_files(old_name)?;
    println!(
        "Renaming '{old_name}' to '{new_name}' affects {} file(s):",
        files.len()
    );
    print_block_files(&files, ws.registry.root());

    let command = ToolCommand::rename_block(&ws.config, old_name, new_name)
        .with_working_dir(&ws.module.root);
    if dry_run {
        return run_tool(&command, true);
    }
    if !yes && !confirm(&format!("Rename '{old_name}'?"))? {
        println!("Aborted");
        return Ok(());
    }
    run_tool(&command, false)?;
    println!("✅ Renamed '{old_name}' to '{new_name}'");
    Ok(())
}
