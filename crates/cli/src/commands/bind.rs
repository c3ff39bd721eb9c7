use std::path::Path;

use anyhow::{Context, Result};

use grmod_core::ToolCommand;

use super::{block_for_file, workspace};
use crate::utils::run_tool;

pub fn bind_command(
    cwd: &Path,
    name: Option<&str>,
    file: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    let ws = workspace(cwd)?;
    let input = match file {
        Some(file) => block_for_file(&ws, file)?,
        None => name
            .context("provide a block name or --file")?
            .to_string(),
    };

    // Bindings only exist for blocks with a public C++ header.
    let candidates = ws.registry.cpp_blocks()?;
    let target = grmod_core::resolve(&candidates, &input)?;
    if target.is_empty() {
        println!("No C++ blocks matched `{input}`");
        return Ok(());
    }

    let command = ToolCommand::bind_block(&ws.config, target.argument())
        .with_working_dir(&ws.module.root);
    run_tool(&command, dry_run)?;
    if !dry_run {
        println!(
            "✅ Bindings generated for {} block(s)",
            target.blocks().len()
        );
    }
    Ok(())
}
