use std::path::Path;

use anyhow::{Context, Result};

use grmod_core::ToolCommand;

use super::{block_for_file, workspace};
use crate::utils::run_tool;

pub fn makeyaml_command(
    cwd: &Path,
    pattern: Option<&str>,
    file: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    let ws = workspace(cwd)?;
    let input = match file {
        Some(file) => block_for_file(&ws, file)?,
        None => pattern
            .context("provide a block name or --file")?
            .to_string(),
    };

    // YAML stubs are generated from C++ implementations.
    let candidates = ws.registry.impl_blocks()?;
    let target = grmod_core::resolve(&candidates, &input)?;
    if target.is_empty() {
        println!("No block implementations matched `{input}`");
        return Ok(());
    }

    let command = ToolCommand::make_yaml(&ws.config, target.argument())
        .with_working_dir(&ws.module.root);
    run_tool(&command, dry_run)
}
