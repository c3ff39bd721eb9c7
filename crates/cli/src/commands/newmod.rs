use std::path::Path;

use anyhow::{Result, bail};

use grmod_core::{Config, ToolCommand, validate_module_name};

use crate::utils::run_tool;

pub fn newmod_command(
    cwd: &Path,
    name: &str,
    dir: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    validate_module_name(name)?;
    let config = Config::load(cwd)?;

    let parent = dir.unwrap_or(cwd);
    let target = parent.join(format!("gr-{name}"));
    if target.exists() {
        bail!("directory `{}` already exists", target.display());
    }

    let command = ToolCommand::newmod(&config, name).with_working_dir(parent);
    run_tool(&command, dry_run)?;
    if !dry_run {
        println!("✅ New module '{name}' created in {}", target.display());
    }
    Ok(())
}
