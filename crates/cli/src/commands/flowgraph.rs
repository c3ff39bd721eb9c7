use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

use grmod_core::{Config, ModuleInfo, ToolCommand};

use crate::utils::run_tool;

fn flowgraph_file(file: &Path) -> Result<PathBuf> {
    if !file.is_file() {
        bail!("flowgraph file `{}` does not exist", file.display());
    }
    if !file.extension().is_some_and(|ext| ext == "grc") {
        bail!("expected a .grc flowgraph, got `{}`", file.display());
    }
    Ok(file.to_path_buf())
}

/// Open the companion editor on a flowgraph, or on the module directory
/// when no file is given.
pub fn open_command(cwd: &Path, file: Option<&Path>, dry_run: bool) -> Result<()> {
    let config = Config::load(cwd)?;
    let file = file.map(flowgraph_file).transpose()?;
    // The companion is also useful outside a detected module.
    let fallback = match ModuleInfo::detect(cwd) {
        Ok(module) => module.root,
        Err(_) => cwd.to_path_buf(),
    };
    let command = ToolCommand::companion(&config, file.as_deref(), &fallback);
    run_tool(&command, dry_run)
}

pub fn compile_command(
    cwd: &Path,
    file: Option<&Path>,
    all: bool,
    dry_run: bool,
) -> Result<()> {
    let config = Config::load(cwd)?;

    if all {
        let module = ModuleInfo::detect(cwd)?;
        let mut compiled = 0;
        for entry in WalkDir::new(&module.root)
            .into_iter()
            .filter_map(|entry| entry.ok())
        {
            if entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "grc")
            {
                let command = ToolCommand::compiler(&config, entry.path(), false);
                run_tool(&command, dry_run)?;
                compiled += 1;
            }
        }
        if compiled == 0 {
            println!("No flowgraph files found under {}", module.root.display());
        }
        return Ok(());
    }

    let file = file.context("provide a flowgraph file or --all")?;
    let file = flowgraph_file(file)?;
    let command = ToolCommand::compiler(&config, &file, false);
    run_tool(&command, dry_run)?;
    if !dry_run {
        println!("✅ Compiled {}", file.display());
    }
    Ok(())
}

pub fn run_command(cwd: &Path, file: &Path, dry_run: bool) -> Result<()> {
    let config = Config::load(cwd)?;
    let file = flowgraph_file(file)?;
    let command = ToolCommand::compiler(&config, &file, true);
    run_tool(&command, dry_run)
}
