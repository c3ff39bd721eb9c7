use std::path::Path;

use anyhow::Result;

use grmod_core::ToolCommand;

use super::workspace;
use crate::utils::{confirm, run_tool};

pub fn convert_command(
    cwd: &Path,
    pattern: Option<&str>,
    complete: bool,
    dry_run: bool,
    yes: bool,
) -> Result<()> {
    let ws = workspace(cwd)?;
    let candidates = ws.registry.legacy_blocks()?;
    if candidates.is_empty() {
        println!("No legacy XML definitions found");
        return Ok(());
    }

    let selected: Vec<String> = match pattern {
        Some(input) => {
            let target = grmod_core::resolve(&candidates, input)?;
            if target.is_empty() {
                println!("No migration candidates matched `{input}`");
                return Ok(());
            }
            target.blocks().to_vec()
        }
        None => candidates,
    };

    println!("Converting {} legacy definition(s) to YAML:", selected.len());
    for name in &selected {
        println!("{name}");
    }
    if !dry_run && !yes && !confirm("Proceed with conversion?")? {
        println!("Aborted");
        return Ok(());
    }

    for name in &selected {
        let command = ToolCommand::convert_xml(&ws.config, name, complete)
            .with_working_dir(&ws.module.root);
        run_tool(&command, dry_run)?;
    }
    if !dry_run {
        println!("✅ Converted {} definition(s)", selected.len());
    }
    Ok(())
}
