use std::path::Path;

use anyhow::Result;

use grmod_core::{AddBlockOptions, BlockType, Language, ToolCommand, validate_block_name};

use super::workspace;
use crate::cli::AddArgs;
use crate::utils::{git_user_name, run_tool};

pub fn add_command(cwd: &Path, args: &AddArgs) -> Result<()> {
    let ws = workspace(cwd)?;
    let existing = ws.registry.all_blocks()?;
    validate_block_name(&args.name, &existing)?;

    let block_type: BlockType = args.block_type.parse()?;
    let lang: Language = args.lang.parse()?;
    let options = AddBlockOptions {
        name: args.name.trim().to_string(),
        block_type,
        lang,
        copyright: args.copyright.clone().or_else(git_user_name),
        arg_list: args.arg_list.clone(),
        add_python_qa: args.python_qa,
        add_cpp_qa: args.cpp_qa,
    };

    let command =
        ToolCommand::add_block(&ws.config, &options).with_working_dir(&ws.module.root);
    run_tool(&command, args.dry_run)?;
    if !args.dry_run {
        println!("✅ Block '{}' created", options.name);
    }
    Ok(())
}
