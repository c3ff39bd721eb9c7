mod add;
mod bind;
mod convert;
mod disable;
mod flowgraph;
mod info;
mod makeyaml;
mod newmod;
mod remove;
mod rename;
mod tree;

pub use add::add_command;
pub use bind::bind_command;
pub use convert::convert_command;
pub use disable::disable_command;
pub use flowgraph::{compile_command, open_command, run_command};
pub use info::info_command;
pub use makeyaml::makeyaml_command;
pub use newmod::newmod_command;
pub use remove::remove_command;
pub use rename::rename_command;
pub use tree::tree_command;

use std::path::Path;

use anyhow::{Context, Result};
use grmod_core::{BlockFileClassifier, BlockRegistry, BlockTarget, Config, ModuleInfo};

use crate::display::print_block_files;
use crate::utils::confirm;

/// Everything a module-scoped command needs: the configuration in effect,
/// the detected module, and a registry over it.
pub struct Workspace {
    pub config: Config,
    pub module: ModuleInfo,
    pub registry: BlockRegistry,
}

pub fn workspace(cwd: &Path) -> Result<Workspace> {
    let config = Config::load(cwd)?;
    let module = ModuleInfo::detect(cwd)?;
    let registry = BlockRegistry::new(module.root.clone(), module.name.clone());
    Ok(Workspace {
        config,
        module,
        registry,
    })
}

impl Workspace {
    /// Candidate list for target resolution, in stable sorted order.
    pub fn candidates(&self) -> Result<Vec<String>> {
        Ok(self.registry.all_blocks()?.into_iter().collect())
    }
}

/// Block named by a file the user pointed at, via the combined filename
/// classifier.
pub(crate) fn block_for_file(ws: &Workspace, file: &Path) -> Result<String> {
    let file_name = file
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("`{}` has no usable file name", file.display()))?;
    BlockFileClassifier::new(&ws.module.name)
        .block_name(file_name)
        .with_context(|| {
            format!("`{file_name}` does not follow any block filename convention")
        })
}

/// Resolve a pattern against the given candidates, show every affected
/// block with its files, and ask for confirmation. `None` means nothing
/// matched or the user declined.
pub(crate) fn confirm_target(
    ws: &Workspace,
    candidates: &[String],
    pattern: &str,
    verb: &str,
    dry_run: bool,
    yes: bool,
) -> Result<Option<BlockTarget>> {
    let target = grmod_core::resolve(candidates, pattern)?;
    if target.is_empty() {
        println!("No blocks matched `{pattern}`");
        return Ok(None);
    }

    println!("About to {verb} {} block(s):", target.blocks().len());
    for name in target.blocks() {
        println!("{name}");
        print_block_files(&ws.registry.block_files(name)?, ws.registry.root());
    }

    if dry_run || yes || confirm(&format!("Proceed with {verb}?"))? {
        Ok(Some(target))
    } else {
        println!("Aborted");
        Ok(None)
    }
}
