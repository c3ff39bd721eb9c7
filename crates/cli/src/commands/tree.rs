use std::path::Path;

use anyhow::Result;

use super::workspace;
use crate::display::{print_block_files, print_xml_hint};

pub fn tree_command(cwd: &Path, block: Option<&str>, json: bool) -> Result<()> {
    let ws = workspace(cwd)?;
    let blocks = ws.registry.all_blocks()?;
    let cpp = ws.registry.cpp_blocks()?;
    let legacy = ws.registry.legacy_blocks()?;

    // With a block argument the listing narrows to the matching blocks
    // and expands each one into its file set.
    let selected: Vec<String> = match block {
        Some(input) => {
            let candidates: Vec<String> = blocks.iter().cloned().collect();
            let target = grmod_core::resolve(&candidates, input)?;
            if target.is_empty() {
                println!("No blocks matched `{input}`");
                return Ok(());
            }
            target.blocks().to_vec()
        }
        None => blocks.into_iter().collect(),
    };
    let expand = block.is_some();

    if json {
        let mut entries = Vec::new();
        for name in &selected {
            entries.push(serde_json::json!({
                "name": name,
                "cpp": cpp.contains(name),
                "legacy_xml": legacy.contains(name),
                "files": ws.registry.block_files(name)?,
            }));
        }
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!(
        "📦 Module '{}' - {} block(s)",
        ws.module.name,
        selected.len()
    );
    for name in &selected {
        let mut tags = Vec::new();
        if cpp.contains(name) {
            tags.push("cpp");
        }
        if legacy.contains(name) {
            tags.push("xml");
        }
        if tags.is_empty() {
            println!("{name}");
        } else {
            println!("{name} [{}]", tags.join(" "));
        }
        if expand {
            print_block_files(&ws.registry.block_files(name)?, ws.registry.root());
        }
    }

    if ws.config.check_xml {
        print_xml_hint(legacy.len());
    }
    Ok(())
}
