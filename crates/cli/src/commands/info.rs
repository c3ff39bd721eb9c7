use std::path::Path;

use anyhow::Result;

use grmod_core::Namespace;

use super::workspace;
use crate::display::print_xml_hint;

pub fn info_command(cwd: &Path, json: bool) -> Result<()> {
    let ws = workspace(cwd)?;
    let blocks = ws.registry.all_blocks()?;

    if json {
        let payload = serde_json::json!({
            "name": ws.module.name,
            "root": ws.module.root,
            "blocks": blocks.iter().collect::<Vec<_>>(),
            "namespaces": {
                "flowgraph_definitions": ws.registry.grc_blocks()?.len(),
                "legacy_xml_definitions": ws.registry.legacy_blocks()?.len(),
                "public_headers": ws.registry.cpp_blocks()?.len(),
                "implementation_sources": ws.registry.impl_blocks()?.len(),
                "python_modules": ws.registry.py_blocks()?.len(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("📦 Module '{}'", ws.module.name);
    println!("   Root: {}", ws.module.root.display());
    println!("   Blocks: {}", blocks.len());
    for namespace in Namespace::ALL {
        println!(
            "   {:<28} {}",
            format!("{namespace}s:"),
            ws.registry.list_namespace(namespace)?.len()
        );
    }

    if ws.config.check_xml {
        print_xml_hint(ws.registry.legacy_blocks()?.len());
    }
    Ok(())
}
