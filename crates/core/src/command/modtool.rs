use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ToolCommand;
use crate::config::Config;
use crate::error::{Error, Result};

/// Block archetypes understood by the scaffold tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    General,
    Sync,
    Decimator,
    Interpolator,
    Source,
    Sink,
    TaggedStream,
    Hier,
    Noblock,
}

impl BlockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::General => "general",
            BlockType::Sync => "sync",
            BlockType::Decimator => "decimator",
            BlockType::Interpolator => "interpolator",
            BlockType::Source => "source",
            BlockType::Sink => "sink",
            BlockType::TaggedStream => "tagged_stream",
            BlockType::Hier => "hier",
            BlockType::Noblock => "noblock",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "general" => Ok(BlockType::General),
            "sync" => Ok(BlockType::Sync),
            "decimator" => Ok(BlockType::Decimator),
            "interpolator" => Ok(BlockType::Interpolator),
            "source" => Ok(BlockType::Source),
            "sink" => Ok(BlockType::Sink),
            "tagged_stream" => Ok(BlockType::TaggedStream),
            "hier" => Ok(BlockType::Hier),
            "noblock" => Ok(BlockType::Noblock),
            other => Err(Error::InvalidName {
                what: "block type",
                name: other.to_string(),
                reason: "expected one of general, sync, decimator, interpolator, source, \
                         sink, tagged_stream, hier, noblock"
                    .to_string(),
            }),
        }
    }
}

/// Implementation language for a new block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Cpp,
    Python,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::Python => "python",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cpp" | "c++" => Ok(Language::Cpp),
            "python" | "py" => Ok(Language::Python),
            other => Err(Error::InvalidName {
                what: "language",
                name: other.to_string(),
                reason: "expected cpp or python".to_string(),
            }),
        }
    }
}

/// Everything the scaffold tool needs to create one block.
#[derive(Debug, Clone)]
pub struct AddBlockOptions {
    pub name: String,
    pub block_type: BlockType,
    pub lang: Language,
    pub copyright: Option<String>,
    pub arg_list: Option<String>,
    pub add_python_qa: bool,
    pub add_cpp_qa: bool,
}

impl ToolCommand {
    fn modtool(config: &Config, args: Vec<String>) -> Self {
        Self::new(&config.modtool_cmd, args)
    }

    /// `newmod <name>` - create a new OOT module skeleton.
    pub fn newmod(config: &Config, module_name: &str) -> Self {
        Self::modtool(config, vec!["newmod".to_string(), module_name.to_string()])
    }

    /// `add` - create a new block inside the current module.
    pub fn add_block(config: &Config, options: &AddBlockOptions) -> Self {
        let mut args = vec![
            "add".to_string(),
            "--block-type".to_string(),
            options.block_type.to_string(),
            "--lang".to_string(),
            options.lang.to_string(),
        ];
        if let Some(copyright) = &options.copyright {
            args.push("--copyright".to_string());
            args.push(copyright.clone());
        }
        if let Some(arg_list) = &options.arg_list {
            args.push("--argument-list".to_string());
            args.push(arg_list.clone());
        }
        if options.add_python_qa {
            args.push("--add-python-qa".to_string());
        }
        if options.add_cpp_qa {
            args.push("--add-cpp-qa".to_string());
        }
        args.push(options.name.clone());
        Self::modtool(config, args)
    }

    /// `rename <old> <new>` - rename a block across every namespace.
    pub fn rename_block(config: &Config, old_name: &str, new_name: &str) -> Self {
        Self::modtool(
            config,
            vec![
                "rename".to_string(),
                old_name.to_string(),
                new_name.to_string(),
            ],
        )
    }

    /// `rm <pattern>` - remove every block the pattern matches.
    pub fn remove_blocks(config: &Config, pattern: &str) -> Self {
        Self::modtool(config, vec!["rm".to_string(), pattern.to_string()])
    }

    /// `disable <pattern>` - comment blocks out of the build.
    pub fn disable_blocks(config: &Config, pattern: &str) -> Self {
        Self::modtool(config, vec!["disable".to_string(), pattern.to_string()])
    }

    /// `bind <name>` - regenerate Python bindings for a block.
    pub fn bind_block(config: &Config, name: &str) -> Self {
        Self::modtool(config, vec!["bind".to_string(), name.to_string()])
    }

    /// `makeyaml <pattern>` - generate a YAML stub from an implementation.
    pub fn make_yaml(config: &Config, pattern: &str) -> Self {
        Self::modtool(config, vec!["makeyaml".to_string(), pattern.to_string()])
    }

    /// `update <name>` - convert a legacy XML definition to YAML;
    /// `--complete` also converts flowgraph snippets.
    pub fn convert_xml(config: &Config, name: &str, complete: bool) -> Self {
        let mut args = vec!["update".to_string()];
        if complete {
            args.push("--complete".to_string());
        }
        args.push(name.to_string());
        Self::modtool(config, args)
    }
}

/// Naming rule for new blocks: ASCII letters, digits and underscores,
/// and no collision with an existing block.
pub fn validate_block_name(name: &str, existing: &BTreeSet<String>) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::EmptyBlockName);
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(Error::InvalidName {
            what: "block",
            name: name.to_string(),
            reason: "only ASCII letters, digits and underscores are allowed".to_string(),
        });
    }
    if existing.contains(name) {
        return Err(Error::InvalidName {
            what: "block",
            name: name.to_string(),
            reason: "a block with that name already exists".to_string(),
        });
    }
    Ok(())
}

/// Naming rule for new modules: ASCII letters, digits and `. - _`.
pub fn validate_module_name(name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::EmptyBlockName);
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
    {
        return Err(Error::InvalidName {
            what: "module",
            name: name.to_string(),
            reason: "only ASCII letters, digits and the characters . - _ are allowed"
                .to_string(),
        });
    }
    Ok(())
}
