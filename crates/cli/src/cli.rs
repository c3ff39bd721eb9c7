use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::commands;

/// Command-line companion for GNU Radio out-of-tree modules
#[derive(Parser)]
#[command(name = "grmod")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Work in this directory instead of the current one
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the detected module and per-namespace block counts
    Info {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// List blocks, or every file of the blocks matching a name or pattern
    #[command(visible_alias = "ls")]
    Tree {
        /// Block name or regular expression to expand into its file set
        block: Option<String>,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a new block with the scaffold tool
    Add(AddArgs),
    /// Rename a block across every namespace
    Rename {
        old_name: String,
        new_name: String,

        /// Show the command without executing
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Remove every block matching a name or regular expression
    #[command(visible_alias = "rm")]
    Remove {
        /// Block name or regular expression
        pattern: String,

        /// Show the command without executing
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Comment every block matching a name or pattern out of the build
    Disable {
        /// Block name or regular expression
        pattern: String,

        /// Show the command without executing
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Regenerate Python bindings for a C++ block
    Bind {
        /// Block name or regular expression
        name: Option<String>,

        /// Derive the block from one of its files instead of a name
        #[arg(long, conflicts_with = "name")]
        file: Option<PathBuf>,

        /// Show the command without executing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
    /// Generate a YAML definition stub from a block implementation
    Makeyaml {
        /// Block name or regular expression
        pattern: Option<String>,

        /// Derive the block from one of its files instead of a name
        #[arg(long, conflicts_with = "pattern")]
        file: Option<PathBuf>,

        /// Show the command without executing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
    /// Convert legacy XML block definitions to YAML
    Convert {
        /// Block name or regular expression (defaults to every candidate)
        pattern: Option<String>,

        /// Also convert flowgraph snippets
        #[arg(long)]
        complete: bool,

        /// Show the commands without executing
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Open a flowgraph (or the module directory) in the companion editor
    Open {
        /// Flowgraph file to open
        file: Option<PathBuf>,

        /// Show the command without executing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
    /// Compile a flowgraph
    Compile {
        /// Flowgraph file; omit with --all to compile every flowgraph
        file: Option<PathBuf>,

        /// Compile every .grc file under the module root
        #[arg(long)]
        all: bool,

        /// Show the command without executing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
    /// Compile and run a flowgraph
    Run {
        /// Flowgraph file
        file: PathBuf,

        /// Show the command without executing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
    /// Create a new OOT module skeleton
    Newmod {
        /// Module name; the skeleton lands in `gr-<name>`
        name: String,

        /// Parent directory for the new module (defaults to the working directory)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Show the command without executing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
}

#[derive(Args)]
pub struct AddArgs {
    /// Unique name for the new block
    pub name: String,

    /// Block type (general, sync, decimator, interpolator, source, sink,
    /// tagged_stream, hier, noblock)
    #[arg(short = 't', long, default_value = "general")]
    pub block_type: String,

    /// Implementation language (cpp, python)
    #[arg(short, long, default_value = "cpp")]
    pub lang: String,

    /// Copyright holder recorded in the generated files (defaults to the
    /// git user name)
    #[arg(long)]
    pub copyright: Option<String>,

    /// Comma-separated constructor argument list
    #[arg(long = "args")]
    pub arg_list: Option<String>,

    /// Generate Python QA code
    #[arg(long)]
    pub python_qa: bool,

    /// Generate C++ QA code
    #[arg(long)]
    pub cpp_qa: bool,

    /// Show the command without executing
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let cwd = match self.cwd {
            Some(dir) => dir,
            None => std::env::current_dir().context("failed to get current directory")?,
        };

        match self.command {
            Commands::Info { json } => commands::info_command(&cwd, json),
            Commands::Tree { block, json } => {
                commands::tree_command(&cwd, block.as_deref(), json)
            }
            Commands::Add(args) => commands::add_command(&cwd, &args),
            Commands::Rename {
                old_name,
                new_name,
                dry_run,
                yes,
            } => commands::rename_command(&cwd, &old_name, &new_name, dry_run, yes),
            Commands::Remove {
                pattern,
                dry_run,
                yes,
            } => commands::remove_command(&cwd, &pattern, dry_run, yes),
            Commands::Disable {
                pattern,
                dry_run,
                yes,
            } => commands::disable_command(&cwd, &pattern, dry_run, yes),
            Commands::Bind {
                name,
                file,
                dry_run,
            } => commands::bind_command(&cwd, name.as_deref(), file.as_deref(), dry_run),
            Commands::Makeyaml {
                pattern,
                file,
                dry_run,
            } => commands::makeyaml_command(&cwd, pattern.as_deref(), file.as_deref(), dry_run),
            Commands::Convert {
                pattern,
                complete,
                dry_run,
                yes,
            } => commands::convert_command(&cwd, pattern.as_deref(), complete, dry_run, yes),
            Commands::Open { file, dry_run } => {
                commands::open_command(&cwd, file.as_deref(), dry_run)
            }
            Commands::Compile { file, all, dry_run } => {
                commands::compile_command(&cwd, file.as_deref(), all, dry_run)
            }
            Commands::Run { file, dry_run } => commands::run_command(&cwd, &file, dry_run),
            Commands::Newmod { name, dir, dry_run } => {
                commands::newmod_command(&cwd, &name, dir.as_deref(), dry_run)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
