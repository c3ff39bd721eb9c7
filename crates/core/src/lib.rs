//! grmod-core - block discovery and naming for GNU Radio out-of-tree modules
//!
//! This crate provides functionality to:
//! - Detect a module's root directory and name from its on-disk layout
//! - Derive the canonical block set from filename conventions across the
//!   module's parallel artifact directories
//! - Resolve user-entered text against that set, as an exact name or a
//!   regular-expression filter
//! - Enumerate every file belonging to a block for display before
//!   destructive operations
//! - Describe the external scaffold/compiler invocations without running them
pub mod command;
pub mod config;
pub mod error;
pub mod module;
pub mod patterns;
pub mod registry;
pub mod resolver;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use command::{
    AddBlockOptions, BlockType, Language, ToolCommand, validate_block_name,
    validate_module_name,
};
pub use config::Config;
pub use module::ModuleInfo;
pub use patterns::BlockFileClassifier;
pub use registry::{BlockRegistry, DirectoryLister, FsDirectoryLister};
pub use resolver::{BlockTarget, resolve};
