use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Role a file plays within a block's on-disk artifact set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileRole {
    BlockDefinition,
    PublicHeader,
    /// Python implementation module
    Implementation,
    ImplementationSource,
    ImplementationHeader,
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FileRole::BlockDefinition => "Block definition",
            FileRole::PublicHeader => "Public header",
            FileRole::Implementation => "Implementation",
            FileRole::ImplementationSource => "Implementation source",
            FileRole::ImplementationHeader => "Implementation header",
        };
        f.write_str(label)
    }
}

/// One concrete file belonging to a block, labeled for display in
/// confirmation prompts and tree listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockFile {
    pub role: FileRole,
    pub path: PathBuf,
}

impl BlockFile {
    pub fn new(role: FileRole, path: PathBuf) -> Self {
        Self { role, path }
    }

    /// Display label for the role, e.g. "Public header".
    pub fn label(&self) -> String {
        self.role.to_string()
    }
}
