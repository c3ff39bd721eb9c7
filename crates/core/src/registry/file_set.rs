use std::path::Path;

use tracing::debug;

use super::BlockRegistry;
use crate::error::{Error, Result};
use crate::patterns::{
    BlockFilePattern, CppHeaderPattern, CppImplPattern, GrcXmlPattern, GrcYamlPattern,
    PythonModulePattern,
};
use crate::types::{BlockFile, FileRole, Namespace};

impl BlockRegistry {
    /// Every on-disk file belonging to `block`, labeled by role, for
    /// display before a rename or removal.
    ///
    /// Unreadable namespace directories contribute nothing; this list is
    /// advisory and the scaffold tool remains the source of truth for
    /// what actually changes.
    pub fn block_files(&self, block: &str) -> Result<Vec<BlockFile>> {
        let block = block.trim();
        if block.is_empty() {
            return Err(Error::EmptyBlockName);
        }

        let mut files = Vec::new();

        let grc_dir = Namespace::BlockDef.dir(&self.root, &self.module_name);
        let grc_prefix = format!("{}_{block}", self.module_name);
        let yaml = GrcYamlPattern::new(&self.module_name);
        let xml = GrcXmlPattern::new(&self.module_name);
        for name in self.try_list(&grc_dir) {
            if name.starts_with(&grc_prefix) && (yaml.matches(&name) || xml.matches(&name)) {
                files.push(BlockFile::new(FileRole::BlockDefinition, grc_dir.join(name)));
            }
        }

        let py_dir = Namespace::PythonModule.dir(&self.root, &self.module_name);
        for name in self.try_list(&py_dir) {
            if name.starts_with(block) && PythonModulePattern.matches(&name) {
                files.push(BlockFile::new(FileRole::Implementation, py_dir.join(name)));
            }
        }

        let header_dir = Namespace::PublicHeader.dir(&self.root, &self.module_name);
        for name in self.try_list(&header_dir) {
            if name.starts_with(block) && CppHeaderPattern.matches(&name) {
                files.push(BlockFile::new(FileRole::PublicHeader, header_dir.join(name)));
            }
        }

        let lib_dir = Namespace::ImplSource.dir(&self.root, &self.module_name);
        for name in self.try_list(&lib_dir) {
            if !name.starts_with(block) {
                continue;
            }
            if CppImplPattern.matches(&name) {
                files.push(BlockFile::new(
                    FileRole::ImplementationSource,
                    lib_dir.join(name),
                ));
            } else if Path::new(&name).extension().is_some_and(|ext| ext == "h") {
                files.push(BlockFile::new(
                    FileRole::ImplementationHeader,
                    lib_dir.join(name),
                ));
            }
        }

        Ok(files)
    }

    fn try_list(&self, dir: &Path) -> Vec<String> {
        self.lister.list(dir).unwrap_or_else(|err| {
            debug!(dir = %dir.display(), %err, "skipping unreadable directory");
            Vec::new()
        })
    }
}
