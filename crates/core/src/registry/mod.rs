use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::patterns::namespace_pattern;
use crate::types::Namespace;

mod file_set;
mod lister;

pub use lister::{DirectoryLister, FsDirectoryLister};

/// Read-only view over a module's block set.
///
/// Nothing is cached: every query re-reads the directory listings, so the
/// view is always current after an external mutation, and callers needing
/// a stable snapshot across several operations must capture a result and
/// reuse it.
pub struct BlockRegistry {
    root: PathBuf,
    module_name: String,
    lister: Box<dyn DirectoryLister>,
}

impl BlockRegistry {
    pub fn new(root: impl Into<PathBuf>, module_name: impl Into<String>) -> Self {
        Self::with_lister(root, module_name, Box::new(FsDirectoryLister))
    }

    pub fn with_lister(
        root: impl Into<PathBuf>,
        module_name: impl Into<String>,
        lister: Box<dyn DirectoryLister>,
    ) -> Self {
        Self {
            root: root.into(),
            module_name: module_name.into(),
            lister,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Block names derived from one namespace, in directory enumeration
    /// order. An unreadable namespace directory is a hard error: once a
    /// module has been detected, the directory is expected to exist.
    pub fn list_namespace(&self, namespace: Namespace) -> Result<Vec<String>> {
        let dir = namespace.dir(&self.root, &self.module_name);
        let pattern = namespace_pattern(namespace, &self.module_name);
        let entries = self
            .lister
            .list(&dir)
            .map_err(|source| Error::MissingDirectory {
                namespace,
                path: dir.clone(),
                source,
            })?;
        debug!(
            namespace = %namespace,
            dir = %dir.display(),
            entries = entries.len(),
            "scanned namespace"
        );
        Ok(entries
            .into_iter()
            .filter(|name| pattern.matches(name))
            .map(|name| pattern.block_name(&name))
            .collect())
    }

    /// The canonical block set: the union of the flowgraph-definition,
    /// public-header and Python-module namespaces. Names appearing in
    /// several namespaces collapse to one block. Legacy XML definitions
    /// are excluded; see [`BlockRegistry::legacy_blocks`].
    pub fn all_blocks(&self) -> Result<BTreeSet<String>> {
        let mut blocks = BTreeSet::new();
        for namespace in Namespace::CONTRIBUTING {
            blocks.extend(self.list_namespace(namespace)?);
        }
        Ok(blocks)
    }

    /// Blocks with a flowgraph definition.
    pub fn grc_blocks(&self) -> Result<Vec<String>> {
        self.list_namespace(Namespace::BlockDef)
    }

    /// Blocks still carrying a legacy XML definition; candidates for
    /// XML-to-YAML migration.
    pub fn legacy_blocks(&self) -> Result<Vec<String>> {
        self.list_namespace(Namespace::LegacyXml)
    }

    /// Blocks with a public C++ header.
    pub fn cpp_blocks(&self) -> Result<Vec<String>> {
        self.list_namespace(Namespace::PublicHeader)
    }

    /// Blocks with a C++ implementation source.
    pub fn impl_blocks(&self) -> Result<Vec<String>> {
        self.list_namespace(Namespace::ImplSource)
    }

    /// Blocks with a Python implementation.
    pub fn py_blocks(&self) -> Result<Vec<String>> {
        self.list_namespace(Namespace::PythonModule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use std::io;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, "").unwrap();
    }

    fn module_layout(blocks_per_dir: &[(&str, &[&str])]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (dir, files) in blocks_per_dir {
            let dir = temp.path().join(dir);
            fs::create_dir_all(&dir).unwrap();
            for file in *files {
                touch(&dir.join(file));
            }
        }
        temp
    }

    #[test]
    fn test_all_blocks_is_a_union() {
        let temp = module_layout(&[
            ("grc", &["audio_fir.block.yml", "audio_fft.block.yml"]),
            ("include/gnuradio/audio", &["fir.h", "api.h"]),
            ("python/audio", &["fir.py", "iir.py", "qa_fir.py", "__init__.py"]),
            ("lib", &["fir_impl.cc", "fir_impl.h"]),
        ]);
        let registry = BlockRegistry::new(temp.path(), "audio");

        let blocks = registry.all_blocks().unwrap();
        let expected: BTreeSet<String> = ["fir", "fft", "iir"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(blocks, expected);
    }

    #[test]
    fn test_namespace_listings() {
        let temp = module_layout(&[
            ("grc", &["audio_fir.block.yml", "audio_old.xml"]),
            ("include/gnuradio/audio", &["fir.h", "api.h"]),
            ("python/audio", &["fir.py", "qa_fir.py"]),
            ("lib", &["fir_impl.cc", "fir_impl.h", "qa_fir.cc"]),
        ]);
        let registry = BlockRegistry::new(temp.path(), "audio");

        assert_eq!(registry.grc_blocks().unwrap(), vec!["fir"]);
        assert_eq!(registry.legacy_blocks().unwrap(), vec!["old"]);
        assert_eq!(registry.cpp_blocks().unwrap(), vec!["fir"]);
        assert_eq!(registry.impl_blocks().unwrap(), vec!["fir"]);
        assert_eq!(registry.py_blocks().unwrap(), vec!["fir"]);
    }

    #[test]
    fn test_missing_directory_is_a_hard_error() {
        let temp = module_layout(&[
            ("grc", &["audio_fir.block.yml"]),
            ("include/gnuradio/audio", &["fir.h"]),
            // no python/audio
        ]);
        let registry = BlockRegistry::new(temp.path(), "audio");

        let err = registry.all_blocks().unwrap_err();
        assert!(matches!(
            err,
            Error::MissingDirectory {
                namespace: Namespace::PythonModule,
                ..
            }
        ));
    }

    #[test]
    fn test_rescan_is_idempotent() {
        let temp = module_layout(&[
            ("grc", &["audio_fir.block.yml"]),
            ("include/gnuradio/audio", &["fir.h"]),
            ("python/audio", &["fir.py"]),
        ]);
        let registry = BlockRegistry::new(temp.path(), "audio");

        assert_eq!(registry.all_blocks().unwrap(), registry.all_blocks().unwrap());
    }

    #[test]
    fn test_rescan_observes_external_mutations() {
        let temp = module_layout(&[
            ("grc", &["audio_fir.block.yml"]),
            ("include/gnuradio/audio", &[]),
            ("python/audio", &[]),
        ]);
        let registry = BlockRegistry::new(temp.path(), "audio");
        assert_eq!(registry.all_blocks().unwrap().len(), 1);

        touch(&temp.path().join("grc/audio_fft.block.yml"));
        assert_eq!(registry.all_blocks().unwrap().len(), 2);
    }

    /// Lister serving canned listings, standing in for the filesystem.
    struct FakeLister(HashMap<PathBuf, Vec<String>>);

    impl DirectoryLister for FakeLister {
        fn list(&self, dir: &Path) -> io::Result<Vec<String>> {
            self.0
                .get(dir)
                .cloned()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }
    }

    #[test]
    fn test_listing_order_is_preserved() {
        let mut listings = HashMap::new();
        listings.insert(
            PathBuf::from("/proj/grc"),
            vec![
                "audio_zeta.block.yml".to_string(),
                "audio_alpha.block.yml".to_string(),
            ],
        );
        let registry =
            BlockRegistry::with_lister("/proj", "audio", Box::new(FakeLister(listings)));

        assert_eq!(registry.grc_blocks().unwrap(), vec!["zeta", "alpha"]);
    }
}
