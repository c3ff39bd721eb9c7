use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The five parallel artifact kinds a block can appear as inside a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    /// Flowgraph definition, `grc/<module>_<block>.block.yml`
    BlockDef,
    /// Deprecated markup definition, `grc/<module>_<block>.xml`
    LegacyXml,
    /// Public C++ header, `include/gnuradio/<module>/<block>.h`
    PublicHeader,
    /// C++ implementation, `lib/<block>_impl.{cc,cpp,cxx}` plus `_impl.h`
    ImplSource,
    /// Python implementation, `python/<module>/<block>.py`
    PythonModule,
}

impl Namespace {
    /// Namespaces contributing to the default "all blocks" view. Legacy
    /// XML definitions are excluded; they are surfaced separately as
    /// migration candidates.
    pub const CONTRIBUTING: [Namespace; 3] = [
        Namespace::BlockDef,
        Namespace::PublicHeader,
        Namespace::PythonModule,
    ];

    /// Every namespace, in the order listings are displayed.
    pub const ALL: [Namespace; 5] = [
        Namespace::BlockDef,
        Namespace::LegacyXml,
        Namespace::PublicHeader,
        Namespace::ImplSource,
        Namespace::PythonModule,
    ];

    /// Directory holding this namespace's files, relative to the module root.
    pub fn dir(&self, root: &Path, module_name: &str) -> PathBuf {
        match self {
            Namespace::BlockDef | Namespace::LegacyXml => root.join("grc"),
            Namespace::PublicHeader => {
                root.join("include").join("gnuradio").join(module_name)
            }
            Namespace::ImplSource => root.join("lib"),
            Namespace::PythonModule => root.join("python").join(module_name),
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Namespace::BlockDef => "flowgraph definition",
            Namespace::LegacyXml => "legacy XML definition",
            Namespace::PublicHeader => "public header",
            Namespace::ImplSource => "implementation source",
            Namespace::PythonModule => "Python module",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_directories() {
        let root = Path::new("/proj");
        assert_eq!(
            Namespace::BlockDef.dir(root, "audio"),
            PathBuf::from("/proj/grc")
        );
        assert_eq!(
            Namespace::LegacyXml.dir(root, "audio"),
            PathBuf::from("/proj/grc")
        );
        assert_eq!(
            Namespace::PublicHeader.dir(root, "audio"),
            PathBuf::from("/proj/include/gnuradio/audio")
        );
        assert_eq!(
            Namespace::ImplSource.dir(root, "audio"),
            PathBuf::from("/proj/lib")
        );
        assert_eq!(
            Namespace::PythonModule.dir(root, "audio"),
            PathBuf::from("/proj/python/audio")
        );
    }

    #[test]
    fn test_contributing_excludes_legacy_xml() {
        assert!(!Namespace::CONTRIBUTING.contains(&Namespace::LegacyXml));
        assert!(!Namespace::CONTRIBUTING.contains(&Namespace::ImplSource));
    }
}
