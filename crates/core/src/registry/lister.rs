use std::fs;
use std::io;
use std::path::Path;

/// Directory-listing capability injected into the registry so discovery
/// logic can be exercised against synthetic listings in tests.
pub trait DirectoryLister: Send + Sync {
    /// File names (not paths) of the plain files in `dir`, in enumeration
    /// order.
    fn list(&self, dir: &Path) -> io::Result<Vec<String>>;
}

/// Default lister reading the real filesystem.
pub struct FsDirectoryLister;

impl DirectoryLister for FsDirectoryLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }
}
