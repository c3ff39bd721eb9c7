use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// A detected OOT module: its root directory and the name that prefixes
/// definition filenames in `grc/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleInfo {
    pub name: String,
    pub root: PathBuf,
}

impl ModuleInfo {
    /// Walk up from `start` looking for the OOT module layout: a `grc`
    /// directory next to `include/gnuradio/<name>`. The single
    /// subdirectory of `include/gnuradio` names the module.
    pub fn detect(start: &Path) -> Result<Self> {
        for dir in start.ancestors() {
            if let Some(name) = module_name_at(dir) {
                debug!(name = %name, root = %dir.display(), "detected module");
                return Ok(Self {
                    name,
                    root: dir.to_path_buf(),
                });
            }
        }
        Err(Error::ModuleNotFound(start.to_path_buf()))
    }
}

fn module_name_at(dir: &Path) -> Option<String> {
    if !dir.join("grc").is_dir() {
        return None;
    }
    let include = dir.join("include").join("gnuradio");
    let mut subdirs = fs::read_dir(&include)
        .ok()?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().into_string().ok());
    let name = subdirs.next()?;
    if subdirs.next().is_some() {
        // More than one candidate; not a layout we can name.
        return None;
    }
    Some(name)
}
