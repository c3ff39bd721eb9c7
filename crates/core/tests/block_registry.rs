//! End-to-end discovery tests over a realistic module layout.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use grmod_core::{BlockRegistry, BlockTarget, FileRole, ModuleInfo, Namespace, resolve};
use tempfile::TempDir;

fn touch(path: &Path) {
    fs::write(path, "").unwrap();
}

/// A small but complete OOT module named `audio` with three blocks:
/// `fir` (C++ and Python), `fft` (C++ only) and `iir` (Python only),
/// plus one legacy XML definition for `old_agc`.
fn audio_module() -> TempDir {
    let temp = TempDir::new().unwrap();
    for dir in ["grc", "include/gnuradio/audio", "python/audio", "lib"] {
        fs::create_dir_all(temp.path().join(dir)).unwrap();
    }

    touch(&temp.path().join("grc/audio_fir.block.yml"));
    touch(&temp.path().join("grc/audio_fft.block.yml"));
    touch(&temp.path().join("grc/audio_old_agc.xml"));
    touch(&temp.path().join("grc/CMakeLists.txt"));

    touch(&temp.path().join("include/gnuradio/audio/fir.h"));
    touch(&temp.path().join("include/gnuradio/audio/fft.h"));
    touch(&temp.path().join("include/gnuradio/audio/api.h"));

    touch(&temp.path().join("lib/fir_impl.cc"));
    touch(&temp.path().join("lib/fir_impl.h"));
    touch(&temp.path().join("lib/fft_impl.cpp"));
    touch(&temp.path().join("lib/qa_fir.cc"));

    touch(&temp.path().join("python/audio/fir.py"));
    touch(&temp.path().join("python/audio/iir.py"));
    touch(&temp.path().join("python/audio/qa_fir.py"));
    touch(&temp.path().join("python/audio/__init__.py"));

    temp
}

#[test]
fn detects_module_and_derives_block_set() {
    let temp = audio_module();
    let module = ModuleInfo::detect(&temp.path().join("lib")).unwrap();
    assert_eq!(module.name, "audio");

    let registry = BlockRegistry::new(module.root, module.name);
    let blocks = registry.all_blocks().unwrap();
    let expected: BTreeSet<String> = ["fir", "fft", "iir"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(blocks, expected);
}

#[test]
fn union_bounds_hold() {
    let temp = audio_module();
    let registry = BlockRegistry::new(temp.path(), "audio");

    let all = registry.all_blocks().unwrap();
    let per_namespace: Vec<usize> = Namespace::CONTRIBUTING
        .iter()
        .map(|ns| registry.list_namespace(*ns).unwrap().len())
        .collect();

    let sum: usize = per_namespace.iter().sum();
    let max = per_namespace.iter().copied().max().unwrap();
    assert!(all.len() <= sum);
    assert!(all.len() >= max);
}

#[test]
fn legacy_definitions_surface_separately() {
    let temp = audio_module();
    let registry = BlockRegistry::new(temp.path(), "audio");

    assert_eq!(registry.legacy_blocks().unwrap(), vec!["old_agc"]);
    assert!(!registry.all_blocks().unwrap().contains("old_agc"));
}

#[test]
fn resolution_against_discovered_set() {
    let temp = audio_module();
    let registry = BlockRegistry::new(temp.path(), "audio");
    let candidates: Vec<String> = registry.all_blocks().unwrap().into_iter().collect();

    // An existing name is an exact hit even though it is also a valid
    // regular expression.
    assert_eq!(
        resolve(&candidates, "fir").unwrap(),
        BlockTarget::Exact("fir".to_string())
    );

    // Anything else filters the set.
    let target = resolve(&candidates, "^f").unwrap();
    assert_eq!(target.blocks(), ["fft".to_string(), "fir".to_string()]);
}

#[test]
fn file_set_for_a_full_block() {
    let temp = audio_module();
    let registry = BlockRegistry::new(temp.path(), "audio");

    let mut files = registry.block_files("fir").unwrap();
    files.sort_by(|a, b| a.path.cmp(&b.path));
    let roles: Vec<FileRole> = files.iter().map(|f| f.role).collect();
    assert_eq!(
        roles,
        vec![
            FileRole::BlockDefinition,
            FileRole::PublicHeader,
            FileRole::ImplementationSource,
            FileRole::ImplementationHeader,
            FileRole::Implementation,
        ]
    );
    assert!(files.iter().all(|f| f.path.starts_with(temp.path())));
}
