use std::path::Path;

use grmod_core::BlockFile;

/// Path shown to the user: relative to the module root when possible.
pub fn relative_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Role-labeled file listing, indented under a block heading.
pub fn print_block_files(files: &[BlockFile], root: &Path) {
    let width = files.iter().map(|f| f.label().len()).max().unwrap_or(0);
    for file in files {
        println!(
            "   {:<width$}  {}",
            file.label(),
            relative_path(&file.path, root),
        );
    }
}

/// Migration hint shown by informational commands when legacy XML
/// definitions remain.
pub fn print_xml_hint(count: usize) {
    if count > 0 {
        println!(
            "\n⚠️  {count} legacy XML definition(s) found; run `grmod convert` to migrate them to YAML"
        );
    }
}
