mod formatter;

pub use formatter::{print_block_files, print_xml_hint, relative_path};
