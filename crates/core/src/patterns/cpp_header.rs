use std::path::Path;

use super::pattern::BlockFilePattern;

/// The API export header present in every module; never a block.
pub const API_HEADER: &str = "api.h";

/// `include/gnuradio/<module>/<block>.h` public headers.
pub struct CppHeaderPattern;

impl BlockFilePattern for CppHeaderPattern {
    fn matches(&self, file_name: &str) -> bool {
        file_name != API_HEADER
            && Path::new(file_name)
                .extension()
                .is_some_and(|ext| ext == "h")
    }

    fn block_name(&self, file_name: &str) -> String {
        file_name[..file_name.len() - 2].to_string()
    }
}
