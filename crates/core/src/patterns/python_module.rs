use std::path::Path;

use super::pattern::BlockFilePattern;

pub const PYTHON_INIT: &str = "__init__.py";

/// `python/<module>/<block>.py` implementations. The package init file
/// and QA/test files are not blocks.
pub struct PythonModulePattern;

impl BlockFilePattern for PythonModulePattern {
    fn matches(&self, file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .is_some_and(|ext| ext == "py")
            && file_name != PYTHON_INIT
            && !file_name.starts_with("qa_")
            && !file_name.starts_with("test_")
    }

    fn block_name(&self, file_name: &str) -> String {
        file_name[..file_name.len() - 3].to_string()
    }
}
