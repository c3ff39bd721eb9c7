use super::{
    BlockFilePattern, CppHeaderPattern, CppImplPattern, GrcYamlPattern, ImplHeaderPattern,
    PythonModulePattern,
};

/// Maps an arbitrary file name to the block it belongs to, trying each
/// namespace convention in a fixed priority order: implementation source,
/// implementation header, public header, Python module, flowgraph
/// definition. Implementation files come first so the `_impl` suffix
/// never leaks into a derived name through the generic header rule.
pub struct BlockFileClassifier {
    patterns: Vec<Box<dyn BlockFilePattern>>,
}

impl BlockFileClassifier {
    pub fn new(module_name: &str) -> Self {
        Self {
            patterns: vec![
                Box::new(CppImplPattern),
                Box::new(ImplHeaderPattern),
                Box::new(CppHeaderPattern),
                Box::new(PythonModulePattern),
                Box::new(GrcYamlPattern::new(module_name)),
            ],
        }
    }

    /// Block name derived from `file_name`, or `None` when no convention
    /// matches.
    pub fn block_name(&self, file_name: &str) -> Option<String> {
        self.patterns
            .iter()
            .find(|pattern| pattern.matches(file_name))
            .map(|pattern| pattern.block_name(file_name))
    }
}
