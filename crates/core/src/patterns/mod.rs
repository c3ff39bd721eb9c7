mod classifier;
mod cpp_header;
mod cpp_impl;
mod grc;
mod pattern;
mod python_module;

pub use classifier::BlockFileClassifier;
pub use cpp_header::{API_HEADER, CppHeaderPattern};
pub use cpp_impl::{CppImplPattern, IMPL_HEADER_SUFFIX, IMPL_SUFFIXES, ImplHeaderPattern};
pub use grc::{GRC_YAML_SUFFIX, GrcXmlPattern, GrcYamlPattern};
pub use pattern::BlockFilePattern;
pub use python_module::{PYTHON_INIT, PythonModulePattern};

use crate::types::Namespace;

/// The `(predicate, extractor)` pair for one namespace.
pub fn namespace_pattern(
    namespace: Namespace,
    module_name: &str,
) -> Box<dyn BlockFilePattern> {
    match namespace {
        Namespace::BlockDef => Box::new(GrcYamlPattern::new(module_name)),
        Namespace::LegacyXml => Box::new(GrcXmlPattern::new(module_name)),
        Namespace::PublicHeader => Box::new(CppHeaderPattern),
        Namespace::ImplSource => Box::new(CppImplPattern),
        Namespace::PythonModule => Box::new(PythonModulePattern),
    }
}
