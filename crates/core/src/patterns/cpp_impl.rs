use super::pattern::BlockFilePattern;

pub const IMPL_SUFFIXES: [&str; 3] = ["_impl.cc", "_impl.cpp", "_impl.cxx"];
pub const IMPL_HEADER_SUFFIX: &str = "_impl.h";

/// `lib/<block>_impl.{cc,cpp,cxx}` implementation sources.
pub struct CppImplPattern;

impl BlockFilePattern for CppImplPattern {
    fn matches(&self, file_name: &str) -> bool {
        IMPL_SUFFIXES
            .iter()
            .any(|suffix| file_name.ends_with(suffix))
    }

    fn block_name(&self, file_name: &str) -> String {
        let stem = file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(file_name);
        stem.strip_suffix("_impl").unwrap_or(stem).to_string()
    }
}

/// `lib/<block>_impl.h` companion headers. Must be tried before the
/// generic public-header rule, which would otherwise keep the `_impl`
/// suffix in the derived name.
pub struct ImplHeaderPattern;

impl BlockFilePattern for ImplHeaderPattern {
    fn matches(&self, file_name: &str) -> bool {
        file_name.ends_with(IMPL_HEADER_SUFFIX)
    }

    fn block_name(&self, file_name: &str) -> String {
        file_name[..file_name.len() - IMPL_HEADER_SUFFIX.len()].to_string()
    }
}
