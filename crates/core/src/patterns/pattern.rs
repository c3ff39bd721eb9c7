/// One filename convention: a predicate deciding whether a file belongs
/// to a namespace, and an extractor deriving the block name from it.
///
/// `block_name` is only meaningful for file names accepted by `matches`;
/// callers must check the predicate first.
pub trait BlockFilePattern {
    fn matches(&self, file_name: &str) -> bool;
    fn block_name(&self, file_name: &str) -> String;
}
