pub mod block_file;
pub mod namespace;

pub use block_file::{BlockFile, FileRole};
pub use namespace::Namespace;
