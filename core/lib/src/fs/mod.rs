//! File serving and file metadata types.

mod file;

pub use file::File;
