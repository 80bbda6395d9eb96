//! The document assembly core: the grouping tree and DOCX rendering.

pub mod assembler;
pub mod grouping;
pub mod typography;

pub use assembler::{assemble, AssembleError, CONTENT_TYPE, DOWNLOAD_FILENAME};
