pub mod export;
pub mod paths;
pub mod storage;

pub use export::ExportWriter;
pub use paths::{CodecrtPaths, PathError};
