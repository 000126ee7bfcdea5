pub mod command;
pub mod config;
pub mod era;
pub mod error;
pub mod fossil;
pub mod gateway;
pub mod session;
pub mod text;

// Re-export common error type
pub use error::{CodecrtError, Result};
pub use command::Command;
pub use era::Era;
