pub mod config;
pub mod error;
pub mod llm;
pub mod server;
pub mod translate;

pub use error::{Error, Result};
