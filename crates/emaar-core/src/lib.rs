pub mod config;
pub mod error;
pub mod types;

pub use config::EmaarConfig;
pub use error::{EmaarError, Result};
pub use types::*;
