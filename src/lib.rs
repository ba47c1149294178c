pub mod blocks;
pub mod error;
pub mod parser;

pub use error::{Error, Result};
