pub mod common;
pub mod error;

pub use common::*;
pub use error::*;
