#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(unused_must_use)]
pub mod curve;
pub mod render;
pub mod types;
pub mod utils;
