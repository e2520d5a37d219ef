pub mod arrow;
pub mod font;
pub mod renderer;
pub mod surface;

pub use arrow::*;
pub use renderer::*;
pub use surface::*;
