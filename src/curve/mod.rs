pub mod framing;
pub mod mapping;
pub mod pool;

pub use framing::*;
pub use mapping::*;
pub use pool::*;
