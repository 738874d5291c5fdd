pub mod baseline;
pub mod input;
pub mod result;

pub use baseline::*;
pub use input::*;
pub use result::*;
