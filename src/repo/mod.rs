pub mod archive;
pub mod task;

pub use archive::*;
pub use task::*;
