pub mod commands;
pub mod dispatch;
pub mod error;
pub mod output;
pub mod selection;

pub use commands::*;
pub use dispatch::Dispatcher;
pub use error::*;
pub use output::*;
pub use selection::*;
