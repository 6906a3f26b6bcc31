// Core data models
// These structs represent the domain entities

pub mod task;

pub use task::*;
