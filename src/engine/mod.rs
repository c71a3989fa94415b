mod core;
mod queue;

pub use self::core::{CleanConfig, CleanEngine, CleanReport};
pub use self::queue::RootQueue;
