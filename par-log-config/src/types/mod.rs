//! Configuration types.

mod level;

pub use level::{LogLevel, ParseLevelError};
