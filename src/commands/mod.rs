//! Command implementations for movierank

pub mod analyze;
pub mod dispatch;
pub mod export;
pub mod prompt;
pub mod source;
