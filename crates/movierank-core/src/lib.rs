//! Movierank Core Library
//!
//! Parses `Title|Director|Year|Rating` lines, ranks the accepted movies by
//! rating and renders a top-N report with the average rating.
//!
//! The library never touches the filesystem for input: callers hand
//! [`collection::build_collection`] an iterator of lines.

pub mod collection;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod movie;
pub mod ranking;
pub mod report;
pub mod stats;
