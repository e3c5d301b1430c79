//! Command dispatch logic for movierank

use std::time::Instant;

use crate::cli::Cli;
use movierank_core::error::Result;
use tracing::debug;

mod command;

pub use command::CommandContext;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start)?;

    debug!(
        elapsed = ?start.elapsed(),
        max_records = ctx.config.max_records,
        top_n = ctx.config.top_n,
        "resolve_config"
    );

    super::analyze::execute(&ctx)
}
