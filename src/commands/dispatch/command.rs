//! Shared context for command execution

use std::time::Instant;

use crate::cli::Cli;
use movierank_core::config::AnalyzerConfig;
use movierank_core::error::Result;

/// Parsed arguments plus the resolved analyzer settings
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: AnalyzerConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    /// Resolve the config file and apply command-line overrides
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = AnalyzerConfig::resolve(cli.config.as_deref())?
            .with_overrides(cli.max_records, cli.top)?;

        Ok(Self { cli, config, start })
    }
}
