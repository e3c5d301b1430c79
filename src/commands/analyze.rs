//! Analyze command: load, rank and report one movie file

use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use movierank_core::collection::build_collection;
use movierank_core::error::Result;
use movierank_core::format::OutputFormat;
use movierank_core::report::{RenderOptions, Report};
use movierank_core::trace_time;

use super::dispatch::CommandContext;
use super::export::write_report;
use super::prompt::prompt_for_path;
use super::source::open_line_source;

/// Run the pipeline for the file named on the command line, or prompt for one
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let cli = ctx.cli;
    let chatty = cli.format == OutputFormat::Human && !cli.quiet;

    let Some(path) = resolve_path(ctx)? else {
        if chatty {
            println!("Goodbye!");
        }
        return Ok(());
    };

    let interrupted = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&interrupted);
    let _ = ctrlc::set_handler(move || {
        handler_flag.store(true, Ordering::SeqCst);
    });

    let mut source = open_line_source(&path, interrupted)?;
    let outcome = build_collection(&mut source, ctx.config.max_records);
    source.finish()?;
    trace_time!(ctx.start, "load", records = outcome.records.len());

    if chatty {
        eprintln!(
            "Loaded {} movies from '{}'",
            outcome.records.len(),
            path.display()
        );
    }

    let collection = outcome.into_collection()?;
    let report = Report::build(&collection, ctx.config.top_n, ctx.config.max_records)?;
    let rendered = report.render(cli.format, RenderOptions { quiet: cli.quiet })?;
    trace_time!(ctx.start, "report");

    if rendered.ends_with('\n') {
        print!("{}", rendered);
    } else {
        println!("{}", rendered);
    }

    if let Some(output) = &cli.output {
        write_report(output, &rendered, cli.format, &path)?;
        if chatty {
            eprintln!("Analysis exported to '{}'", output.display());
        }
    }

    Ok(())
}

fn resolve_path(ctx: &CommandContext) -> Result<Option<PathBuf>> {
    if let Some(path) = &ctx.cli.file {
        return Ok(Some(path.clone()));
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    prompt_for_path(&mut input, &mut io::stdout())
}
