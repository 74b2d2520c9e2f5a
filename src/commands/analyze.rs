//! Analyze command implementation

use std::time::Instant;

use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::scanner::{
    analyze, format_json, format_summary, format_table, total_size, FormatOptions, PathMode,
    ScanOptions,
};

/// Build analyzer options from the command line on top of the config file
pub fn scan_options(args: &AnalyzeArgs, config: &Config) -> ScanOptions {
    let defaults = &config.analyze;

    let mut ignore = defaults.ignore.clone();
    ignore.extend(args.ignore.iter().cloned());

    let path_mode = if args.absolute_ignore || defaults.absolute_ignore {
        PathMode::Absolute
    } else {
        PathMode::Local
    };

    ScanOptions::new()
        .with_ignore(ignore)
        .with_path_mode(path_mode)
        .with_local_root(args.local_root || defaults.local_root)
        .with_print_errors(args.show_errors || defaults.show_errors)
        .with_reverse(args.reverse || defaults.reverse)
}

/// Run the analyze command
pub fn run(args: AnalyzeArgs, config: &Config) -> Result<()> {
    let started = Instant::now();
    let options = scan_options(&args, config);

    tracing::info!(path = %args.path, "Analyzing directory");

    let entries = analyze(&args.path, &options)?;

    let output = if args.json {
        format_json(&entries, true)?
    } else {
        let mut format_options = FormatOptions::new();
        if let Some(n) = args.top {
            format_options = format_options.with_top_n(n);
        }
        format_table(&entries, &format_options)
    };

    println!("{}", output);

    if !args.json && !args.no_summary {
        println!("{}", format_summary(total_size(&entries), started.elapsed()));
    }

    Ok(())
}
