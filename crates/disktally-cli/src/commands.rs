/// Subcommand implementations.
///
/// Report output goes to `out`; the progress line goes to `progress` so
/// machine-readable formats on stdout stay clean.
use crate::args::{Command, FilterArgs, GroupArgs, GroupKey, OutputFormat, RootArg};
use crate::render::{progress_bar, report};
use anyhow::{Context, Result};
use disktally_core::analysis::{RecordFilter, RecordSummary};
use disktally_core::export;
use disktally_core::model::FileRecord;
use disktally_core::scanner::Analyzer;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// How long each poll waits for the scan before redrawing the progress line.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run<W: Write, P: Write>(command: &Command, out: &mut W, progress: &mut P) -> Result<()> {
    match command {
        Command::DiskUsage(args) => disk_usage(args, out),
        Command::Filter(args) => filter(args, out, progress),
        Command::Group(args) => group(args, out, progress),
    }
}

fn disk_usage<W: Write>(args: &RootArg, out: &mut W) -> Result<()> {
    let analyzer = Analyzer::new(&args.root);
    let usage = analyzer.disk_usage()?;
    report::write_disk_usage(out, &args.root, &usage)?;
    Ok(())
}

fn filter<W: Write, P: Write>(args: &FilterArgs, out: &mut W, progress: &mut P) -> Result<()> {
    // Validate the filters before spending time on a scan.
    let criteria = args.criteria();
    criteria.time_range()?;

    let files = scan_with_progress(&args.root.root, progress)?;
    let files = criteria.apply(files)?;
    info!("{} files matched the filters", files.len());

    match args.format {
        OutputFormat::Text => {
            report::write_records(out, &files)?;
            report::write_summary(out, &RecordSummary::of(&files))?;
        }
        OutputFormat::Json => export::write_json(&files, &mut *out)?,
        OutputFormat::Csv => export::write_csv(&files, &mut *out)?,
    }
    Ok(())
}

fn group<W: Write, P: Write>(args: &GroupArgs, out: &mut W, progress: &mut P) -> Result<()> {
    let files = scan_with_progress(&args.root.root, progress)?;
    let mut filter = RecordFilter::new(files);

    match args.by {
        GroupKey::Extension => report::write_groups(out, filter.group_by_extension())?,
        GroupKey::Owner => report::write_groups(out, filter.group_by_owner())?,
        GroupKey::Level => report::write_groups(out, filter.group_by_level())?,
    }
    Ok(())
}

/// Run a scan of `root`, redrawing the progress bar every poll interval.
pub fn scan_with_progress<P: Write>(root: &Path, progress: &mut P) -> Result<Vec<FileRecord>> {
    let mut analyzer = Analyzer::new(root);
    writeln!(progress, "\nAnalyzing directory: '{}'", root.display())?;

    analyzer
        .begin_scan()
        .with_context(|| format!("could not start analysis of '{}'", root.display()))?;
    while !analyzer.poll(POLL_INTERVAL)? {
        progress_bar::draw(progress, analyzer.current_progress())?;
    }
    progress_bar::finish(progress, analyzer.current_progress())?;

    Ok(analyzer.into_files()?)
}
