/// Plain-text reports for records, groups and disk usage.
use disktally_core::analysis::{Group, RecordSummary};
use disktally_core::model::size::{format_count, format_size, to_gib};
use disktally_core::model::FileRecord;
use disktally_core::platform::DiskUsage;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

/// Timestamp layout for listings, e.g. `Tue Mar 28 12:00:00 2023`.
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Shown in place of an empty group key (files without an extension).
const EMPTY_KEY: &str = "(none)";

pub fn write_disk_usage<W: Write>(out: &mut W, root: &Path, usage: &DiskUsage) -> io::Result<()> {
    writeln!(
        out,
        "Disk usage for '{}': {:.2}% used ({:.2} GB of {:.2} GB)",
        root.display(),
        usage.percent_used(),
        to_gib(usage.used),
        to_gib(usage.total),
    )
}

/// One block per record: path, then indented size, owner and mtime.
pub fn write_records<W: Write>(out: &mut W, records: &[FileRecord]) -> io::Result<()> {
    for record in records {
        writeln!(out, "{}", record.path().display())?;
        writeln!(out, "\tSize: {} bytes", record.size())?;
        writeln!(out, "\tOwner: {}", record.owner())?;
        writeln!(
            out,
            "\tLast modified: {}",
            record.modified().format(TIMESTAMP_FORMAT)
        )?;
        writeln!(out)?;
    }
    Ok(())
}

fn file_count_label(count: u64) -> String {
    let noun = if count == 1 { "file" } else { "files" };
    format!("{} {noun}", format_count(count))
}

pub fn write_summary<W: Write>(out: &mut W, summary: &RecordSummary) -> io::Result<()> {
    writeln!(
        out,
        "{}, {}",
        file_count_label(summary.file_count),
        format_size(summary.total_size)
    )
}

/// A `key:` header per group followed by its member paths.
pub fn write_groups<'a, W, K>(out: &mut W, groups: Vec<Group<'a, K>>) -> io::Result<()>
where
    W: Write,
    K: Display,
{
    for group in groups {
        let key = group.key().to_string();
        let label = if key.is_empty() { EMPTY_KEY } else { key.as_str() };
        writeln!(out)?;
        writeln!(out, "{label}:")?;
        for record in group {
            writeln!(out, "\t{}", record.path().display())?;
        }
    }
    Ok(())
}
