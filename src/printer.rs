use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::sync::OnceLock;

use crate::engine::CleanReport;
use crate::vendor::PruneOutcome;

const RESET: &str = "\x1b[0m";
const FG_GREEN: &str = "\x1b[32m";
const FG_BRIGHT_BLACK: &str = "\x1b[90m";

pub fn info(message: impl AsRef<str>) {
    write_line(io::stdout(), message.as_ref());
}

pub fn warn(message: impl AsRef<str>) {
    write_line(io::stderr(), message.as_ref());
}

pub fn error(message: impl AsRef<str>) {
    write_line(io::stderr(), message.as_ref());
}

fn write_line(mut target: impl Write, message: &str) {
    let _ = writeln!(target, "{}", message);
}

/// One entry per line, nothing else, so the output can be piped.
pub fn print_entries(entries: &[String]) {
    let mut stdout = io::BufWriter::new(io::stdout());
    for entry in entries {
        let _ = writeln!(stdout, "{entry}");
    }
    let _ = stdout.flush();
}

pub fn print_outcome(entry: &Path, outcome: PruneOutcome) {
    info(format_outcome(entry, outcome, colors_enabled()));
}

pub fn print_report(report: &CleanReport) {
    for line in format_report(report) {
        info(line);
    }
}

fn format_outcome(entry: &Path, outcome: PruneOutcome, use_color: bool) -> String {
    match (outcome, use_color) {
        (PruneOutcome::AlreadyClean, true) => format!(
            "{FG_BRIGHT_BLACK}skipped{RESET}  {} (already cleaned)",
            entry.display()
        ),
        (PruneOutcome::AlreadyClean, false) => {
            format!("skipped  {} (already cleaned)", entry.display())
        }
        (PruneOutcome::Cleaned { deleted }, true) => format!(
            "{FG_GREEN}cleaned{RESET}  {} ({} file(s) deleted)",
            entry.display(),
            deleted
        ),
        (PruneOutcome::Cleaned { deleted }, false) => {
            format!("cleaned  {} ({} file(s) deleted)", entry.display(), deleted)
        }
    }
}

fn format_report(report: &CleanReport) -> Vec<String> {
    vec![
        format!("entries:         {}", report.entries),
        format!("modules cleaned: {}", report.modules_cleaned),
        format!("modules skipped: {}", report.modules_skipped),
        format!("files deleted:   {}", report.files_deleted),
        format!("stubs written:   {}", report.stubs_written),
    ]
}

fn colors_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| io::stdout().is_terminal())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_outcome_lines() {
        let entry = Path::new("node_modules/lodash/index.js");
        assert_eq!(
            format_outcome(entry, PruneOutcome::Cleaned { deleted: 3 }, false),
            "cleaned  node_modules/lodash/index.js (3 file(s) deleted)"
        );
        assert_eq!(
            format_outcome(entry, PruneOutcome::AlreadyClean, false),
            "skipped  node_modules/lodash/index.js (already cleaned)"
        );
    }

    #[test]
    fn colored_outcome_is_reset() {
        let line = format_outcome(Path::new("x.js"), PruneOutcome::Cleaned { deleted: 0 }, true);
        assert!(line.starts_with(FG_GREEN));
        assert!(line.contains(RESET));
    }

    #[test]
    fn report_lists_every_counter() {
        let report = CleanReport {
            entries: 5,
            modules_cleaned: 2,
            modules_skipped: 1,
            files_deleted: 40,
            stubs_written: 5,
        };
        let lines = format_report(&report);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3], "files deleted:   40");
    }
}
