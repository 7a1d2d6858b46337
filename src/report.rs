//! Verdict reporting
//!
//! The harness talks to a `Reporter` so output format is independent of execution. The console
//! reporter prints a fixed-width table:
//!
//! ```text
//! Verdict         Test        Time
//! [PASS]         01.in        12ms
//! [FAIL]         02.in         9ms
//! intersection parse error: ...
//! ```

use std::io::{self, Write};
use std::time::Duration;

use raycheck_core::{VerdictRecord, format_elapsed};

use crate::config::ReportStyle;

/// Width of the verdict column (left-aligned).
pub const VERDICT_WIDTH: usize = 12;
/// Width of the test-name column (right-aligned).
pub const TEST_WIDTH: usize = 8;
/// Width of the time column (right-aligned).
pub const TIME_WIDTH: usize = 12;
/// Width the millisecond count is padded to inside the time column.
pub const ELAPSED_WIDTH: usize = 6;

/// Totals for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration: Duration,
}

impl RunSummary {
    pub fn record(&mut self, verdict: &VerdictRecord) {
        self.total += 1;
        if verdict.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Receives verdicts as the harness produces them.
pub trait Reporter {
    /// Called once before the first case runs
    fn on_run_start(&mut self, case_count: usize);

    /// Called after each case, in run order
    fn on_case_complete(&mut self, record: &VerdictRecord);

    /// Called once after the last case
    fn on_run_complete(&mut self, summary: &RunSummary);
}

/// Header row of the verdict table.
pub fn header_row() -> String {
    format!(
        "{:<VERDICT_WIDTH$}{:>TEST_WIDTH$}{:>TIME_WIDTH$}",
        "Verdict", "Test", "Time"
    )
}

/// One verdict row, without color.
pub fn verdict_row(record: &VerdictRecord) -> String {
    format!(
        "{:<VERDICT_WIDTH$}{:>TEST_WIDTH$}{:>TIME_WIDTH$}",
        record.tag(),
        record.test_name,
        format_elapsed(record.elapsed_ms, ELAPSED_WIDTH)
    )
}

/// Fixed-width table on a writer (stdout by default).
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
    style: ReportStyle,
    write_failed: bool,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(style: ReportStyle) -> Self {
        Self::new(io::stdout(), style)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, style: ReportStyle) -> Self {
        Self {
            out,
            style,
            write_failed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // Report output is best effort; a closed stdout must not abort the run.
    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            self.write_error(&e);
        }
    }

    /// Logged once per reporter.
    fn write_error(&mut self, error: &io::Error) {
        if !self.write_failed {
            self.write_failed = true;
            tracing::warn!(error = %error, "cannot write report");
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn on_run_start(&mut self, _case_count: usize) {
        self.line(&header_row());
    }

    fn on_case_complete(&mut self, record: &VerdictRecord) {
        let color = if record.passed { self.style.pass() } else { self.style.fail() };
        let reset = self.style.reset();
        let row = format!("{color}{}{reset}", verdict_row(record));
        self.line(&row);

        if let Some(message) = &record.message {
            let message = format!("{color}{message}{reset}");
            self.line(&message);
        }
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        let mut parts = Vec::new();
        if summary.passed > 0 {
            parts.push(format!("{}{} passed{}", self.style.pass(), summary.passed, self.style.reset()));
        }
        if summary.failed > 0 {
            parts.push(format!("{}{} failed{}", self.style.fail(), summary.failed, self.style.reset()));
        }
        if parts.is_empty() {
            parts.push("no cases run".to_string());
        }

        let line = format!(
            "\n{} in {:.2}s",
            parts.join(", "),
            summary.duration.as_secs_f64()
        );
        self.line(&line);
        if let Err(e) = self.out.flush() {
            self.write_error(&e);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn render(records: &[VerdictRecord], style: ReportStyle) -> String {
        let mut reporter = ConsoleReporter::new(Vec::new(), style);
        let mut summary = RunSummary::default();
        reporter.on_run_start(records.len());
        for r in records {
            summary.record(r);
            reporter.on_case_complete(r);
        }
        reporter.on_run_complete(&summary);
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_closed_output_is_noted_and_run_continues() {
        let mut reporter = ConsoleReporter::new(ClosedPipe, ReportStyle::PLAIN);
        assert!(!reporter.write_failed);

        let mut summary = RunSummary::default();
        reporter.on_run_start(2);
        for record in [VerdictRecord::pass("01.in", 1), VerdictRecord::fail("02.in", 2, "x")] {
            summary.record(&record);
            reporter.on_case_complete(&record);
        }
        reporter.on_run_complete(&summary);

        assert!(reporter.write_failed);
        assert_eq!(summary.total, 2);
    }

    #[test]
    fn test_header_row() {
        assert_eq!(header_row(), "Verdict         Test        Time");
    }

    #[test]
    fn test_pass_row_layout() {
        let row = verdict_row(&VerdictRecord::pass("01.in", 1234));
        assert_eq!(row, "[PASS]         01.in     1'234ms");
        assert_eq!(row.len(), VERDICT_WIDTH + TEST_WIDTH + TIME_WIDTH);
    }

    #[test]
    fn test_fail_row_layout() {
        let row = verdict_row(&VerdictRecord::fail("10.in", 7, "boom"));
        assert_eq!(row, "[FAIL]         10.in         7ms");
    }

    #[test]
    fn test_plain_report() {
        let out = render(
            &[
                VerdictRecord::pass("01.in", 3),
                VerdictRecord::fail("02.in", 4, "intersection parse error: bad"),
            ],
            ReportStyle::PLAIN,
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Verdict         Test        Time");
        assert_eq!(lines[1], "[PASS]         01.in         3ms");
        assert_eq!(lines[2], "[FAIL]         02.in         4ms");
        assert_eq!(lines[3], "intersection parse error: bad");
        assert_eq!(lines[4], "");
        assert!(lines[5].starts_with("1 passed, 1 failed in "));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_colored_rows_reset_after_each_line() {
        let out = render(
            &[VerdictRecord::pass("01.in", 1), VerdictRecord::fail("02.in", 1, "oops")],
            ReportStyle::COLORED,
        );
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].starts_with("\x1b[32m[PASS]"));
        assert!(lines[1].ends_with("\x1b[0m"));
        assert!(lines[2].starts_with("\x1b[31m[FAIL]"));
        assert!(lines[2].ends_with("\x1b[0m"));
        assert_eq!(lines[3], "\x1b[31moops\x1b[0m");
    }

    #[test]
    fn test_report_snapshot() {
        let out = render(
            &[
                VerdictRecord::pass("01.in", 3),
                VerdictRecord::fail("02.in", 1234, "intersection parse error: no output (got '')"),
                VerdictRecord::pass("03.in", 17),
            ],
            ReportStyle::PLAIN,
        );
        insta::assert_snapshot!(out.trim_end(), @r"
        Verdict         Test        Time
        [PASS]         01.in         3ms
        [FAIL]         02.in     1'234ms
        intersection parse error: no output (got '')
        [PASS]         03.in        17ms

        2 passed, 1 failed in 0.00s
        ");
    }

    proptest::proptest! {
        #[test]
        fn prop_rows_keep_fixed_width(ms in 0u64..100_000_000, id in 1u8..=99) {
            let name = format!("{id:02}.in");
            let row = verdict_row(&VerdictRecord::pass(name, ms));
            proptest::prop_assert_eq!(row.len(), VERDICT_WIDTH + TEST_WIDTH + TIME_WIDTH);
        }
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = RunSummary::default();
        summary.record(&VerdictRecord::pass("a", 0));
        summary.record(&VerdictRecord::fail("b", 0, "x"));
        summary.record(&VerdictRecord::pass("c", 0));
        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert!(!summary.all_passed());
    }
}
