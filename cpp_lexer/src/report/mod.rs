//! Report output
//!
//! Two per-token sinks (trace line, running summary) that can be switched off
//! independently, plus the final summary which is always written.

pub mod summary;

use crate::classification::{ClassificationState, Tally};
use crate::config::runtime::ReportPreferences;
use crate::tokens::Category;
use std::io::{self, Write};

pub use summary::{render_set, write_running_summary, CategorySummary, FinalReport};

/// `<token> is <label>`
pub fn write_trace_line<W: Write>(out: &mut W, lexeme: &str, category: Category) -> io::Result<()> {
    writeln!(out, "{} is {}", lexeme, category.label())
}

/// Writes per-token output for a classification pass
pub struct Reporter<W: Write> {
    out: W,
    preferences: ReportPreferences,
    lines_written: usize,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, preferences: ReportPreferences) -> Self {
        Self {
            out,
            preferences,
            lines_written: 0,
        }
    }

    /// Called once per classified lexeme, after the tally is updated
    pub fn on_classified(
        &mut self,
        lexeme: &str,
        category: Category,
        tally: &Tally,
    ) -> io::Result<()> {
        if self.preferences.emit_trace {
            write_trace_line(&mut self.out, lexeme, category)?;
            self.lines_written += 1;
        }
        if self.preferences.emit_running_summary {
            write_running_summary(&mut self.out, tally)?;
            self.lines_written += 7;
        }
        Ok(())
    }

    pub fn write_final_text(&mut self, state: &ClassificationState) -> io::Result<FinalReport> {
        let report = FinalReport::from_state(state);
        report.write_text(&mut self.out)?;
        self.lines_written += 2 + 2 * report.categories.len();
        self.out.flush()?;
        Ok(report)
    }

    /// Write an already-rendered document followed by a newline
    pub fn write_document(&mut self, document: &str) -> io::Result<()> {
        writeln!(self.out, "{}", document)?;
        self.lines_written += document.lines().count().max(1);
        self.out.flush()
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::runtime::ReportFormat;

    fn prefs(emit_trace: bool, emit_running_summary: bool) -> ReportPreferences {
        ReportPreferences {
            emit_trace,
            emit_running_summary,
            format: ReportFormat::Text,
        }
    }

    fn one_keyword() -> Tally {
        let mut state = ClassificationState::new();
        state.record("int", Category::Keyword);
        *state.tally()
    }

    #[test]
    fn test_trace_line() {
        let mut out = Vec::new();
        write_trace_line(&mut out, "x", Category::Identifier).unwrap();
        assert_eq!(out, b"x is an identifier\n");
    }

    #[test]
    fn test_trace_and_summary_enabled() {
        let mut reporter = Reporter::new(Vec::new(), prefs(true, true));
        reporter
            .on_classified("int", Category::Keyword, &one_keyword())
            .unwrap();

        assert_eq!(reporter.lines_written(), 8);
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(text.starts_with("int is a keyword\n---- SIMULATION SUMMARY ----\n"));
        assert!(text.contains("Keywords: 1\n"));
    }

    #[test]
    fn test_trace_only() {
        let mut reporter = Reporter::new(Vec::new(), prefs(true, false));
        reporter
            .on_classified("int", Category::Keyword, &one_keyword())
            .unwrap();

        assert_eq!(reporter.into_inner(), b"int is a keyword\n");
    }

    #[test]
    fn test_summary_only() {
        let mut reporter = Reporter::new(Vec::new(), prefs(false, true));
        reporter
            .on_classified("int", Category::Keyword, &one_keyword())
            .unwrap();

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(!text.contains(" is "));
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn test_quiet_mode_still_writes_final_summary() {
        let mut reporter = Reporter::new(Vec::new(), ReportPreferences::quiet());
        let mut state = ClassificationState::new();
        state.record("int", Category::Keyword);

        reporter
            .on_classified("int", Category::Keyword, state.tally())
            .unwrap();
        let report = reporter.write_final_text(&state).unwrap();

        assert_eq!(report.count(Category::Keyword), 1);
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(text.starts_with(summary::FINAL_SUMMARY_HEADER));
        assert_eq!(text.lines().count(), 12);
    }
}
