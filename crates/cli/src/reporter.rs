use arc_conformance_domain::{CaseOutcome, CaseResult, SuiteReport};
use std::io::{self, Write};
use std::time::Duration;

const HEAVY_RULE: &str =
    "======================================================================";
const LIGHT_RULE: &str =
    "----------------------------------------------------------------------";

/// Plain-text progress and summary in the familiar unittest layout.
pub struct TextReporter<W: Write> {
    out: W,
    verbose: bool,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W, verbose: bool) -> Self {
        Self { out, verbose }
    }

    pub fn case_finished(&mut self, result: &CaseResult) -> io::Result<()> {
        let passed = result.outcome.is_pass();
        if self.verbose {
            let status = if passed { "ok" } else { "FAIL" };
            writeln!(self.out, "{} ... {}", result.id, status)?;
        } else {
            write!(self.out, "{}", if passed { "." } else { "F" })?;
        }
        self.out.flush()
    }

    pub fn summary(&mut self, report: &SuiteReport, elapsed: Duration) -> io::Result<()> {
        if !self.verbose && report.total() > 0 {
            writeln!(self.out)?;
        }

        for failure in report.failures() {
            if let CaseOutcome::Failed { reason } = &failure.outcome {
                writeln!(self.out, "{}", HEAVY_RULE)?;
                writeln!(self.out, "FAIL: {} ({})", failure.id, failure.operation)?;
                writeln!(self.out, "{}", LIGHT_RULE)?;
                writeln!(self.out, "{}", reason)?;
                writeln!(self.out)?;
            }
        }

        writeln!(self.out, "{}", LIGHT_RULE)?;
        let plural = if report.total() == 1 { "" } else { "s" };
        writeln!(
            self.out,
            "Ran {} test{} in {:.3}s",
            report.total(),
            plural,
            elapsed.as_secs_f64()
        )?;
        writeln!(self.out)?;

        if report.is_success() {
            writeln!(self.out, "OK")?;
        } else {
            writeln!(self.out, "FAILED (failures={})", report.failed())?;
        }
        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}
