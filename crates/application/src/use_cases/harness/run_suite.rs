use super::{RunSignCaseUseCase, RunVerifyCaseUseCase};
use crate::ports::{CandidateProcess, StubResolverPort};
use arc_conformance_domain::{CaseOutcome, CaseResult, DomainError, SuiteReport, TestCase};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct SuiteRun {
    pub candidate: PathBuf,
    pub port: u16,
    /// Only run the case with this id.
    pub test_filter: Option<String>,
}

impl SuiteRun {
    pub fn new(candidate: impl Into<PathBuf>, port: u16) -> Self {
        Self {
            candidate: candidate.into(),
            port,
            test_filter: None,
        }
    }

    pub fn with_test_filter(mut self, id: impl Into<String>) -> Self {
        self.test_filter = Some(id.into());
        self
    }

    fn selects(&self, case: &TestCase) -> bool {
        self.test_filter
            .as_deref()
            .map_or(true, |id| case.id() == id)
    }
}

pub struct RunSuiteUseCase {
    verify: RunVerifyCaseUseCase,
    sign: RunSignCaseUseCase,
}

impl RunSuiteUseCase {
    pub fn new(resolver: Arc<dyn StubResolverPort>, candidate: Arc<dyn CandidateProcess>) -> Self {
        Self {
            verify: RunVerifyCaseUseCase::new(resolver.clone(), candidate.clone()),
            sign: RunSignCaseUseCase::new(resolver, candidate),
        }
    }

    /// Runs the selected cases one at a time in fixture order.
    ///
    /// A wrong answer from the candidate is recorded as a failed case and the
    /// run continues. An infrastructure error (the candidate cannot be
    /// started, the port cannot be bound) ends the run and is returned; the
    /// case it happened in gets no result.
    #[instrument(skip_all, fields(candidate = %run.candidate.display(), port = run.port))]
    pub async fn execute<F>(
        &self,
        cases: &[TestCase],
        run: &SuiteRun,
        mut on_result: F,
    ) -> Result<SuiteReport, DomainError>
    where
        F: FnMut(&CaseResult),
    {
        let mut report = SuiteReport::new();

        for case in cases.iter().filter(|case| run.selects(case)) {
            let start = Instant::now();

            let outcome = match case {
                TestCase::Verify(verify) => {
                    self.verify
                        .execute(verify, &run.candidate, run.port)
                        .await?
                }
                TestCase::Sign(sign) => self.sign.execute(sign, &run.candidate, run.port).await?,
            };

            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &outcome {
                CaseOutcome::Passed => info!(test_id = %case.id(), elapsed_ms, "Case passed"),
                CaseOutcome::Failed { reason } => {
                    warn!(test_id = %case.id(), elapsed_ms, reason = %reason, "Case failed")
                }
            }

            let result = CaseResult {
                id: case.id().to_string(),
                operation: case.operation(),
                outcome,
            };
            on_result(&result);
            report.record(result);
        }

        info!(
            total = report.total(),
            passed = report.passed(),
            failed = report.failed(),
            "Suite finished"
        );
        Ok(report)
    }
}
