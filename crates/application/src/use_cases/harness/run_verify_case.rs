use crate::ports::{CandidateProcess, StubResolverPort};
use crate::services::{path_arg, stage_input, ResultValidator};
use arc_conformance_domain::{CaseOutcome, DomainError, VerifyTestCase};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct RunVerifyCaseUseCase {
    resolver: Arc<dyn StubResolverPort>,
    candidate: Arc<dyn CandidateProcess>,
}

impl RunVerifyCaseUseCase {
    pub fn new(resolver: Arc<dyn StubResolverPort>, candidate: Arc<dyn CandidateProcess>) -> Self {
        Self {
            resolver,
            candidate,
        }
    }

    /// Runs the candidate as `<candidate> <messageFile> <port>` and returns
    /// its stdout. The port passed on is the one the resolver actually bound.
    #[instrument(skip(self, case, candidate), fields(test_id = %case.id))]
    pub async fn run(
        &self,
        case: &VerifyTestCase,
        candidate: &Path,
        port: u16,
    ) -> Result<String, DomainError> {
        let message = stage_input("message", &case.message)?;

        let handle = self.resolver.acquire(&case.txt_records, port).await?;
        let args = vec![path_arg(&message), handle.local_addr().port().to_string()];
        let invocation = self.candidate.invoke(candidate, &args).await;
        handle.release().await;

        let output = invocation?;
        debug!(exit_code = ?output.exit_code, bytes = output.stdout.len(), "Verifier finished");
        Ok(output.stdout)
    }

    pub async fn execute(
        &self,
        case: &VerifyTestCase,
        candidate: &Path,
        port: u16,
    ) -> Result<CaseOutcome, DomainError> {
        let stdout = self.run(case, candidate, port).await?;
        Ok(ResultValidator::validate_verify(&case.cv, &stdout))
    }
}
