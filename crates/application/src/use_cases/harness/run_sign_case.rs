use crate::ports::{CandidateProcess, StubResolverPort};
use crate::services::{path_arg, stage_input, ResultValidator};
use arc_conformance_domain::{CaseOutcome, DomainError, SignTestCase};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct RunSignCaseUseCase {
    resolver: Arc<dyn StubResolverPort>,
    candidate: Arc<dyn CandidateProcess>,
}

impl RunSignCaseUseCase {
    pub fn new(resolver: Arc<dyn StubResolverPort>, candidate: Arc<dyn CandidateProcess>) -> Self {
        Self {
            resolver,
            candidate,
        }
    }

    /// Runs the candidate as
    /// `<candidate> <messageFile> <port> <keyFile> <authResFile> <selector> <domain> <headers> <timestamp>`
    /// and returns its stdout.
    #[instrument(skip(self, case, candidate), fields(test_id = %case.id))]
    pub async fn run(
        &self,
        case: &SignTestCase,
        candidate: &Path,
        port: u16,
    ) -> Result<String, DomainError> {
        let message = stage_input("message", &case.message)?;
        let key = stage_input("key", &case.private_key)?;
        let auth_res = stage_input("auth-res", &case.auth_res)?;

        let handle = self.resolver.acquire(&case.txt_records, port).await?;
        let args = vec![
            path_arg(&message),
            handle.local_addr().port().to_string(),
            path_arg(&key),
            path_arg(&auth_res),
            case.selector.clone(),
            case.domain.clone(),
            case.header_list().to_string(),
            case.timestamp.clone(),
        ];
        let invocation = self.candidate.invoke(candidate, &args).await;
        handle.release().await;

        let output = invocation?;
        debug!(exit_code = ?output.exit_code, bytes = output.stdout.len(), "Signer finished");
        Ok(output.stdout)
    }

    pub async fn execute(
        &self,
        case: &SignTestCase,
        candidate: &Path,
        port: u16,
    ) -> Result<CaseOutcome, DomainError> {
        let stdout = self.run(case, candidate, port).await?;
        Ok(ResultValidator::validate_sign(case, &stdout))
    }
}
