use arc_conformance_application::use_cases::RunSuiteUseCase;
use arc_conformance_infrastructure::dns::HickoryStubResolver;
use arc_conformance_infrastructure::process::TokioCandidateProcess;
use std::sync::Arc;

pub fn suite_runner() -> RunSuiteUseCase {
    let resolver = Arc::new(HickoryStubResolver::new());
    let candidate = Arc::new(TokioCandidateProcess::new());
    RunSuiteUseCase::new(resolver, candidate)
}
