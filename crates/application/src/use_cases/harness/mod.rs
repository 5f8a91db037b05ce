mod run_sign_case;
mod run_suite;
mod run_verify_case;

pub use run_sign_case::RunSignCaseUseCase;
pub use run_suite::{RunSuiteUseCase, SuiteRun};
pub use run_verify_case::RunVerifyCaseUseCase;
