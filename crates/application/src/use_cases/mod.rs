pub mod harness;

pub use harness::{RunSignCaseUseCase, RunSuiteUseCase, RunVerifyCaseUseCase, SuiteRun};
