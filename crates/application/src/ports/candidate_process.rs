use arc_conformance_domain::DomainError;
use async_trait::async_trait;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateOutput {
    pub stdout: String,
    /// `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
}

impl CandidateOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

#[async_trait]
pub trait CandidateProcess: Send + Sync {
    /// Runs `program` with `args` to completion and captures its stdout.
    ///
    /// Only a failure to start the program is an error; a non-zero exit is
    /// reported through [`CandidateOutput::exit_code`].
    async fn invoke(&self, program: &Path, args: &[String])
        -> Result<CandidateOutput, DomainError>;
}
