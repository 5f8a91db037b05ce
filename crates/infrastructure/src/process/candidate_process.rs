use arc_conformance_application::ports::{CandidateOutput, CandidateProcess};
use arc_conformance_domain::DomainError;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Runs candidates with `tokio::process`. The candidate's stderr goes
/// straight to the harness's stderr; stdin is closed.
#[derive(Debug, Default, Clone)]
pub struct TokioCandidateProcess;

impl TokioCandidateProcess {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CandidateProcess for TokioCandidateProcess {
    async fn invoke(
        &self,
        program: &Path,
        args: &[String],
    ) -> Result<CandidateOutput, DomainError> {
        debug!(program = %program.display(), ?args, "Spawning candidate");

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| DomainError::CandidateLaunch {
                path: program.display().to_string(),
                reason: e.to_string(),
            })?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| DomainError::CandidateIo(e.to_string()))?;

        Ok(CandidateOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            exit_code: output.status.code(),
        })
    }
}
