use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Failed to parse fixture {path}: {reason}")]
    FixtureParse { path: String, reason: String },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Failed to launch candidate {path}: {reason}")]
    CandidateLaunch { path: String, reason: String },

    #[error("Candidate I/O error: {0}")]
    CandidateIo(String),

    #[error("Failed to bind stub DNS server on port {port}: {reason}")]
    DnsBind { port: u16, reason: String },

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
