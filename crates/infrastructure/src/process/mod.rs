pub mod candidate_process;

pub use candidate_process::TokioCandidateProcess;
