mod candidate_process;
mod stub_resolver;

pub use candidate_process::{CandidateOutput, CandidateProcess};
pub use stub_resolver::{StubResolverHandle, StubResolverPort};
