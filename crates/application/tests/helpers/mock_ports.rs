#![allow(dead_code)]

use arc_conformance_application::ports::{
    CandidateOutput, CandidateProcess, StubResolverHandle, StubResolverPort,
};
use arc_conformance_domain::{DomainError, TxtRecordSet};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct ResolverState {
    acquisitions: Vec<(TxtRecordSet, u16)>,
    live: usize,
    released: usize,
    dropped_without_release: usize,
    bind_error: Option<DomainError>,
}

#[derive(Clone, Default)]
pub struct MockStubResolver {
    state: Arc<Mutex<ResolverState>>,
}

impl MockStubResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_with(&self, error: DomainError) {
        self.state.lock().unwrap().bind_error = Some(error);
    }

    pub fn acquisitions(&self) -> Vec<(TxtRecordSet, u16)> {
        self.state.lock().unwrap().acquisitions.clone()
    }

    pub fn live(&self) -> usize {
        self.state.lock().unwrap().live
    }

    pub fn released(&self) -> usize {
        self.state.lock().unwrap().released
    }

    pub fn dropped_without_release(&self) -> usize {
        self.state.lock().unwrap().dropped_without_release
    }
}

#[async_trait]
impl StubResolverPort for MockStubResolver {
    async fn acquire(
        &self,
        records: &TxtRecordSet,
        port: u16,
    ) -> Result<Box<dyn StubResolverHandle>, DomainError> {
        let mut state = self.state.lock().unwrap();
        if let Some(err) = state.bind_error.clone() {
            return Err(err);
        }
        state.acquisitions.push((records.clone(), port));
        state.live += 1;

        Ok(Box::new(MockResolverHandle {
            state: self.state.clone(),
            addr: SocketAddr::from(([127, 0, 0, 1], port)),
            released: false,
        }))
    }
}

pub struct MockResolverHandle {
    state: Arc<Mutex<ResolverState>>,
    addr: SocketAddr,
    released: bool,
}

#[async_trait]
impl StubResolverHandle for MockResolverHandle {
    fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    async fn release(mut self: Box<Self>) {
        self.released = true;
        let mut state = self.state.lock().unwrap();
        state.live -= 1;
        state.released += 1;
    }
}

impl Drop for MockResolverHandle {
    fn drop(&mut self) {
        if !self.released {
            let mut state = self.state.lock().unwrap();
            state.live -= 1;
            state.dropped_without_release += 1;
        }
    }
}

/// What the mock candidate saw when it was invoked.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    /// Contents of every argument that named a readable file at call time.
    pub files: Vec<(usize, String)>,
    pub live_resolvers: usize,
}

#[derive(Default)]
struct CandidateState {
    scripted: VecDeque<CandidateOutput>,
    default_stdout: String,
    invocations: Vec<Invocation>,
    launch_error: Option<DomainError>,
    fail_launch_on_call: Option<usize>,
}

#[derive(Clone, Default)]
pub struct MockCandidateProcess {
    state: Arc<Mutex<CandidateState>>,
    resolver: Option<MockStubResolver>,
}

impl MockCandidateProcess {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records how many stub resolvers are live during each invocation.
    pub fn observing(resolver: &MockStubResolver) -> Self {
        Self {
            state: Arc::default(),
            resolver: Some(resolver.clone()),
        }
    }

    pub fn always_print(&self, stdout: &str) {
        self.state.lock().unwrap().default_stdout = stdout.to_string();
    }

    pub fn then_print(&self, stdout: &str) {
        self.then_exit(stdout, 0);
    }

    pub fn then_exit(&self, stdout: &str, code: i32) {
        self.state.lock().unwrap().scripted.push_back(CandidateOutput {
            stdout: stdout.to_string(),
            exit_code: Some(code),
        });
    }

    pub fn fail_launch(&self, error: DomainError) {
        self.state.lock().unwrap().launch_error = Some(error);
    }

    /// Fails to launch on the n-th invocation (0-based), succeeds otherwise.
    pub fn fail_launch_on_call(&self, call: usize, error: DomainError) {
        let mut state = self.state.lock().unwrap();
        state.fail_launch_on_call = Some(call);
        state.launch_error = Some(error);
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.state.lock().unwrap().invocations.clone()
    }
}

#[async_trait]
impl CandidateProcess for MockCandidateProcess {
    async fn invoke(
        &self,
        program: &Path,
        args: &[String],
    ) -> Result<CandidateOutput, DomainError> {
        let files = args
            .iter()
            .enumerate()
            .filter_map(|(i, arg)| std::fs::read_to_string(arg).ok().map(|c| (i, c)))
            .collect();
        let live_resolvers = self.resolver.as_ref().map_or(0, |r| r.live());

        let mut state = self.state.lock().unwrap();
        let call = state.invocations.len();
        state.invocations.push(Invocation {
            program: program.to_path_buf(),
            args: args.to_vec(),
            files,
            live_resolvers,
        });

        if let Some(err) = state.launch_error.clone() {
            if state.fail_launch_on_call.map_or(true, |n| n == call) {
                return Err(err);
            }
        }

        Ok(state.scripted.pop_front().unwrap_or_else(|| CandidateOutput {
            stdout: state.default_stdout.clone(),
            exit_code: Some(0),
        }))
    }
}
