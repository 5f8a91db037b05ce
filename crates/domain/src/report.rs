use crate::Operation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    Failed { reason: String },
}

impl CaseOutcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        CaseOutcome::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, CaseOutcome::Passed)
    }
}

#[derive(Debug, Clone)]
pub struct CaseResult {
    pub id: String,
    pub operation: Operation,
    pub outcome: CaseOutcome,
}

/// Results of a run, in the order the cases were executed.
#[derive(Debug, Clone, Default)]
pub struct SuiteReport {
    results: Vec<CaseResult>,
}

impl SuiteReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: CaseResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[CaseResult] {
        &self.results
    }

    pub fn get(&self, id: &str) -> Option<&CaseResult> {
        self.results.iter().find(|r| r.id == id)
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_pass()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results.iter().filter(|r| !r.outcome.is_pass())
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}
