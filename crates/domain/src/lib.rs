//! ARC Conformance Harness Domain Layer
pub mod config;
pub mod errors;
pub mod header;
pub mod operation;
pub mod report;
pub mod test_case;
pub mod txt_records;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use header::{HeaderAssertion, HeaderKind};
pub use operation::Operation;
pub use report::{CaseOutcome, CaseResult, SuiteReport};
pub use test_case::{SignTestCase, TestCase, VerifyTestCase};
pub use txt_records::TxtRecordSet;
