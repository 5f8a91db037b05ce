//! ARC Conformance Harness Infrastructure Layer
pub mod dns;
pub mod fixtures;
pub mod process;
