pub mod errors;
pub mod harness;
pub mod logging;
pub mod root;

pub use errors::ConfigError;
pub use harness::HarnessConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
