use crate::Operation;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DNS_PORT: u16 = 8053;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HarnessConfig {
    /// Port the stub DNS server binds on loopback and the candidate queries.
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_sign_fixture")]
    pub sign_fixture: String,

    #[serde(default = "default_verify_fixture")]
    pub verify_fixture: String,
}

impl HarnessConfig {
    pub fn fixture_for(&self, operation: Operation) -> &str {
        match operation {
            Operation::Sign => &self.sign_fixture,
            Operation::Verify => &self.verify_fixture,
        }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            sign_fixture: default_sign_fixture(),
            verify_fixture: default_verify_fixture(),
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_DNS_PORT
}

fn default_sign_fixture() -> String {
    Operation::Sign.default_fixture().to_string()
}

fn default_verify_fixture() -> String {
    Operation::Verify.default_fixture().to_string()
}
