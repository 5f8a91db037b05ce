//! Loads sign/verify scenarios from multi-document YAML fixture files.
//!
//! Each document holds the material shared by its tests (`txt_records`, and
//! for signing the key, selector, domain and header list) plus a `tests`
//! mapping of test id to test body. Tests keep document order, then key
//! order within a document.

use arc_conformance_domain::{
    DomainError, Operation, SignTestCase, TestCase, TxtRecordSet, VerifyTestCase,
};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct VerifyScenario {
    #[serde(default)]
    txt_records: TxtRecordSet,
    #[serde(default)]
    tests: Mapping,
}

#[derive(Debug, Deserialize)]
struct VerifyTestBody {
    message: String,
    cv: String,
}

#[derive(Debug, Deserialize)]
struct SignScenario {
    domain: String,
    sel: String,
    headers: String,
    privatekey: String,
    #[serde(default)]
    txt_records: TxtRecordSet,
    #[serde(default)]
    tests: Mapping,
}

#[derive(Debug, Deserialize)]
struct SignTestBody {
    message: String,
    t: Timestamp,
    #[serde(rename = "auth-res")]
    auth_res: String,
    #[serde(rename = "AAR")]
    aar: String,
    #[serde(rename = "AMS")]
    ams: String,
    #[serde(rename = "AS")]
    arc_seal: String,
}

/// Fixtures write `t` either bare (`t: 12345`) or quoted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Timestamp {
    Integer(i64),
    Text(String),
}

impl Timestamp {
    fn into_string(self) -> String {
        match self {
            Timestamp::Integer(t) => t.to_string(),
            Timestamp::Text(t) => t,
        }
    }
}

pub struct YamlFixtureLoader;

impl YamlFixtureLoader {
    pub fn load(path: &Path, operation: Operation) -> Result<Vec<TestCase>, DomainError> {
        let source = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|e| DomainError::FixtureParse {
            path: source.clone(),
            reason: e.to_string(),
        })?;

        let cases = Self::parse_str(&contents, operation, &source)?;
        info!(fixture = %source, operation = %operation, tests = cases.len(), "Fixture loaded");
        Ok(cases)
    }

    /// Parses fixture text. `source` only labels errors.
    pub fn parse_str(
        contents: &str,
        operation: Operation,
        source: &str,
    ) -> Result<Vec<TestCase>, DomainError> {
        let fail = |reason: String| DomainError::FixtureParse {
            path: source.to_string(),
            reason,
        };

        let mut cases = Vec::new();
        for (index, document) in serde_yaml::Deserializer::from_str(contents).enumerate() {
            let value = Value::deserialize(document).map_err(|e| fail(e.to_string()))?;
            if value.is_null() {
                continue;
            }

            let before = cases.len();
            match operation {
                Operation::Verify => parse_verify_document(value, &mut cases),
                Operation::Sign => parse_sign_document(value, &mut cases),
            }
            .map_err(|e| fail(format!("document {}: {}", index + 1, e)))?;

            debug!(document = index + 1, tests = cases.len() - before, "Parsed scenario");
        }

        Ok(cases)
    }
}

fn parse_verify_document(value: Value, cases: &mut Vec<TestCase>) -> Result<(), String> {
    let scenario: VerifyScenario = serde_yaml::from_value(value).map_err(|e| e.to_string())?;

    for (key, body) in scenario.tests {
        let id = test_id(&key)?;
        let body: VerifyTestBody =
            serde_yaml::from_value(body).map_err(|e| format!("test {}: {}", id, e))?;

        cases.push(TestCase::Verify(VerifyTestCase {
            id,
            message: body.message,
            cv: body.cv,
            txt_records: scenario.txt_records.clone(),
        }));
    }

    Ok(())
}

fn parse_sign_document(value: Value, cases: &mut Vec<TestCase>) -> Result<(), String> {
    let scenario: SignScenario = serde_yaml::from_value(value).map_err(|e| e.to_string())?;
    for (key, body) in scenario.tests {
        let id = test_id(&key)?;
        let body: SignTestBody =
            serde_yaml::from_value(body).map_err(|e| format!("test {}: {}", id, e))?;

        cases.push(TestCase::Sign(SignTestCase {
            id,
            message: body.message,
            auth_res: body.auth_res,
            aar_template: body.aar,
            ams_template: body.ams,
            as_template: body.arc_seal,
            domain: scenario.domain.clone(),
            selector: scenario.sel.clone(),
            headers: scenario.headers.clone(),
            private_key: scenario.privatekey.clone(),
            timestamp: body.t.into_string(),
            txt_records: scenario.txt_records.clone(),
        }));
    }

    Ok(())
}

fn test_id(key: &Value) -> Result<String, String> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!("unsupported test id {:?}", other)),
    }
}
