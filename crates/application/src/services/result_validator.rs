//! Output checks for the two candidate operations.
//!
//! Verify output must equal the expected verdict after case folding.
//! Sign output is split into header blocks and each ARC header kind is
//! matched against its template. Tokens are compared with all whitespace
//! removed. Every literal template token must be produced verbatim, every
//! `tag=` placeholder must be produced with a non-empty value, and nothing
//! else may be produced.

use arc_conformance_domain::header::split_parameters;
use arc_conformance_domain::{CaseOutcome, HeaderAssertion, HeaderKind, SignTestCase};
use std::collections::BTreeSet;

pub struct ResultValidator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedParameters {
    /// Literal tokens plus the candidate tokens that filled placeholders.
    pub tokens: BTreeSet<String>,
    /// Literal template tokens; each must be produced as written.
    pub literals: BTreeSet<String>,
    /// Placeholder tags the candidate produced no value for.
    pub unfilled: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCheck {
    pub kind: HeaderKind,
    pub missing: bool,
    /// Literal template tokens absent from the output.
    pub absent: Vec<String>,
    pub unexpected: Vec<String>,
    pub unfilled: Vec<String>,
}

impl HeaderCheck {
    fn missing(kind: HeaderKind) -> Self {
        Self {
            kind,
            missing: true,
            absent: vec![],
            unexpected: vec![],
            unfilled: vec![],
        }
    }

    pub fn passed(&self) -> bool {
        !self.missing
            && self.absent.is_empty()
            && self.unexpected.is_empty()
            && self.unfilled.is_empty()
    }

    pub fn describe(&self) -> String {
        if self.missing {
            return format!("{} header missing", self.kind);
        }

        let mut problems = Vec::new();
        if !self.absent.is_empty() {
            problems.push(format!("missing parameters [{}]", self.absent.join("; ")));
        }
        if !self.unexpected.is_empty() {
            problems.push(format!("unexpected parameters [{}]", self.unexpected.join("; ")));
        }
        if !self.unfilled.is_empty() {
            problems.push(format!("no value for [{}]", self.unfilled.join(", ")));
        }
        if problems.is_empty() {
            return format!("{} ok", self.kind);
        }
        format!("{}: {}", self.kind, problems.join(", "))
    }
}

impl ResultValidator {
    pub fn validate_verify(expected_cv: &str, stdout: &str) -> CaseOutcome {
        if stdout.to_lowercase() == expected_cv.to_lowercase() {
            CaseOutcome::Passed
        } else {
            CaseOutcome::failed(format!(
                "expected cv {:?}, candidate printed {:?}",
                expected_cv, stdout
            ))
        }
    }

    pub fn validate_sign(case: &SignTestCase, stdout: &str) -> CaseOutcome {
        let blocks = HeaderAssertion::parse_blocks(stdout);

        let failures: Vec<String> = HeaderKind::ALL
            .into_iter()
            .map(|kind| Self::check_header(kind, case.template(kind), &blocks))
            .filter(|check| !check.passed())
            .map(|check| check.describe())
            .collect();

        if failures.is_empty() {
            CaseOutcome::Passed
        } else {
            CaseOutcome::failed(failures.join("; "))
        }
    }

    /// Checks one header kind. When several blocks carry the same field name
    /// the last one is used.
    pub fn check_header(
        kind: HeaderKind,
        template: &str,
        blocks: &[HeaderAssertion],
    ) -> HeaderCheck {
        let Some(produced) = blocks.iter().rev().find(|b| b.kind() == Some(kind)) else {
            return HeaderCheck::missing(kind);
        };

        let expected = Self::expected_parameters(template, produced);
        let absent = expected
            .literals
            .difference(&produced.tokens)
            .cloned()
            .collect();
        let unexpected = produced
            .tokens
            .difference(&expected.tokens)
            .cloned()
            .collect();

        HeaderCheck {
            kind,
            missing: false,
            absent,
            unexpected,
            unfilled: expected.unfilled,
        }
    }

    pub fn expected_parameters(template: &str, produced: &HeaderAssertion) -> ExpectedParameters {
        let mut tokens = BTreeSet::new();
        let mut literals = BTreeSet::new();
        let mut unfilled = Vec::new();

        for token in split_parameters(template) {
            let Some(tag) = placeholder_tag(&token).map(str::to_string) else {
                tokens.insert(token.clone());
                literals.insert(token);
                continue;
            };

            let filled: Vec<&String> = produced
                .tokens
                .iter()
                .filter(|p| has_value_for(p, &tag))
                .collect();

            if filled.is_empty() {
                unfilled.push(tag);
            } else {
                tokens.extend(filled.into_iter().cloned());
            }
        }

        ExpectedParameters {
            tokens,
            literals,
            unfilled,
        }
    }
}

/// `b=` is a placeholder for tag `b`; `b=abc` and `spf=pass` are literals.
fn placeholder_tag(token: &str) -> Option<&str> {
    let tag = token.strip_suffix('=')?;
    if tag.is_empty() || tag.contains('=') {
        return None;
    }
    Some(tag)
}

fn has_value_for(token: &str, tag: &str) -> bool {
    match token.split_once('=') {
        Some((name, value)) => name == tag && !value.is_empty(),
        None => false,
    }
}
