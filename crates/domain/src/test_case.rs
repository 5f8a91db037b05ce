use crate::{HeaderKind, Operation, TxtRecordSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyTestCase {
    pub id: String,
    pub message: String,
    /// Expected chain validation verdict, e.g. `pass`, `fail`, `none`.
    pub cv: String,
    pub txt_records: TxtRecordSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignTestCase {
    pub id: String,
    pub message: String,
    /// Authentication-Results payload handed to the signer as input.
    pub auth_res: String,
    pub aar_template: String,
    pub ams_template: String,
    pub as_template: String,
    pub domain: String,
    pub selector: String,
    /// Colon-separated signed header names, exactly as the fixture gives them.
    pub headers: String,
    pub private_key: String,
    pub timestamp: String,
    pub txt_records: TxtRecordSet,
}

impl SignTestCase {
    pub fn template(&self, kind: HeaderKind) -> &str {
        match kind {
            HeaderKind::ArcAuthenticationResults => &self.aar_template,
            HeaderKind::ArcMessageSignature => &self.ams_template,
            HeaderKind::ArcSeal => &self.as_template,
        }
    }

    pub fn header_list(&self) -> &str {
        &self.headers
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestCase {
    Verify(VerifyTestCase),
    Sign(SignTestCase),
}

impl TestCase {
    pub fn id(&self) -> &str {
        match self {
            TestCase::Verify(case) => &case.id,
            TestCase::Sign(case) => &case.id,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            TestCase::Verify(_) => Operation::Verify,
            TestCase::Sign(_) => Operation::Sign,
        }
    }

    pub fn txt_records(&self) -> &TxtRecordSet {
        match self {
            TestCase::Verify(case) => &case.txt_records,
            TestCase::Sign(case) => &case.txt_records,
        }
    }
}

impl From<VerifyTestCase> for TestCase {
    fn from(case: VerifyTestCase) -> Self {
        TestCase::Verify(case)
    }
}

impl From<SignTestCase> for TestCase {
    fn from(case: SignTestCase) -> Self {
        TestCase::Sign(case)
    }
}
