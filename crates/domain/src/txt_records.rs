use serde::Deserialize;
use std::collections::BTreeMap;

/// TXT records served by the stub resolver for one test case.
///
/// Names are stored lower-cased without a trailing dot, so lookups follow
/// DNS matching rules: `Dummy._DomainKey.Example.COM.` finds the record
/// published as `dummy._domainkey.example.com`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, String>")]
pub struct TxtRecordSet {
    records: BTreeMap<String, String>,
}

impl TxtRecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl AsRef<str>, content: impl Into<String>) {
        self.records
            .insert(Self::normalize_name(name.as_ref()), content.into());
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.records
            .get(&Self::normalize_name(name))
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn normalize_name(name: &str) -> String {
        name.trim_end_matches('.').to_ascii_lowercase()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for TxtRecordSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, content) in iter {
            set.insert(name, content);
        }
        set
    }
}

impl From<BTreeMap<String, String>> for TxtRecordSet {
    fn from(records: BTreeMap<String, String>) -> Self {
        records.into_iter().collect()
    }
}
