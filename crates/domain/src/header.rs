use std::collections::BTreeSet;
use std::fmt;

/// The three header fields an ARC signer adds per hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeaderKind {
    ArcAuthenticationResults,
    ArcMessageSignature,
    ArcSeal,
}

impl HeaderKind {
    pub const ALL: [HeaderKind; 3] = [
        HeaderKind::ArcAuthenticationResults,
        HeaderKind::ArcMessageSignature,
        HeaderKind::ArcSeal,
    ];

    pub fn field_name(&self) -> &'static str {
        match self {
            HeaderKind::ArcAuthenticationResults => "ARC-Authentication-Results",
            HeaderKind::ArcMessageSignature => "ARC-Message-Signature",
            HeaderKind::ArcSeal => "ARC-Seal",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            HeaderKind::ArcAuthenticationResults => "AAR",
            HeaderKind::ArcMessageSignature => "AMS",
            HeaderKind::ArcSeal => "AS",
        }
    }

    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.field_name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for HeaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

/// One `Field-Name: tag=value; tag=value` block of signer output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderAssertion {
    pub field_name: String,
    /// Unfolded value with whitespace runs collapsed to a single space.
    pub value: String,
    /// Parameters of `value`, whitespace removed.
    pub tokens: BTreeSet<String>,
}

impl HeaderAssertion {
    /// Parses a single block. Returns `None` when the block has no colon.
    pub fn parse(block: &str) -> Option<Self> {
        let (name, value) = block.split_once(':')?;
        let value = collapse_whitespace(value);
        Some(Self {
            field_name: name.trim().to_string(),
            tokens: split_parameters(&value),
            value,
        })
    }

    /// Splits output into blank-line separated blocks and parses each one.
    ///
    /// Blocks without a colon are dropped; the caller decides what to do with
    /// field names it does not recognize.
    pub fn parse_blocks(output: &str) -> Vec<Self> {
        let normalized = output.replace("\r\n", "\n");
        let mut blocks = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for line in normalized.lines() {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    blocks.push(current.join("\n"));
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            blocks.push(current.join("\n"));
        }

        blocks.iter().filter_map(|b| Self::parse(b)).collect()
    }

    pub fn kind(&self) -> Option<HeaderKind> {
        HeaderKind::from_field_name(&self.field_name)
    }
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits a `;`-delimited parameter list into non-empty tokens with all
/// whitespace removed, so folding and FWS around `=` do not matter.
pub fn split_parameters(value: &str) -> BTreeSet<String> {
    value
        .split(';')
        .map(strip_whitespace)
        .filter(|token| !token.is_empty())
        .collect()
}

pub fn strip_whitespace(token: &str) -> String {
    token.split_whitespace().collect()
}
