//! Rule-based output file naming
//!
//! A [`RuleSet`] is an ordered list of [`NamingRule`]s. Each rule turns the
//! facts about one source image into a token; tokens are joined with `_` and
//! the original extension is appended.

use crate::constants::{DATE_FORMAT, KIB, RULE_SEPARATOR};
use crate::error::{BatchError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingRule {
    /// 1-based position in the batch
    Index,
    /// File name without extension
    Stem,
    /// File name with extension
    FileName,
    Width,
    Height,
    /// Last modification date, UTC
    ModifiedDate,
    /// Local date when the batch runs
    CurrentDate,
    SizeAuto,
    SizeKib,
    SizeBytes,
}

impl NamingRule {
    pub const ALL: [NamingRule; 10] = [
        NamingRule::Index,
        NamingRule::Stem,
        NamingRule::FileName,
        NamingRule::Width,
        NamingRule::Height,
        NamingRule::ModifiedDate,
        NamingRule::CurrentDate,
        NamingRule::SizeAuto,
        NamingRule::SizeKib,
        NamingRule::SizeBytes,
    ];

    /// Menu number shown to the user.
    pub fn id(self) -> u8 {
        match self {
            NamingRule::Index => 1,
            NamingRule::Stem => 2,
            NamingRule::FileName => 3,
            NamingRule::Width => 4,
            NamingRule::Height => 5,
            NamingRule::ModifiedDate => 6,
            NamingRule::CurrentDate => 7,
            NamingRule::SizeAuto => 8,
            NamingRule::SizeKib => 9,
            NamingRule::SizeBytes => 10,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| rule.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            NamingRule::Index => "Sequence number",
            NamingRule::Stem => "File name without extension",
            NamingRule::FileName => "File name with extension",
            NamingRule::Width => "Image width",
            NamingRule::Height => "Image height",
            NamingRule::ModifiedDate => "Modification date (UTC)",
            NamingRule::CurrentDate => "Current date",
            NamingRule::SizeAuto => "Size (auto)",
            NamingRule::SizeKib => "Size (KB)",
            NamingRule::SizeBytes => "Size (bytes)",
        }
    }

    pub fn render(self, index: usize, facts: &ImageFacts, today: NaiveDate) -> String {
        match self {
            NamingRule::Index => index.to_string(),
            NamingRule::Stem => facts.stem.clone(),
            NamingRule::FileName => format!("{}{}", facts.stem, facts.extension),
            NamingRule::Width => facts.width.to_string(),
            NamingRule::Height => facts.height.to_string(),
            NamingRule::ModifiedDate => facts.modified.format(DATE_FORMAT).to_string(),
            NamingRule::CurrentDate => today.format(DATE_FORMAT).to_string(),
            NamingRule::SizeAuto => facts.size.to_string(),
            NamingRule::SizeKib => format!("{}KB", facts.size / KIB),
            NamingRule::SizeBytes => format!("{}B", facts.size),
        }
    }
}

impl fmt::Display for NamingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for NamingRule {
    type Err = BatchError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BatchError::UnknownRule(trimmed.to_string()));
        }
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(NamingRule::from_id)
            .ok_or_else(|| BatchError::UnknownRule(trimmed.to_string()))
    }
}

/// Everything a rule may need to know about one source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFacts {
    pub stem: String,
    /// Includes the leading dot, or is empty when the file has no extension.
    pub extension: String,
    pub width: u32,
    pub height: u32,
    pub modified: DateTime<Utc>,
    pub size: u64,
}

/// Outcome of lenient rule-list parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRules {
    pub rules: Vec<NamingRule>,
    pub rejected: Vec<String>,
}

/// Parses a comma-separated list such as `"1, 4,5"`.
///
/// Blank entries are ignored. Anything that is not a known rule number lands in
/// `rejected` instead of failing the whole list.
pub fn parse_rule_list(input: &str) -> ParsedRules {
    let mut parsed = ParsedRules::default();
    for entry in input.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        match entry.parse::<NamingRule>() {
            Ok(rule) => parsed.rules.push(rule),
            Err(_) => parsed.rejected.push(entry.to_string()),
        }
    }
    parsed
}

/// A non-empty, ordered list of naming rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet(Vec<NamingRule>);

impl RuleSet {
    pub fn new(rules: Vec<NamingRule>) -> Result<Self> {
        if rules.is_empty() {
            return Err(BatchError::EmptyRuleSet);
        }
        Ok(Self(rules))
    }

    pub fn rules(&self) -> &[NamingRule] {
        &self.0
    }

    /// Builds the output file name for the `index`-th image (1-based).
    pub fn file_name(&self, index: usize, facts: &ImageFacts, today: NaiveDate) -> String {
        let tokens: Vec<String> = self
            .0
            .iter()
            .map(|rule| rule.render(index, facts, today))
            .collect();
        format!("{}{}", tokens.join(RULE_SEPARATOR), facts.extension)
    }
}

impl FromStr for RuleSet {
    type Err = BatchError;

    /// Strict variant used for command-line flags: the first unknown entry is an error.
    fn from_str(s: &str) -> Result<Self> {
        let parsed = parse_rule_list(s);
        if let Some(first) = parsed.rejected.into_iter().next() {
            return Err(BatchError::UnknownRule(first));
        }
        RuleSet::new(parsed.rules)
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<String> = self.0.iter().map(|r| r.id().to_string()).collect();
        write!(f, "{}", ids.join(","))
    }
}
