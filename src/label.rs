//! Category labels.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MailtabError, Result};

/// One of the five mutually exclusive inbox categories.
///
/// The numeric code is the value carried on `.L` lines in a corpus file and
/// the row/column index in a confusion matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Forums = 0,
    Personal = 1,
    Promotions = 2,
    Social = 3,
    Updates = 4,
}

impl Label {
    /// Number of known labels.
    pub const COUNT: usize = 5;

    /// All labels in ascending code order. Every per-label scan uses this order.
    pub const ALL: [Label; Label::COUNT] = [
        Label::Forums,
        Label::Personal,
        Label::Promotions,
        Label::Social,
        Label::Updates,
    ];

    /// Numeric code of this label.
    pub fn code(self) -> usize {
        self as usize
    }

    /// Label for a numeric code, if it is known.
    pub fn from_code(code: usize) -> Option<Label> {
        Label::ALL.get(code).copied()
    }

    /// Lower-case name of this label.
    pub fn name(self) -> &'static str {
        match self {
            Label::Forums => "forums",
            Label::Personal => "personal",
            Label::Promotions => "promotions",
            Label::Social => "social",
            Label::Updates => "updates",
        }
    }

    /// Parse a label from its name or its numeric code.
    pub fn parse_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(code) = s.parse::<usize>() {
            return Label::from_code(code)
                .ok_or_else(|| MailtabError::invalid_argument(format!("Unknown label code: {s}")));
        }

        Label::ALL
            .into_iter()
            .find(|label| label.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MailtabError::invalid_argument(format!("Unknown label: {s}")))
    }

    /// Legend line used in reports, e.g. `0 = forums, 1 = personal, ...`.
    pub fn legend() -> String {
        Label::ALL
            .iter()
            .map(|label| format!("{} = {}", label.code(), label.name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
