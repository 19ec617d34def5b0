use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::LottoError;
use crate::text_manipulators::slugify;

/// The two lottery authorities whose boards this crate reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LotteryBoard {
    #[serde(rename = "NLB")]
    National,
    #[serde(rename = "DLB")]
    Development,
}

impl LotteryBoard {
    pub fn code(self) -> &'static str {
        match self {
            LotteryBoard::National => "NLB",
            LotteryBoard::Development => "DLB",
        }
    }

    /// Shape a user-supplied lottery name the way this board addresses it.
    /// NLB pages are keyed by lowercase-hyphenated slugs; DLB wants the name
    /// exactly as published.
    pub fn normalize_name(self, raw: &str) -> String {
        match self {
            LotteryBoard::National => slugify(raw),
            LotteryBoard::Development => raw.trim().to_string(),
        }
    }

    /// Whether a catalog entry answers to an already-normalized request.
    pub fn name_matches(self, catalog_name: &str, wanted: &str) -> bool {
        match self {
            LotteryBoard::National => slugify(catalog_name) == wanted,
            LotteryBoard::Development => catalog_name == wanted,
        }
    }
}

impl fmt::Display for LotteryBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LotteryBoard {
    type Err = LottoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nlb" | "national" => Ok(LotteryBoard::National),
            "dlb" | "development" => Ok(LotteryBoard::Development),
            other => Err(LottoError::Validation(format!(
                "unknown board '{other}' (expected nlb or dlb)"
            ))),
        }
    }
}
