use chrono::NaiveDate;
use serde::Serialize;

use crate::board::LotteryBoard;
use crate::locate::Locator;

/// One draw's published outcome. Draw identifiers and winning numbers stay
/// strings so leading zeros survive the trip through the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    pub draw: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter: Option<String>,
    pub numbers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prize_image: Option<String>,
}

impl ResultRecord {
    /// Whether this record answers to a locator. Draw comparison is numeric,
    /// so a zero-padded identifier still matches.
    pub fn matches(&self, locator: &Locator) -> bool {
        match locator {
            Locator::Draw(n) => self.draw.parse::<u32>().map(|d| d == *n).unwrap_or(false),
            Locator::Date(d) => self.date == *d,
        }
    }
}

/// One lottery a board currently publishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub board: LotteryBoard,
    pub name: String,
}
