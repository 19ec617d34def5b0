use chrono::NaiveDate;
use log::debug;
use regex::Regex;

use crate::archive::ArchiveWalker;
use crate::board::LotteryBoard;
use crate::config::ScrapeConfig;
use crate::error::{LottoError, Result};
use crate::record::ResultRecord;
use crate::session::BoardSession;

/// Draw-number or calendar-date address of one result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    Draw(u32),
    Date(NaiveDate),
}

impl Locator {
    /// Positive draw numbers only.
    pub fn draw(n: i64) -> Result<Self> {
        if n <= 0 {
            return Err(LottoError::Validation(
                "draw number must be a positive integer".to_string(),
            ));
        }
        u32::try_from(n)
            .map(Locator::Draw)
            .map_err(|_| LottoError::Validation(format!("draw number {n} is out of range")))
    }

    /// Strict `YYYY-MM-DD`, and the date has to exist on the calendar.
    /// Shape is checked separately because chrono happily accepts loose
    /// forms like `2025-1-01`.
    pub fn date(s: &str) -> Result<Self> {
        let shape = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
        if !shape.is_match(s) {
            return Err(LottoError::Validation(format!(
                "date '{s}' must use the YYYY-MM-DD format (e.g. 2025-11-23)"
            )));
        }
        let parsed = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| LottoError::Validation(format!("'{s}' is not a valid calendar date")))?;
        Ok(Locator::Date(parsed))
    }

    pub fn describe(&self) -> String {
        match self {
            Locator::Draw(n) => format!("draw {n}"),
            Locator::Date(d) => format!("date {d}"),
        }
    }
}

/// A concrete page to fetch: URL plus query pairs. Encoding is left to the
/// HTTP client.
#[derive(Debug, Clone)]
pub struct FetchSpec {
    pub url: String,
    pub query: Vec<(&'static str, String)>,
}

impl FetchSpec {
    pub fn new(url: String) -> Self {
        Self {
            url,
            query: Vec::new(),
        }
    }

    pub fn with(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }
}

/// What locator resolution produced: a page that will carry the requested
/// record, or the record itself when the board forced an archive scan.
pub enum Resolution {
    Page(FetchSpec),
    Record(ResultRecord),
}

/// Map (board, lottery, locator) onto fetch parameters. NLB result pages
/// take the draw or date as direct query parameters; DLB publishes only a
/// reverse-chronological archive, so the scan happens here, bounded by the
/// configured page ceiling. Callers have already vetted `lottery` against
/// the board's catalog.
pub async fn resolve(
    session: &BoardSession,
    config: &ScrapeConfig,
    lottery: &str,
    locator: &Locator,
) -> Result<Resolution> {
    match session.board {
        LotteryBoard::National => {
            let page = config.lottery_page(session.board, lottery);
            let spec = match locator {
                Locator::Draw(n) => page.with("draw", n),
                Locator::Date(d) => page.with("date", *d),
            };
            Ok(Resolution::Page(spec))
        }
        LotteryBoard::Development => {
            let record = scan_archive(session, config, lottery, locator).await?;
            Ok(Resolution::Record(record))
        }
    }
}

async fn scan_archive(
    session: &BoardSession,
    config: &ScrapeConfig,
    lottery: &str,
    locator: &Locator,
) -> Result<ResultRecord> {
    let mut walker = ArchiveWalker::new(session, config, lottery);
    while let Some(records) = walker.next_page().await? {
        if let Some(hit) = records.iter().find(|r| r.matches(locator)) {
            debug!(
                "located {} {} on archive page {}",
                lottery,
                locator.describe(),
                walker.page_no()
            );
            return Ok(hit.clone());
        }
        // The archive runs newest-first. Once every record on a page
        // predates the target date, later pages cannot match.
        if let Locator::Date(target) = locator {
            if !records.is_empty() && records.iter().all(|r| r.date < *target) {
                break;
            }
        }
    }
    Err(LottoError::NotFound(format!(
        "no {} result matching {} within the scanned archive",
        lottery,
        locator.describe()
    )))
}
