use log::{error, info, warn};

use crate::archive;
use crate::board::LotteryBoard;
use crate::catalog;
use crate::config::ScrapeConfig;
use crate::error::{LottoError, Result};
use crate::locate::{self, Locator, Resolution};
use crate::parse;
use crate::record::{CatalogEntry, ResultRecord};
use crate::session::BoardSession;

/// Length of a `get_latest` answer when the caller doesn't say.
pub const DEFAULT_LATEST_LIMIT: usize = 5;
/// Hard ceiling on `get_latest`.
pub const MAX_LATEST_LIMIT: usize = 50;

/// The resolution engine. Every operation validates its inputs before any
/// network traffic, opens one session scoped to the call, and returns either
/// a complete answer or exactly one taxonomy error; nothing partial.
pub struct LottoEngine {
    config: ScrapeConfig,
}

impl LottoEngine {
    pub fn new(config: ScrapeConfig) -> Self {
        Self { config }
    }

    /// Currently published lotteries of a board, sorted by name. Always a
    /// fresh fetch; two consecutive calls hit the board twice.
    pub async fn list_active(&self, board: LotteryBoard) -> Result<Vec<CatalogEntry>> {
        let entries = catalog::list_lotteries(&self.config, board).await;
        log_outcome("list_active", board, &entries);
        entries
    }

    pub async fn get_by_draw(
        &self,
        board: LotteryBoard,
        lottery: &str,
        draw_number: i64,
    ) -> Result<ResultRecord> {
        let locator = Locator::draw(draw_number)?;
        self.get_by_locator(board, lottery, locator).await
    }

    pub async fn get_by_date(
        &self,
        board: LotteryBoard,
        lottery: &str,
        date: &str,
    ) -> Result<ResultRecord> {
        let locator = Locator::date(date)?;
        self.get_by_locator(board, lottery, locator).await
    }

    /// One draw's result. The catalog membership check always runs first, on
    /// the same session the result fetch then uses.
    pub async fn get_by_locator(
        &self,
        board: LotteryBoard,
        lottery: &str,
        locator: Locator,
    ) -> Result<ResultRecord> {
        let result = self.lookup(board, lottery, &locator).await;
        log_outcome("get_by_locator", board, &result);
        result
    }

    /// Up to `limit` most recent results, newest first. `limit` must sit in
    /// [1, 50]; fewer results than asked for means the archive ended early.
    pub async fn get_latest(
        &self,
        board: LotteryBoard,
        lottery: &str,
        limit: usize,
    ) -> Result<Vec<ResultRecord>> {
        let result = self.latest_inner(board, lottery, limit).await;
        log_outcome("get_latest", board, &result);
        result
    }

    async fn lookup(
        &self,
        board: LotteryBoard,
        lottery: &str,
        locator: &Locator,
    ) -> Result<ResultRecord> {
        let wanted = normalized_name(board, lottery)?;
        info!("resolving {board} {wanted} ({})", locator.describe());
        let session = BoardSession::acquire(board, &self.config).await?;
        let names = catalog::fetch_names(&session, &self.config).await?;
        catalog::ensure_listed(board, &names, &wanted, lottery)?;
        match locate::resolve(&session, &self.config, &wanted, locator).await? {
            Resolution::Record(record) => Ok(record),
            Resolution::Page(spec) => {
                let page = session.fetch(&spec).await?;
                let records = parse::parse_results_page(&page, board)?;
                records
                    .into_iter()
                    .find(|r| r.matches(locator))
                    .ok_or_else(|| {
                        LottoError::NotFound(format!(
                            "no {wanted} result for {}",
                            locator.describe()
                        ))
                    })
            }
        }
    }

    async fn latest_inner(
        &self,
        board: LotteryBoard,
        lottery: &str,
        limit: usize,
    ) -> Result<Vec<ResultRecord>> {
        if limit == 0 || limit > MAX_LATEST_LIMIT {
            return Err(LottoError::Validation(format!(
                "limit must be between 1 and {MAX_LATEST_LIMIT}, got {limit}"
            )));
        }
        let wanted = normalized_name(board, lottery)?;
        info!("fetching latest {limit} {board} results for {wanted}");
        let session = BoardSession::acquire(board, &self.config).await?;
        let names = catalog::fetch_names(&session, &self.config).await?;
        catalog::ensure_listed(board, &names, &wanted, lottery)?;
        archive::latest(&session, &self.config, &wanted, limit).await
    }
}

fn normalized_name(board: LotteryBoard, lottery: &str) -> Result<String> {
    let name = board.normalize_name(lottery);
    if name.is_empty() {
        return Err(LottoError::Validation(
            "lottery name must not be empty".to_string(),
        ));
    }
    Ok(name)
}

/// Parse failures mean our selectors went stale; those get the loud log
/// line. Everything else is the site or the caller behaving ordinarily.
fn log_outcome<T>(op: &str, board: LotteryBoard, result: &Result<T>) {
    match result {
        Ok(_) => {}
        Err(LottoError::Parse(msg)) => error!("{op} [{board}]: layout drift: {msg}"),
        Err(e) => warn!("{op} [{board}]: {e}"),
    }
}
