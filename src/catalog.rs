use log::info;

use crate::board::LotteryBoard;
use crate::config::ScrapeConfig;
use crate::error::{LottoError, Result};
use crate::locate::FetchSpec;
use crate::parse;
use crate::record::CatalogEntry;
use crate::session::BoardSession;

/// Names the board currently publishes, fetched through an already-open
/// session. Sorted and deduplicated. Never cached: catalogs drift, and a
/// stale "currently active" answer is worse than a second fetch.
pub async fn fetch_names(session: &BoardSession, config: &ScrapeConfig) -> Result<Vec<String>> {
    let spec = FetchSpec::new(config.catalog_url(session.board));
    let page = session.fetch(&spec).await?;
    let mut names = parse::parse_catalog(&page, session.board)?;
    names.sort();
    names.dedup();
    Ok(names)
}

/// Fresh-session catalog fetch, the form the listing operation uses.
pub async fn list_lotteries(
    config: &ScrapeConfig,
    board: LotteryBoard,
) -> Result<Vec<CatalogEntry>> {
    let session = BoardSession::acquire(board, config).await?;
    let names = fetch_names(&session, config).await?;
    info!("{board} catalog lists {} lotteries", names.len());
    Ok(names
        .into_iter()
        .map(|name| CatalogEntry { board, name })
        .collect())
}

/// Reject names the board doesn't currently publish, before any result or
/// archive fetch happens. `wanted` is already normalized for the board;
/// `requested` is the caller's original spelling, kept for the error.
pub fn ensure_listed(
    board: LotteryBoard,
    names: &[String],
    wanted: &str,
    requested: &str,
) -> Result<()> {
    if names.iter().any(|name| board.name_matches(name, wanted)) {
        Ok(())
    } else {
        Err(LottoError::InvalidLottery {
            board,
            name: requested.to_string(),
        })
    }
}
