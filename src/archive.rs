use std::collections::HashSet;

use log::debug;

use crate::config::ScrapeConfig;
use crate::error::Result;
use crate::parse;
use crate::record::ResultRecord;
use crate::session::BoardSession;

/// Walks one lottery's archive newest-first, a page per call. `None` once
/// the archive is exhausted or the configured page ceiling is reached; an
/// empty page counts as exhaustion.
pub struct ArchiveWalker<'a> {
    session: &'a BoardSession,
    config: &'a ScrapeConfig,
    lottery: &'a str,
    next_page: usize,
}

impl<'a> ArchiveWalker<'a> {
    pub fn new(session: &'a BoardSession, config: &'a ScrapeConfig, lottery: &'a str) -> Self {
        Self {
            session,
            config,
            lottery,
            next_page: 1,
        }
    }

    /// 1-based number of the page most recently fetched.
    pub fn page_no(&self) -> usize {
        self.next_page.saturating_sub(1)
    }

    pub async fn next_page(&mut self) -> Result<Option<Vec<ResultRecord>>> {
        if self.next_page > self.config.archive_page_cap {
            debug!(
                "archive scan for {} stopping at the {}-page ceiling",
                self.lottery, self.config.archive_page_cap
            );
            return Ok(None);
        }
        let spec = self
            .config
            .lottery_page(self.session.board, self.lottery)
            .with("page", self.next_page);
        let page = self.session.fetch(&spec).await?;
        self.next_page += 1;
        let records = parse::parse_results_page(&page, self.session.board)?;
        if records.is_empty() {
            return Ok(None);
        }
        Ok(Some(records))
    }
}

/// Up to `limit` most recent results, newest first. Coming up short of
/// `limit` because the archive ended is a normal outcome. Both boards repeat
/// entries across page boundaries now and then; repeats are dropped so each
/// draw appears once, still in archive order.
pub async fn latest(
    session: &BoardSession,
    config: &ScrapeConfig,
    lottery: &str,
    limit: usize,
) -> Result<Vec<ResultRecord>> {
    let mut collected: Vec<ResultRecord> = Vec::with_capacity(limit);
    let mut seen: HashSet<String> = HashSet::new();
    let mut walker = ArchiveWalker::new(session, config, lottery);
    'pages: while let Some(records) = walker.next_page().await? {
        for record in records {
            if !seen.insert(record.draw.clone()) {
                continue;
            }
            collected.push(record);
            if collected.len() == limit {
                break 'pages;
            }
        }
    }
    Ok(collected)
}
