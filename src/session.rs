use log::debug;

use crate::board::LotteryBoard;
use crate::config::ScrapeConfig;
use crate::error::{LottoError, Result};
use crate::locate::FetchSpec;
use crate::requests::{RawPage, RequestClient};

/// One operation's network identity against a single board. The cookie jar
/// inside the client is what ties the paginated fetches of a single call
/// together; nothing is shared across operations.
pub struct BoardSession {
    pub board: LotteryBoard,
    client: RequestClient,
}

impl BoardSession {
    /// Open a session against `board`. NLB hands out the cookies its result
    /// queries require on the site root, so a National session performs that
    /// warm-up request first. DLB needs no ceremony.
    pub async fn acquire(board: LotteryBoard, config: &ScrapeConfig) -> Result<Self> {
        let client = RequestClient::new(config.request_timeout)?;
        let session = Self { board, client };
        if board == LotteryBoard::National {
            let root = config.base_url(board);
            let page = session.client.fetch(root, &[]).await?;
            if !page.ok() {
                return Err(LottoError::Network(format!(
                    "NLB warm-up request to {root} answered HTTP {}",
                    page.status
                )));
            }
            debug!("acquired NLB session via {root}");
        }
        Ok(session)
    }

    pub async fn fetch(&self, spec: &FetchSpec) -> Result<RawPage> {
        self.client.fetch(&spec.url, &spec.query).await
    }
}
